use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Addr, Attribute, Binary, Deps, DepsMut, Empty, Env,
    MessageInfo, Order, Response, StdResult, Storage,
};
use cw_storage_plus::Bound;
use vaulta_base::{
    asset::{is_valid_code, Asset, MAX_PRECISION},
    error::registry::{ContractError, ContractResult},
    msg::{
        notification::TransferNotification,
        registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
        tokens::transfer_msg,
    },
    state::registry::{
        Config, ConfigOptional, Fees, TickerRecord, TokenDefinition, WhitelistPolicy, BALANCES,
        CONFIG, CONTRACTS, TOKENS,
    },
};
use vaulta_helpers::{
    answer::response,
    auth::{require_auth, require_owner},
};

pub const CONTRACT_NAME: &str = concat!("crates.io:vaulta__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

pub const REGISTRATION_FEE_MEMO: &str = "token registration fee";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(msg.owner.as_str()))?;

    Ok(response(
        "instantiate",
        CONTRACT_NAME,
        [attr("owner", msg.owner)],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&load_config(deps.storage)?)?),
        QueryMsg::Token { ticker } => Ok(to_json_binary(
            &TOKENS.may_load(deps.storage, &ticker)?,
        )?),
        QueryMsg::Tokens { start_after, limit } => query_tokens(deps, start_after, limit),
        QueryMsg::Contracts { start_after, limit } => query_contracts(deps, start_after, limit),
        QueryMsg::Balance { account } => {
            let account = deps.api.addr_validate(&account)?;
            Ok(to_json_binary(&BALANCES.may_load(deps.storage, &account)?)?)
        }
        QueryMsg::Ownership {} => Ok(to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?),
    }
}

fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> ContractResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let tokens = TOKENS
        .range(
            deps.storage,
            start_after.as_deref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<TickerRecord>>>()?;
    Ok(to_json_binary(&tokens)?)
}

fn query_contracts(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> ContractResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|contract| deps.api.addr_validate(&contract))
        .transpose()?;
    let contracts = CONTRACTS
        .keys(
            deps.storage,
            start_after.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(to_json_binary(&contracts)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    cw_utils::nonpayable(&info)?;
    match msg {
        ExecuteMsg::UpdateOwnership(action) => {
            cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(response::<(&str, &str), _>(
                "execute-update-ownership",
                CONTRACT_NAME,
                [],
            ))
        }
        ExecuteMsg::SetConfig { new_config } => execute_set_config(deps, info, new_config),
        ExecuteMsg::Enable {} => execute_set_enabled(deps, info, true),
        ExecuteMsg::Disable {} => execute_set_enabled(deps, info, false),
        ExecuteMsg::AddContract { contract } => execute_add_contract(deps, info, contract),
        ExecuteMsg::RmContract { contract } => execute_rm_contract(deps, info, contract),
        ExecuteMsg::AddToken {
            creator,
            ticker,
            precision,
        } => execute_add_token(deps, info, creator, ticker, precision),
        ExecuteMsg::RmToken { ticker } => execute_rm_token(deps, info, ticker),
        ExecuteMsg::RegToken {
            creator,
            ticker,
            payment,
            precision,
            contract,
        } => execute_reg_token(deps, env, info, creator, ticker, payment, precision, contract),
        ExecuteMsg::SetContract { ticker, contract } => {
            execute_set_contract(deps, info, ticker, contract)
        }
        ExecuteMsg::Withdraw { account, quantity } => {
            execute_withdraw(deps, env, info, account, quantity)
        }
        ExecuteMsg::OnTransfer(notification) => execute_on_transfer(deps, env, info, notification),
        ExecuteMsg::Reset {} => execute_reset(deps, info),
    }
}

fn load_config(storage: &dyn Storage) -> StdResult<Config> {
    Ok(CONFIG.may_load(storage)?.unwrap_or_default())
}

fn system_token(config: &Config) -> ContractResult<&TokenDefinition> {
    config
        .system_token
        .as_ref()
        .ok_or(ContractError::SystemTokenNotSet {})
}

fn execute_set_config(
    deps: DepsMut,
    info: MessageInfo,
    new_config: ConfigOptional,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let mut config = load_config(deps.storage)?;
    let mut attrs: Vec<Attribute> = Vec::new();

    if let Some(enabled) = new_config.enabled {
        config.enabled = enabled;
        attrs.push(attr("enabled", enabled.to_string()));
    }

    if let Some(system_token) = new_config.system_token {
        let contract = deps.api.addr_validate(system_token.contract.as_str())?;
        ensure!(
            system_token.symbol.is_valid(),
            ContractError::InvalidSymbol {}
        );
        attrs.push(attr("system_token_contract", contract.as_str()));
        attrs.push(attr("system_token_symbol", system_token.symbol.to_string()));
        config.system_token = Some(TokenDefinition {
            contract,
            symbol: system_token.symbol,
        });
    }

    if let Some(fees) = new_config.fees {
        let receiver = deps.api.addr_validate(fees.receiver.as_str())?;
        ensure!(fees.regtoken.is_valid(), ContractError::InvalidSymbol {});
        attrs.push(attr("fees_receiver", receiver.as_str()));
        attrs.push(attr("fees_regtoken", fees.regtoken.to_string()));
        config.fees = Some(Fees {
            receiver,
            regtoken: fees.regtoken,
        });
    }

    if let Some(regtoken) = new_config.regtoken {
        attrs.push(attr("regtoken_minlength", regtoken.minlength.to_string()));
        config.regtoken = Some(regtoken);
    }

    if let Some(whitelist_policy) = new_config.whitelist_policy {
        attrs.push(attr(
            "whitelist_policy",
            match whitelist_policy {
                WhitelistPolicy::Open => "open",
                WhitelistPolicy::Strict => "strict",
            },
        ));
        config.whitelist_policy = whitelist_policy;
    }

    if let (Some(system_token), Some(fees)) = (&config.system_token, &config.fees) {
        ensure!(
            fees.regtoken.symbol == system_token.symbol,
            ContractError::FeeSymbolMismatch {}
        );
    }
    if config.enabled {
        system_token(&config)?;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(response("execute-set-config", CONTRACT_NAME, attrs))
}

fn execute_set_enabled(deps: DepsMut, info: MessageInfo, enabled: bool) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let mut config = load_config(deps.storage)?;
    if enabled {
        system_token(&config)?;
    }
    config.enabled = enabled;
    CONFIG.save(deps.storage, &config)?;

    let ty = if enabled {
        "execute-enable"
    } else {
        "execute-disable"
    };
    Ok(response(ty, CONTRACT_NAME, [attr("enabled", enabled.to_string())]))
}

fn execute_add_contract(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let contract = deps.api.addr_validate(&contract)?;
    ensure!(
        !CONTRACTS.has(deps.storage, &contract),
        ContractError::ContractAlreadyRegistered {}
    );
    CONTRACTS.save(deps.storage, &contract, &Empty {})?;

    Ok(response(
        "execute-add-contract",
        CONTRACT_NAME,
        [attr("contract", contract)],
    ))
}

fn execute_rm_contract(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let contract = deps.api.addr_validate(&contract)?;
    ensure!(
        CONTRACTS.has(deps.storage, &contract),
        ContractError::ContractNotFound {}
    );
    CONTRACTS.remove(deps.storage, &contract);

    Ok(response(
        "execute-rm-contract",
        CONTRACT_NAME,
        [attr("contract", contract)],
    ))
}

fn validate_ticker(ticker: &str, precision: Option<u8>) -> ContractResult<()> {
    ensure!(is_valid_code(ticker), ContractError::InvalidTicker {});
    if let Some(precision) = precision {
        ensure!(precision <= MAX_PRECISION, ContractError::InvalidSymbol {});
    }
    Ok(())
}

fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    creator: String,
    ticker: String,
    precision: Option<u8>,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    validate_ticker(&ticker, precision)?;
    let creator = deps.api.addr_validate(&creator)?;
    ensure!(
        !TOKENS.has(deps.storage, &ticker),
        ContractError::TokenAlreadyRegistered {}
    );
    TOKENS.save(
        deps.storage,
        &ticker,
        &TickerRecord {
            ticker: ticker.clone(),
            precision,
            creator: creator.clone(),
            contract: None,
        },
    )?;

    Ok(response(
        "execute-add-token",
        CONTRACT_NAME,
        [attr("ticker", ticker), attr("creator", creator)],
    ))
}

fn execute_rm_token(deps: DepsMut, info: MessageInfo, ticker: String) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    ensure!(
        TOKENS.has(deps.storage, &ticker),
        ContractError::TokenNotRegistered {}
    );
    TOKENS.remove(deps.storage, &ticker);

    Ok(response(
        "execute-rm-token",
        CONTRACT_NAME,
        [attr("ticker", ticker)],
    ))
}

#[allow(clippy::too_many_arguments)]
fn execute_reg_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    creator: String,
    ticker: String,
    payment: Asset,
    precision: Option<u8>,
    contract: Option<String>,
) -> ContractResult<Response> {
    let creator = deps.api.addr_validate(&creator)?;
    require_auth(&info.sender, &creator)?;

    let config = load_config(deps.storage)?;
    ensure!(config.enabled, ContractError::Disabled {});
    validate_ticker(&ticker, precision)?;

    let contract = contract
        .map(|contract| deps.api.addr_validate(&contract))
        .transpose()?;
    match &contract {
        Some(contract) => ensure!(
            CONTRACTS.has(deps.storage, contract),
            ContractError::ContractNotWhitelisted {}
        ),
        None => ensure!(
            config.whitelist_policy == WhitelistPolicy::Open,
            ContractError::ContractNotWhitelisted {}
        ),
    }

    if let Some(fees) = &config.fees {
        ensure!(
            payment.symbol == fees.regtoken.symbol,
            ContractError::IncorrectPaymentSymbol {}
        );
        ensure!(
            payment.amount == fees.regtoken.amount,
            ContractError::IncorrectPaymentAmount {}
        );
    }

    ensure!(
        !TOKENS.has(deps.storage, &ticker),
        ContractError::TokenAlreadyRegistered {}
    );
    if let Some(regtoken) = &config.regtoken {
        ensure!(
            ticker.len() >= regtoken.minlength as usize,
            ContractError::TickerTooShort {}
        );
    }

    let mut attrs = vec![attr("ticker", &ticker), attr("creator", &creator)];
    let mut messages = vec![];
    if let Some(fees) = &config.fees {
        let available = BALANCES
            .may_load(deps.storage, &creator)?
            .map(|balance| balance.amount)
            .unwrap_or_default();
        ensure!(
            available >= payment.amount,
            ContractError::InsufficientFeeBalance {}
        );

        if !payment.is_zero() {
            let system_token = system_token(&config)?;
            let remaining = debit_balance(deps.storage, &creator, &payment)?;
            messages.push(transfer_msg(
                system_token.contract.as_str(),
                env.contract.address.as_str(),
                fees.receiver.as_str(),
                payment.clone(),
                REGISTRATION_FEE_MEMO,
            )?);
            attrs.push(attr("fee", payment.to_string()));
            attrs.push(attr("fee_receiver", &fees.receiver));
            attrs.push(attr("balance", remaining.to_string()));
        }
    }

    if let Some(contract) = &contract {
        attrs.push(attr("contract", contract));
    }
    TOKENS.save(
        deps.storage,
        &ticker,
        &TickerRecord {
            ticker: ticker.clone(),
            precision,
            creator,
            contract,
        },
    )?;

    Ok(response("execute-reg-token", CONTRACT_NAME, attrs).add_messages(messages))
}

fn execute_set_contract(
    deps: DepsMut,
    info: MessageInfo,
    ticker: String,
    contract: String,
) -> ContractResult<Response> {
    let mut record = TOKENS
        .may_load(deps.storage, &ticker)?
        .ok_or(ContractError::TokenNotRegistered {})?;
    require_auth(&info.sender, &record.creator)?;
    ensure!(
        record.contract.is_none(),
        ContractError::TokenContractAlreadySet {}
    );

    let contract = deps.api.addr_validate(&contract)?;
    ensure!(
        CONTRACTS.has(deps.storage, &contract),
        ContractError::ContractNotWhitelisted {}
    );
    record.contract = Some(contract.clone());
    TOKENS.save(deps.storage, &ticker, &record)?;

    Ok(response(
        "execute-set-contract",
        CONTRACT_NAME,
        [attr("ticker", ticker), attr("contract", contract)],
    ))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    account: String,
    quantity: Asset,
) -> ContractResult<Response> {
    let account = deps.api.addr_validate(&account)?;
    require_auth(&info.sender, &account)?;

    let config = load_config(deps.storage)?;
    ensure!(config.enabled, ContractError::Disabled {});
    let system_token = system_token(&config)?;

    ensure!(
        BALANCES.has(deps.storage, &account),
        ContractError::NoBalance {}
    );
    ensure!(
        quantity.symbol == system_token.symbol,
        ContractError::IncorrectWithdrawSymbol {}
    );
    ensure!(!quantity.is_zero(), ContractError::NonPositiveWithdraw {});

    let remaining = debit_balance(deps.storage, &account, &quantity)?;
    let transfer = transfer_msg(
        system_token.contract.as_str(),
        env.contract.address.as_str(),
        account.as_str(),
        quantity.clone(),
        "",
    )?;

    Ok(response(
        "execute-withdraw",
        CONTRACT_NAME,
        [
            attr("account", account),
            attr("quantity", quantity.to_string()),
            attr("balance", remaining.to_string()),
        ],
    )
    .add_message(transfer))
}

/// Deposits arrive as transfer notifications from the system token ledger.
fn execute_on_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    notification: TransferNotification,
) -> ContractResult<Response> {
    let TransferNotification {
        from, to, quantity, ..
    } = notification;
    let this = env.contract.address.as_str();
    if to != this || from == this {
        return Ok(response(
            "on-transfer-skip",
            CONTRACT_NAME,
            [attr("from", from), attr("to", to)],
        ));
    }

    let config = load_config(deps.storage)?;
    ensure!(config.enabled, ContractError::Disabled {});
    let system_token = system_token(&config)?;
    ensure!(
        info.sender == system_token.contract,
        ContractError::IncorrectDepositContract {}
    );
    ensure!(
        quantity.symbol == system_token.symbol,
        ContractError::IncorrectDepositSymbol {}
    );

    let from = deps.api.addr_validate(&from)?;
    deps.api
        .debug(&format!("WASMDEBUG: deposit {} from {}", quantity, from));
    let balance = credit_balance(deps.storage, &from, &quantity)?;

    Ok(response(
        "on-transfer",
        CONTRACT_NAME,
        [
            attr("from", from),
            attr("quantity", quantity.to_string()),
            attr("balance", balance.to_string()),
        ],
    ))
}

fn execute_reset(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    CONFIG.remove(deps.storage);

    let tickers = TOKENS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<String>>>()?;
    for ticker in &tickers {
        TOKENS.remove(deps.storage, ticker);
    }

    let contracts = CONTRACTS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    for contract in &contracts {
        CONTRACTS.remove(deps.storage, contract);
    }

    let accounts = BALANCES
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    for account in &accounts {
        BALANCES.remove(deps.storage, account);
    }

    Ok(response(
        "execute-reset",
        CONTRACT_NAME,
        [
            attr("tokens", tickers.len().to_string()),
            attr("contracts", contracts.len().to_string()),
            attr("balances", accounts.len().to_string()),
        ],
    ))
}

fn credit_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    quantity: &Asset,
) -> ContractResult<Asset> {
    let balance = match BALANCES.may_load(storage, account)? {
        Some(balance) => balance.checked_add(quantity)?,
        None => quantity.clone(),
    };
    BALANCES.save(storage, account, &balance)?;
    Ok(balance)
}

/// Rows that reach zero are dropped.
fn debit_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    quantity: &Asset,
) -> ContractResult<Asset> {
    let balance = BALANCES
        .may_load(storage, account)?
        .ok_or(ContractError::NoBalance {})?;
    ensure!(
        balance.amount >= quantity.amount,
        ContractError::InsufficientBalance {}
    );
    let remaining = balance.checked_sub(quantity)?;
    if remaining.is_zero() {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &remaining)?;
    }
    Ok(remaining)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    let contract_version_metadata = cw2::get_contract_version(deps.storage)?;
    let storage_contract_name = contract_version_metadata.contract.as_str();
    if storage_contract_name != CONTRACT_NAME {
        return Err(ContractError::MigrationError {
            storage_contract_name: storage_contract_name.to_string(),
            contract_name: CONTRACT_NAME.to_string(),
        });
    }

    let storage_version: semver::Version = contract_version_metadata.version.parse()?;
    let version: semver::Version = CONTRACT_VERSION.parse()?;

    if storage_version < version {
        cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new())
}
