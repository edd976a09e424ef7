use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Addr, Attribute, Binary, CosmosMsg, Deps, DepsMut,
    Empty, Env, MessageInfo, Order, Response, StdResult, Storage,
};
use vaulta_base::{
    asset::{check_allocations, Asset, Symbol, TokenAllocation},
    error::tokens::{ContractError, ContractResult},
    msg::{
        notification::TransferNotification,
        registry::QueryMsg as RegistryQueryMsg,
        tokens::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    },
    state::{
        registry::TickerRecord,
        tokens::{Config, CurrencyStats, ACCOUNTS, CONFIG, RECEIVERS, STATS},
    },
};
use vaulta_helpers::{
    answer::response,
    auth::{require_auth, require_owner},
};

pub const CONTRACT_NAME: &str = concat!("crates.io:vaulta__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_MEMO_BYTES: usize = 256;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(msg.owner.as_str()))?;

    let mut attrs = vec![attr("owner", msg.owner)];
    if let Some(registry) = msg.registry {
        let registry = deps.api.addr_validate(&registry)?;
        attrs.push(attr("registry", &registry));
        CONFIG.save(
            deps.storage,
            &Config {
                registry: Some(registry),
            },
        )?;
    }

    Ok(response("instantiate", CONTRACT_NAME, attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&load_config(deps.storage)?)?),
        QueryMsg::Stat { code } => Ok(to_json_binary(&STATS.may_load(deps.storage, &code)?)?),
        QueryMsg::Balance { owner, code } => {
            let owner = deps.api.addr_validate(&owner)?;
            Ok(to_json_binary(
                &ACCOUNTS.may_load(deps.storage, (&owner, code.as_str()))?,
            )?)
        }
        QueryMsg::Accounts { owner } => {
            let owner = deps.api.addr_validate(&owner)?;
            let balances = ACCOUNTS
                .prefix(&owner)
                .range(deps.storage, None, None, Order::Ascending)
                .map(|item| item.map(|(_, balance)| balance))
                .collect::<StdResult<Vec<Asset>>>()?;
            Ok(to_json_binary(&balances)?)
        }
        QueryMsg::Receivers {} => {
            let receivers = RECEIVERS
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<Addr>>>()?;
            Ok(to_json_binary(&receivers)?)
        }
        QueryMsg::Ownership {} => Ok(to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?),
    }
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
        ExecuteMsg::Create {
            issuer,
            maximum_supply,
        } => execute_create(deps, info, issuer, maximum_supply),
        ExecuteMsg::Issue { to, quantity, memo } => execute_issue(deps, info, to, quantity, memo),
        ExecuteMsg::IssueFixed { to, supply, memo } => {
            execute_issue_fixed(deps, info, to, supply, memo)
        }
        ExecuteMsg::Retire { quantity, memo } => execute_retire(deps, info, quantity, memo),
        ExecuteMsg::SetMaxSupply {
            issuer,
            maximum_supply,
        } => execute_set_max_supply(deps, info, issuer, maximum_supply),
        ExecuteMsg::Transfer {
            from,
            to,
            quantity,
            memo,
        } => execute_transfer(deps, env, info, from, to, quantity, memo),
        ExecuteMsg::Open {
            owner,
            symbol,
            payer,
        } => execute_open(deps, info, owner, symbol, payer),
        ExecuteMsg::Close { owner, symbol } => execute_close(deps, info, owner, symbol),
        ExecuteMsg::SetConfig { registry } => execute_set_config(deps, info, registry),
        ExecuteMsg::AddReceiver { account } => execute_add_receiver(deps, info, account),
        ExecuteMsg::RmReceiver { account } => execute_rm_receiver(deps, info, account),
        ExecuteMsg::SetSupply { ticker, supply } => {
            execute_set_supply(deps, env, info, ticker, supply)
        }
        ExecuteMsg::Distribute {
            ticker,
            allocations,
        } => execute_distribute(deps, env, info, ticker, allocations),
        ExecuteMsg::Reset { accounts, symbols } => execute_reset(deps, info, accounts, symbols),
    }
}

fn load_config(storage: &dyn Storage) -> StdResult<Config> {
    Ok(CONFIG.may_load(storage)?.unwrap_or_default())
}

fn check_memo(memo: &str) -> ContractResult<()> {
    ensure!(memo.len() <= MAX_MEMO_BYTES, ContractError::MemoTooLong {});
    Ok(())
}

/// Empty attribute values are rejected by the chain.
fn push_memo(attrs: &mut Vec<Attribute>, memo: String) {
    if !memo.is_empty() {
        attrs.push(attr("memo", memo));
    }
}

fn execute_create(
    deps: DepsMut,
    info: MessageInfo,
    issuer: String,
    maximum_supply: Asset,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let issuer = deps.api.addr_validate(&issuer)?;
    ensure!(
        maximum_supply.symbol.is_valid(),
        ContractError::InvalidSymbol {}
    );
    ensure!(maximum_supply.is_valid(), ContractError::InvalidSupply {});
    ensure!(
        !maximum_supply.is_zero(),
        ContractError::NonPositiveMaxSupply {}
    );
    let code = maximum_supply.symbol.code.as_str();
    ensure!(
        !STATS.has(deps.storage, code),
        ContractError::TokenAlreadyExists {}
    );

    STATS.save(
        deps.storage,
        code,
        &CurrencyStats {
            supply: Asset::zero(maximum_supply.symbol.clone()),
            max_supply: maximum_supply.clone(),
            issuer: issuer.clone(),
        },
    )?;

    Ok(response(
        "execute-create",
        CONTRACT_NAME,
        [
            attr("issuer", issuer),
            attr("maximum_supply", maximum_supply.to_string()),
        ],
    ))
}

/// Mints `quantity` into the issuer's balance.
fn apply_issue(
    storage: &mut dyn Storage,
    stats: &mut CurrencyStats,
    quantity: &Asset,
) -> ContractResult<Asset> {
    let available = stats.max_supply.checked_sub(&stats.supply)?;
    ensure!(
        quantity.amount <= available.amount,
        ContractError::ExceedsAvailableSupply {}
    );
    stats.supply = stats.supply.checked_add(quantity)?;
    STATS.save(storage, &quantity.symbol.code, stats)?;
    add_balance(storage, &stats.issuer, quantity)
}

fn execute_issue(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    quantity: Asset,
    memo: String,
) -> ContractResult<Response> {
    ensure!(quantity.symbol.is_valid(), ContractError::InvalidSymbol {});
    check_memo(&memo)?;

    let mut stats = STATS
        .may_load(deps.storage, &quantity.symbol.code)?
        .ok_or(ContractError::IssueUnknownToken {})?;
    require_auth(&info.sender, &stats.issuer)?;
    let to = deps.api.addr_validate(&to)?;
    ensure!(to == stats.issuer, ContractError::IssueToNonIssuer {});
    ensure!(quantity.is_valid(), ContractError::InvalidQuantity {});
    ensure!(!quantity.is_zero(), ContractError::NonPositiveIssue {});
    ensure!(
        quantity.same_symbol(&stats.supply),
        ContractError::PrecisionMismatch {}
    );

    let balance = apply_issue(deps.storage, &mut stats, &quantity)?;

    let mut attrs = vec![
        attr("to", to),
        attr("quantity", quantity.to_string()),
        attr("supply", stats.supply.to_string()),
        attr("balance", balance.to_string()),
    ];
    push_memo(&mut attrs, memo);

    Ok(response("execute-issue", CONTRACT_NAME, attrs))
}

/// Tops the circulating supply up to exactly `supply`.
fn execute_issue_fixed(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    supply: Asset,
    memo: String,
) -> ContractResult<Response> {
    ensure!(supply.symbol.is_valid(), ContractError::InvalidSymbol {});
    check_memo(&memo)?;

    let mut stats = STATS
        .may_load(deps.storage, &supply.symbol.code)?
        .ok_or(ContractError::IssueUnknownToken {})?;
    require_auth(&info.sender, &stats.issuer)?;
    let to = deps.api.addr_validate(&to)?;
    ensure!(to == stats.issuer, ContractError::IssueToNonIssuer {});
    ensure!(supply.is_valid(), ContractError::InvalidSupply {});
    ensure!(
        supply.same_symbol(&stats.supply),
        ContractError::PrecisionMismatch {}
    );
    ensure!(
        supply.amount >= stats.supply.amount,
        ContractError::SupplyBelowCirculating {}
    );

    let quantity = supply.checked_sub(&stats.supply)?;
    if !quantity.is_zero() {
        apply_issue(deps.storage, &mut stats, &quantity)?;
    }

    let mut attrs = vec![
        attr("to", to),
        attr("quantity", quantity.to_string()),
        attr("supply", stats.supply.to_string()),
    ];
    push_memo(&mut attrs, memo);

    Ok(response("execute-issue-fixed", CONTRACT_NAME, attrs))
}

fn execute_retire(
    deps: DepsMut,
    info: MessageInfo,
    quantity: Asset,
    memo: String,
) -> ContractResult<Response> {
    ensure!(quantity.symbol.is_valid(), ContractError::InvalidSymbol {});
    check_memo(&memo)?;

    let mut stats = STATS
        .may_load(deps.storage, &quantity.symbol.code)?
        .ok_or(ContractError::UnknownToken {})?;
    require_auth(&info.sender, &stats.issuer)?;
    ensure!(quantity.is_valid(), ContractError::InvalidQuantity {});
    ensure!(!quantity.is_zero(), ContractError::NonPositiveRetire {});
    ensure!(
        quantity.same_symbol(&stats.supply),
        ContractError::PrecisionMismatch {}
    );

    let balance = sub_balance(deps.storage, &stats.issuer, &quantity)?;
    stats.supply = stats.supply.checked_sub(&quantity)?;
    STATS.save(deps.storage, &quantity.symbol.code, &stats)?;

    let mut attrs = vec![
        attr("quantity", quantity.to_string()),
        attr("supply", stats.supply.to_string()),
        attr("balance", balance.to_string()),
    ];
    push_memo(&mut attrs, memo);

    Ok(response("execute-retire", CONTRACT_NAME, attrs))
}

fn execute_set_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    issuer: String,
    maximum_supply: Asset,
) -> ContractResult<Response> {
    let issuer = deps.api.addr_validate(&issuer)?;
    require_auth(&info.sender, &issuer)?;
    ensure!(
        maximum_supply.symbol.is_valid(),
        ContractError::InvalidSymbol {}
    );

    let mut stats = STATS
        .may_load(deps.storage, &maximum_supply.symbol.code)?
        .ok_or(ContractError::UnknownSupply {})?;
    ensure!(stats.issuer == issuer, ContractError::NotIssuer {});
    ensure!(maximum_supply.is_valid(), ContractError::InvalidSupply {});
    ensure!(
        maximum_supply.same_symbol(&stats.supply),
        ContractError::PrecisionMismatch {}
    );
    ensure!(
        maximum_supply.amount >= stats.supply.amount,
        ContractError::MaxSupplyBelowSupply {}
    );

    stats.max_supply = maximum_supply.clone();
    STATS.save(deps.storage, &maximum_supply.symbol.code, &stats)?;

    Ok(response(
        "execute-set-max-supply",
        CONTRACT_NAME,
        [
            attr("issuer", issuer),
            attr("maximum_supply", maximum_supply.to_string()),
        ],
    ))
}

fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    quantity: Asset,
    memo: String,
) -> ContractResult<Response> {
    ensure!(from != to, ContractError::TransferToSelf {});
    let from = deps.api.addr_validate(&from)?;
    require_auth(&info.sender, &from)?;
    let to = deps.api.addr_validate(&to)?;

    let stats = STATS
        .may_load(deps.storage, &quantity.symbol.code)?
        .ok_or(ContractError::UnknownToken {})?;
    ensure!(quantity.is_valid(), ContractError::InvalidQuantity {});
    ensure!(!quantity.is_zero(), ContractError::NonPositiveTransfer {});
    ensure!(
        quantity.same_symbol(&stats.supply),
        ContractError::PrecisionMismatch {}
    );
    check_memo(&memo)?;

    sub_balance(deps.storage, &from, &quantity)?;
    add_balance(deps.storage, &to, &quantity)?;
    let notification = notify_recipient(deps.as_ref(), &env, &from, &to, &quantity, &memo)?;

    let mut attrs = vec![
        attr("from", from),
        attr("to", to),
        attr("quantity", quantity.to_string()),
    ];
    push_memo(&mut attrs, memo);

    Ok(response("execute-transfer", CONTRACT_NAME, attrs).add_messages(notification))
}

fn execute_open(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    symbol: Symbol,
    payer: String,
) -> ContractResult<Response> {
    let payer = deps.api.addr_validate(&payer)?;
    require_auth(&info.sender, &payer)?;
    let owner = deps.api.addr_validate(&owner)?;

    let stats = STATS
        .may_load(deps.storage, &symbol.code)?
        .ok_or(ContractError::UnknownSymbol {})?;
    ensure!(
        stats.supply.symbol == symbol,
        ContractError::PrecisionMismatch {}
    );

    let key = (&owner, symbol.code.as_str());
    if !ACCOUNTS.has(deps.storage, key) {
        ACCOUNTS.save(deps.storage, key, &Asset::zero(symbol.clone()))?;
    }

    Ok(response(
        "execute-open",
        CONTRACT_NAME,
        [
            attr("owner", owner),
            attr("symbol", symbol.to_string()),
            attr("payer", payer),
        ],
    ))
}

fn execute_close(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    symbol: Symbol,
) -> ContractResult<Response> {
    let owner = deps.api.addr_validate(&owner)?;
    require_auth(&info.sender, &owner)?;

    let key = (&owner, symbol.code.as_str());
    let balance = ACCOUNTS
        .may_load(deps.storage, key)?
        .ok_or(ContractError::BalanceRowMissing {})?;
    ensure!(balance.is_zero(), ContractError::NonZeroBalance {});
    ACCOUNTS.remove(deps.storage, key);

    Ok(response(
        "execute-close",
        CONTRACT_NAME,
        [attr("owner", owner), attr("symbol", symbol.to_string())],
    ))
}

fn execute_set_config(
    deps: DepsMut,
    info: MessageInfo,
    registry: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let registry = deps.api.addr_validate(&registry)?;
    CONFIG.save(
        deps.storage,
        &Config {
            registry: Some(registry.clone()),
        },
    )?;

    Ok(response(
        "execute-set-config",
        CONTRACT_NAME,
        [attr("registry", registry)],
    ))
}

fn execute_add_receiver(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    ensure!(
        !RECEIVERS.has(deps.storage, &account),
        ContractError::ReceiverAlreadyAdded {}
    );
    RECEIVERS.save(deps.storage, &account, &Empty {})?;

    Ok(response(
        "execute-add-receiver",
        CONTRACT_NAME,
        [attr("account", account)],
    ))
}

fn execute_rm_receiver(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    ensure!(
        RECEIVERS.has(deps.storage, &account),
        ContractError::ReceiverNotFound {}
    );
    RECEIVERS.remove(deps.storage, &account);

    Ok(response(
        "execute-rm-receiver",
        CONTRACT_NAME,
        [attr("account", account)],
    ))
}

/// Looks `ticker` up in the registry and checks that it is bound to this
/// ledger.
fn registered_ticker(
    deps: Deps,
    env: &Env,
    ticker: &str,
) -> ContractResult<(Addr, TickerRecord)> {
    let registry = load_config(deps.storage)?
        .registry
        .ok_or(ContractError::RegistryNotSet {})?;
    let record: Option<TickerRecord> = deps.querier.query_wasm_smart(
        &registry,
        &RegistryQueryMsg::Token {
            ticker: ticker.to_string(),
        },
    )?;
    let record = record.ok_or(ContractError::NotInRegistry {})?;
    ensure!(
        record.contract.as_ref() == Some(&env.contract.address),
        ContractError::NotRegisteredToThisContract {}
    );
    Ok((registry, record))
}

fn execute_set_supply(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    ticker: String,
    supply: Asset,
) -> ContractResult<Response> {
    ensure!(
        supply.symbol.code == ticker,
        ContractError::TickerMismatch {}
    );
    let (registry, record) = registered_ticker(deps.as_ref(), &env, &ticker)?;
    require_auth(&info.sender, &record.creator)?;

    ensure!(supply.is_valid(), ContractError::InvalidSupply {});
    ensure!(!supply.is_zero(), ContractError::NonPositiveMaxSupply {});
    if let Some(precision) = record.precision {
        ensure!(
            supply.symbol.precision == precision,
            ContractError::RegisteredPrecisionMismatch {}
        );
    }
    ensure!(
        !STATS.has(deps.storage, &ticker),
        ContractError::SupplyAlreadySet {}
    );

    STATS.save(
        deps.storage,
        &ticker,
        &CurrencyStats {
            supply: supply.clone(),
            max_supply: supply.clone(),
            issuer: registry,
        },
    )?;
    add_balance(deps.storage, &env.contract.address, &supply)?;

    Ok(response(
        "execute-set-supply",
        CONTRACT_NAME,
        [
            attr("ticker", ticker),
            attr("creator", record.creator),
            attr("supply", supply.to_string()),
        ],
    ))
}

fn execute_distribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    ticker: String,
    allocations: Vec<TokenAllocation>,
) -> ContractResult<Response> {
    ensure!(!allocations.is_empty(), ContractError::NoAllocations {});
    let (_, record) = registered_ticker(deps.as_ref(), &env, &ticker)?;
    require_auth(&info.sender, &record.creator)?;

    let stats = STATS
        .may_load(deps.storage, &ticker)?
        .ok_or(ContractError::SupplyNotEstablished {})?;
    ensure!(
        stats.supply == stats.max_supply,
        ContractError::SupplyNotFullyAllocated {}
    );
    let this = env.contract.address.clone();
    let held = ACCOUNTS
        .may_load(deps.storage, (&this, ticker.as_str()))?
        .ok_or(ContractError::ContractBalanceNotFound {})?;
    ensure!(
        held.amount == stats.max_supply.amount,
        ContractError::AlreadyDistributed {}
    );
    check_allocations(&stats.max_supply, &allocations)?;

    let mut receivers = Vec::with_capacity(allocations.len());
    for allocation in allocations {
        let receiver = deps.api.addr_validate(&allocation.receiver)?;
        ensure!(
            ACCOUNTS.has(deps.storage, (&receiver, ticker.as_str())),
            ContractError::BalanceNotOpened {
                receiver: allocation.receiver,
            }
        );
        receivers.push((receiver, allocation.quantity));
    }

    let mut attrs = vec![attr("ticker", &ticker)];
    let mut messages = vec![];
    for (receiver, quantity) in &receivers {
        sub_balance(deps.storage, &this, quantity)?;
        add_balance(deps.storage, receiver, quantity)?;
        messages.extend(notify_recipient(
            deps.as_ref(),
            &env,
            &this,
            receiver,
            quantity,
            "",
        )?);
        attrs.push(attr(receiver.as_str(), quantity.to_string()));
    }
    deps.api.debug(&format!(
        "WASMDEBUG: distributed {} to {} receivers",
        stats.max_supply,
        receivers.len()
    ));

    Ok(response("execute-distribute", CONTRACT_NAME, attrs).add_messages(messages))
}

fn execute_reset(
    deps: DepsMut,
    info: MessageInfo,
    accounts: Vec<String>,
    symbols: Vec<Symbol>,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    CONFIG.remove(deps.storage);
    RECEIVERS.clear(deps.storage);
    for symbol in &symbols {
        STATS.remove(deps.storage, &symbol.code);
    }

    let mut rows = 0usize;
    for account in &accounts {
        let account = deps.api.addr_validate(account)?;
        let codes = ACCOUNTS
            .prefix(&account)
            .keys(deps.storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<String>>>()?;
        for code in &codes {
            ACCOUNTS.remove(deps.storage, (&account, code.as_str()));
        }
        rows += codes.len();
    }

    Ok(response(
        "execute-reset",
        CONTRACT_NAME,
        [
            attr("symbols", symbols.len().to_string()),
            attr("accounts", accounts.len().to_string()),
            attr("balances", rows.to_string()),
        ],
    ))
}

/// Registered receivers get `on_transfer` in the same transaction; a failing
/// handler reverts the transfer. Everyone else is just credited.
fn notify_recipient(
    deps: Deps,
    env: &Env,
    from: &Addr,
    to: &Addr,
    quantity: &Asset,
    memo: &str,
) -> ContractResult<Option<CosmosMsg>> {
    if *to == env.contract.address || !RECEIVERS.has(deps.storage, to) {
        return Ok(None);
    }
    let notification = TransferNotification {
        from: from.to_string(),
        to: to.to_string(),
        quantity: quantity.clone(),
        memo: memo.to_string(),
    };
    Ok(Some(notification.into_cosmos_msg(to)?))
}

fn add_balance(storage: &mut dyn Storage, owner: &Addr, value: &Asset) -> ContractResult<Asset> {
    let key = (owner, value.symbol.code.as_str());
    let balance = match ACCOUNTS.may_load(storage, key)? {
        Some(balance) => balance.checked_add(value)?,
        None => value.clone(),
    };
    ACCOUNTS.save(storage, key, &balance)?;
    Ok(balance)
}

fn sub_balance(storage: &mut dyn Storage, owner: &Addr, value: &Asset) -> ContractResult<Asset> {
    let key = (owner, value.symbol.code.as_str());
    let balance = ACCOUNTS
        .may_load(storage, key)?
        .ok_or(ContractError::NoBalanceObject {})?;
    ensure!(
        balance.amount >= value.amount,
        ContractError::OverdrawnBalance {}
    );
    let balance = balance.checked_sub(value)?;
    ACCOUNTS.save(storage, key, &balance)?;
    Ok(balance)
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
