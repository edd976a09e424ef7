use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use vaulta_base::{
    error::mockreceiver::{ContractError, ContractResult},
    msg::{
        mockreceiver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
        notification::TransferNotification,
        tokens::transfer_msg,
    },
    state::mockreceiver::{Config, CONFIG},
};
use vaulta_helpers::{answer::response, auth::require_owner};

pub const CONTRACT_NAME: &str = concat!("crates.io:vaulta__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

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
        QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.may_load(deps.storage)?)?),
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
        ExecuteMsg::SetConfig {
            tokencontract,
            sender,
            destination,
        } => execute_set_config(deps, info, tokencontract, sender, destination),
        ExecuteMsg::OnTransfer(notification) => execute_on_transfer(deps, env, info, notification),
        ExecuteMsg::Reset {} => {
            require_owner(deps.storage, &info.sender)?;
            CONFIG.remove(deps.storage);
            Ok(response::<(&str, &str), _>(
                "execute-reset",
                CONTRACT_NAME,
                [],
            ))
        }
    }
}

fn execute_set_config(
    deps: DepsMut,
    info: MessageInfo,
    tokencontract: String,
    sender: String,
    destination: String,
) -> ContractResult<Response> {
    require_owner(deps.storage, &info.sender)?;

    let config = Config {
        tokencontract: deps.api.addr_validate(&tokencontract)?,
        sender: deps.api.addr_validate(&sender)?,
        destination: deps.api.addr_validate(&destination)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(response(
        "execute-set-config",
        CONTRACT_NAME,
        [
            attr("tokencontract", config.tokencontract),
            attr("sender", config.sender),
            attr("destination", config.destination),
        ],
    ))
}

/// Forwards everything received from the configured sender to the
/// destination.
fn execute_on_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    notification: TransferNotification,
) -> ContractResult<Response> {
    let TransferNotification {
        from, to, quantity, ..
    } = notification;
    let this = env.contract.address;
    if to != this.as_str() || from == this.as_str() {
        return Ok(response(
            "on-transfer-skip",
            CONTRACT_NAME,
            [attr("from", from), attr("to", to)],
        ));
    }

    let config = CONFIG
        .may_load(deps.storage)?
        .ok_or(ContractError::NotConfigured {})?;
    ensure!(
        info.sender == config.tokencontract,
        ContractError::WrongTokenContract {}
    );
    ensure!(from == config.sender.as_str(), ContractError::WrongSender {});
    ensure!(!quantity.is_zero(), ContractError::NonPositiveTransfer {});

    deps.api.debug(&format!(
        "WASMDEBUG: forwarding {} from {} to {}",
        quantity, from, config.destination
    ));
    let forward = transfer_msg(
        config.tokencontract.as_str(),
        this.as_str(),
        config.destination.as_str(),
        quantity.clone(),
        "",
    )?;

    Ok(response(
        "on-transfer",
        CONTRACT_NAME,
        [
            attr("from", from),
            attr("destination", config.destination),
            attr("quantity", quantity.to_string()),
        ],
    )
    .add_message(forward))
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
