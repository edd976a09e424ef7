use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::msg::notification::TransferNotification;
use crate::state::mockreceiver::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

#[cw_ownable::cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    SetConfig {
        tokencontract: String,
        sender: String,
        destination: String,
    },
    OnTransfer(TransferNotification),
    Reset {},
}

#[cw_ownable::cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Option<Config>)]
    Config {},
}

#[cw_serde]
pub struct MigrateMsg {}
