use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::asset::Asset;
use crate::msg::notification::TransferNotification;
use crate::state::registry::{Config, ConfigOptional, TickerRecord};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

#[cw_ownable::cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    SetConfig {
        new_config: ConfigOptional,
    },
    Enable {},
    Disable {},
    AddContract {
        contract: String,
    },
    RmContract {
        contract: String,
    },
    AddToken {
        creator: String,
        ticker: String,
        precision: Option<u8>,
    },
    RmToken {
        ticker: String,
    },
    RegToken {
        creator: String,
        ticker: String,
        payment: Asset,
        precision: Option<u8>,
        /// Ledger to bind right away. Required under the strict whitelist policy.
        contract: Option<String>,
    },
    SetContract {
        ticker: String,
        contract: String,
    },
    Withdraw {
        account: String,
        quantity: Asset,
    },
    OnTransfer(TransferNotification),
    Reset {},
}

#[cw_ownable::cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Option<TickerRecord>)]
    Token { ticker: String },
    #[returns(Vec<TickerRecord>)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Vec<Addr>)]
    Contracts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Option<Asset>)]
    Balance { account: String },
}

#[cw_serde]
pub struct MigrateMsg {}
