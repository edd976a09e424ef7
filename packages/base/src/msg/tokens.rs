use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

use crate::asset::{Asset, Symbol, TokenAllocation};
use crate::state::tokens::{Config, CurrencyStats};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub registry: Option<String>,
}

#[cw_ownable::cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    Create {
        issuer: String,
        maximum_supply: Asset,
    },
    Issue {
        to: String,
        quantity: Asset,
        memo: String,
    },
    IssueFixed {
        to: String,
        supply: Asset,
        memo: String,
    },
    Retire {
        quantity: Asset,
        memo: String,
    },
    SetMaxSupply {
        issuer: String,
        maximum_supply: Asset,
    },
    Transfer {
        from: String,
        to: String,
        quantity: Asset,
        memo: String,
    },
    Open {
        owner: String,
        symbol: Symbol,
        payer: String,
    },
    Close {
        owner: String,
        symbol: Symbol,
    },
    SetConfig {
        registry: String,
    },
    AddReceiver {
        account: String,
    },
    RmReceiver {
        account: String,
    },
    SetSupply {
        ticker: String,
        supply: Asset,
    },
    Distribute {
        ticker: String,
        allocations: Vec<TokenAllocation>,
    },
    Reset {
        accounts: Vec<String>,
        symbols: Vec<Symbol>,
    },
}

#[cw_ownable::cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Option<CurrencyStats>)]
    Stat { code: String },
    #[returns(Option<Asset>)]
    Balance { owner: String, code: String },
    #[returns(Vec<Asset>)]
    Accounts { owner: String },
    #[returns(Vec<Addr>)]
    Receivers {},
}

#[cw_serde]
pub struct MigrateMsg {}

/// Outward transfer on a ledger, signed by the calling contract as `from`.
pub fn transfer_msg(
    ledger: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
    quantity: Asset,
    memo: impl Into<String>,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: ledger.into(),
        msg: to_json_binary(&ExecuteMsg::Transfer {
            from: from.into(),
            to: to.into(),
            quantity,
            memo: memo.into(),
        })?,
        funds: vec![],
    }
    .into())
}
