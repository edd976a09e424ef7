use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};
use optfield::optfield;

use crate::asset::{Asset, Symbol};

/// Ledger contract and symbol of the currency used for deposits, withdrawals
/// and fees.
#[cw_serde]
pub struct TokenDefinition {
    pub contract: Addr,
    pub symbol: Symbol,
}

#[cw_serde]
pub struct Fees {
    pub receiver: Addr,
    pub regtoken: Asset,
}

#[cw_serde]
pub struct RegtokenConfig {
    pub minlength: u8,
}

/// Whether `reg_token` must name a whitelisted ledger up front.
#[cw_serde]
#[derive(Default)]
pub enum WhitelistPolicy {
    #[default]
    Open,
    Strict,
}

#[optfield(pub ConfigOptional, attrs)]
#[cw_serde]
#[derive(Default)]
pub struct Config {
    pub enabled: bool,
    pub system_token: Option<TokenDefinition>,
    pub fees: Option<Fees>,
    pub regtoken: Option<RegtokenConfig>,
    pub whitelist_policy: WhitelistPolicy,
}

#[cw_serde]
pub struct TickerRecord {
    pub ticker: String,
    pub precision: Option<u8>,
    pub creator: Addr,
    /// Ledger the ticker is bound to. Set once, never reassigned.
    pub contract: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKENS: Map<&str, TickerRecord> = Map::new("tokens");
pub const CONTRACTS: Map<&Addr, Empty> = Map::new("contracts");
pub const BALANCES: Map<&Addr, Asset> = Map::new("balance");
