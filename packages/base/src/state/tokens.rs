use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};

use crate::asset::Asset;

#[cw_serde]
#[derive(Default)]
pub struct Config {
    pub registry: Option<Addr>,
}

#[cw_serde]
pub struct CurrencyStats {
    pub supply: Asset,
    pub max_supply: Asset,
    pub issuer: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Keyed by symbol code.
pub const STATS: Map<&str, CurrencyStats> = Map::new("stat");
/// Keyed by (owner, symbol code).
pub const ACCOUNTS: Map<(&Addr, &str), Asset> = Map::new("accounts");
/// Contracts that receive `on_transfer` when credited.
pub const RECEIVERS: Map<&Addr, Empty> = Map::new("receivers");
