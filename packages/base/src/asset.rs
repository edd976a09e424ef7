use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Uint128};
use thiserror::Error;

pub const MAX_PRECISION: u8 = 18;
pub const MAX_CODE_LENGTH: usize = 7;
pub const MAX_AMOUNT: u128 = (1u128 << 62) - 1;

/// Currency code plus the number of decimal places its amounts carry,
/// written as `4,FOO`.
#[cw_serde]
pub struct Symbol {
    pub precision: u8,
    pub code: String,
}

impl Symbol {
    pub fn new(precision: u8, code: impl Into<String>) -> Self {
        Self {
            precision,
            code: code.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.precision <= MAX_PRECISION && is_valid_code(&self.code)
    }
}

/// Ticker codes are 1 to 7 upper-case latin letters.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.bytes().all(|b| b.is_ascii_uppercase())
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| StdError::parse_err("Symbol", "expected <precision>,<CODE>"))?;
        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| StdError::parse_err("Symbol", "invalid precision"))?;
        let symbol = Symbol::new(precision, code.trim());
        if !symbol.is_valid() {
            return Err(StdError::parse_err("Symbol", "invalid symbol name"));
        }
        Ok(symbol)
    }
}

/// Fixed-point currency amount: an integer mantissa scaled by
/// `symbol.precision` decimal places.
#[cw_serde]
pub struct Asset {
    pub amount: Uint128,
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(amount: impl Into<Uint128>, symbol: Symbol) -> Self {
        Self {
            amount: amount.into(),
            symbol,
        }
    }

    pub fn zero(symbol: Symbol) -> Self {
        Self::new(Uint128::zero(), symbol)
    }

    pub fn is_valid(&self) -> bool {
        self.amount.u128() <= MAX_AMOUNT && self.symbol.is_valid()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn same_symbol(&self, other: &Asset) -> bool {
        self.symbol == other.symbol
    }

    pub fn checked_add(&self, other: &Asset) -> StdResult<Asset> {
        if !self.same_symbol(other) {
            return Err(StdError::generic_err(
                "attempt to add asset with different symbol",
            ));
        }
        let amount = self.amount.checked_add(other.amount)?;
        if amount.u128() > MAX_AMOUNT {
            return Err(StdError::generic_err("addition overflow"));
        }
        Ok(Asset::new(amount, self.symbol.clone()))
    }

    pub fn checked_sub(&self, other: &Asset) -> StdResult<Asset> {
        if !self.same_symbol(other) {
            return Err(StdError::generic_err(
                "attempt to subtract asset with different symbol",
            ));
        }
        Ok(Asset::new(
            self.amount.checked_sub(other.amount)?,
            self.symbol.clone(),
        ))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision as u32;
        let scale = 10u128.pow(precision);
        let amount = self.amount.u128();
        if precision == 0 {
            write!(f, "{} {}", amount, self.symbol.code)
        } else {
            write!(
                f,
                "{}.{:0width$} {}",
                amount / scale,
                amount % scale,
                self.symbol.code,
                width = precision as usize
            )
        }
    }
}

impl FromStr for Asset {
    type Err = StdError;

    /// Parses `"<int>.<frac> <CODE>"`; the number of fractional digits is the
    /// precision.
    fn from_str(s: &str) -> StdResult<Self> {
        let (number, code) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| StdError::parse_err("Asset", "expected <amount> <CODE>"))?;
        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(StdError::parse_err("Asset", "invalid amount"));
        }
        let precision = u8::try_from(frac_part.len())
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(|| StdError::parse_err("Asset", "precision too high"))?;
        let digits = format!("{}{}", int_part, frac_part);
        let amount: u128 = digits
            .parse()
            .map_err(|_| StdError::parse_err("Asset", "amount out of range"))?;
        let asset = Asset::new(amount, Symbol::new(precision, code.trim()));
        if !asset.is_valid() {
            return Err(StdError::parse_err("Asset", "invalid asset"));
        }
        Ok(asset)
    }
}

/// One receiver's share of an initial token distribution.
#[cw_serde]
pub struct TokenAllocation {
    pub receiver: String,
    pub quantity: Asset,
}

#[derive(Error, Debug, PartialEq)]
pub enum AllocationError {
    #[error("invalid quantity")]
    InvalidQuantity {},

    #[error("must allocate an amount greater than zero")]
    NonPositiveAllocation {},

    #[error("invalid symbol name")]
    InvalidSymbol {},

    #[error("allocation symbol does not match supply symbol")]
    SymbolMismatch {},

    #[error("invalid token distribution: total allocations must match the supply")]
    TotalMismatch {},
}

/// Every allocation must be positive, denominated in the supply's symbol, and
/// together they must add up to exactly the supply.
pub fn check_allocations(
    supply: &Asset,
    allocations: &[TokenAllocation],
) -> Result<(), AllocationError> {
    let mut total = Uint128::zero();
    for allocation in allocations {
        let quantity = &allocation.quantity;
        if quantity.amount.u128() > MAX_AMOUNT {
            return Err(AllocationError::InvalidQuantity {});
        }
        if quantity.is_zero() {
            return Err(AllocationError::NonPositiveAllocation {});
        }
        if !quantity.symbol.is_valid() {
            return Err(AllocationError::InvalidSymbol {});
        }
        if !quantity.same_symbol(supply) {
            return Err(AllocationError::SymbolMismatch {});
        }
        total = total
            .checked_add(quantity.amount)
            .map_err(|_| AllocationError::TotalMismatch {})?;
    }
    if total != supply.amount {
        return Err(AllocationError::TotalMismatch {});
    }
    Ok(())
}
