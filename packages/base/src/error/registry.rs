use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use thiserror::Error;
use vaulta_helpers::auth::AuthError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("contract is disabled")]
    Disabled {},

    #[error("systemtoken symbol must be set")]
    SystemTokenNotSet {},

    #[error("Incorrect token contract for deposit.")]
    IncorrectDepositContract {},

    #[error("Incorrect token symbol for deposit.")]
    IncorrectDepositSymbol {},

    #[error("Incorrect token symbol for withdraw")]
    IncorrectWithdrawSymbol {},

    #[error("must withdraw positive quantity")]
    NonPositiveWithdraw {},

    #[error("no contract balance for account")]
    NoBalance {},

    #[error("insufficient contract balance")]
    InsufficientBalance {},

    #[error("contract is already registered")]
    ContractAlreadyRegistered {},

    #[error("contract not found")]
    ContractNotFound {},

    #[error("contract is not whitelisted")]
    ContractNotWhitelisted {},

    #[error("invalid symbol name")]
    InvalidSymbol {},

    #[error("fee symbol must match the systemtoken symbol")]
    FeeSymbolMismatch {},

    #[error("invalid ticker")]
    InvalidTicker {},

    #[error("ticker is shorter than the minimum length")]
    TickerTooShort {},

    #[error("token is already registered")]
    TokenAlreadyRegistered {},

    #[error("token is not registered")]
    TokenNotRegistered {},

    #[error("token contract has already been set")]
    TokenContractAlreadySet {},

    #[error("incorrect payment symbol")]
    IncorrectPaymentSymbol {},

    #[error("incorrect payment amount")]
    IncorrectPaymentAmount {},

    #[error("insufficient contract balance to pay registration fee")]
    InsufficientFeeBalance {},

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Can't migrate from {storage_contract_name} to {contract_name}")]
    MigrationError {
        storage_contract_name: String,
        contract_name: String,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
