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

    #[error("mockreceiver is not configured")]
    NotConfigured {},

    #[error("Only the configured token contract may send tokens to the mockreceiver.")]
    WrongTokenContract {},

    #[error("Tokens must be sent from the configured sender account.")]
    WrongSender {},

    #[error("must transfer positive quantity")]
    NonPositiveTransfer {},

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
