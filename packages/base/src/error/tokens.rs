use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use thiserror::Error;
use vaulta_helpers::auth::AuthError;

use crate::asset::AllocationError;

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

    #[error("{0}")]
    Allocation(#[from] AllocationError),

    #[error("invalid symbol name")]
    InvalidSymbol {},

    #[error("invalid supply")]
    InvalidSupply {},

    #[error("invalid quantity")]
    InvalidQuantity {},

    #[error("max-supply must be positive")]
    NonPositiveMaxSupply {},

    #[error("token with symbol already exists")]
    TokenAlreadyExists {},

    #[error("token with symbol does not exist, create token before issue")]
    IssueUnknownToken {},

    #[error("token with symbol does not exist")]
    UnknownToken {},

    #[error("symbol does not exist")]
    UnknownSymbol {},

    #[error("token supply does not exist")]
    UnknownSupply {},

    #[error("tokens can only be issued to issuer account")]
    IssueToNonIssuer {},

    #[error("must issue positive quantity")]
    NonPositiveIssue {},

    #[error("must retire positive quantity")]
    NonPositiveRetire {},

    #[error("must transfer positive quantity")]
    NonPositiveTransfer {},

    #[error("symbol precision mismatch")]
    PrecisionMismatch {},

    #[error("quantity exceeds available supply")]
    ExceedsAvailableSupply {},

    #[error("circulating supply exceeds the requested supply")]
    SupplyBelowCirculating {},

    #[error("only issuer can set token maximum supply")]
    NotIssuer {},

    #[error("max supply is less than available supply")]
    MaxSupplyBelowSupply {},

    #[error("memo has more than 256 bytes")]
    MemoTooLong {},

    #[error("cannot transfer to self")]
    TransferToSelf {},

    #[error("no balance object found")]
    NoBalanceObject {},

    #[error("overdrawn balance")]
    OverdrawnBalance {},

    #[error("Balance row already deleted or never existed. Action won't have any effect.")]
    BalanceRowMissing {},

    #[error("Cannot close because the balance is not zero.")]
    NonZeroBalance {},

    #[error("account already receives transfer notifications")]
    ReceiverAlreadyAdded {},

    #[error("account does not receive transfer notifications")]
    ReceiverNotFound {},

    #[error("registry contract not set")]
    RegistryNotSet {},

    #[error("token is not registered in registry contract")]
    NotInRegistry {},

    #[error("token is not registered to this contract")]
    NotRegisteredToThisContract {},

    #[error("ticker must match supply symbol")]
    TickerMismatch {},

    #[error("supply precision does not match registered precision")]
    RegisteredPrecisionMismatch {},

    #[error("token supply has already been set")]
    SupplyAlreadySet {},

    #[error("supply not established")]
    SupplyNotEstablished {},

    #[error("supply must be fully allocated")]
    SupplyNotFullyAllocated {},

    #[error("contract balance not found")]
    ContractBalanceNotFound {},

    #[error("must provide at least one token allocation")]
    NoAllocations {},

    #[error("token has already been distributed")]
    AlreadyDistributed {},

    #[error("balance must be opened first for: {receiver}")]
    BalanceNotOpened { receiver: String },

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
