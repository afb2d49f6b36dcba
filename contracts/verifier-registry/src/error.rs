use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("NotFound: no verifier registered under {id}")]
    NotFound { id: String },

    #[error("RegistrationDenied: {reason}")]
    RegistrationDenied { reason: String },

    #[error("Expired: description was valid till {valid_till}, current time is {current}")]
    Expired { valid_till: u64, current: u64 },

    #[error("StaleTimestamp: valid_till {valid_till} is outside the acceptance window ending at {window_end}")]
    StaleTimestamp { valid_till: u64, window_end: u64 },

    // thiserror reserves the name `source` for error chaining, so the
    // description's source address lives under `expected_source`.
    #[error("WrongSender: description binds source {expected_source}, sender is {sender}")]
    WrongSender {
        sender: String,
        expected_source: String,
    },

    #[error("EmptyMessage")]
    EmptyMessage {},

    #[error("UnknownKey: {public_key} is not an authorized endpoint of this verifier")]
    UnknownKey { public_key: String },

    #[error("DuplicateKey: {public_key} appears more than once in the signature set")]
    DuplicateKey { public_key: String },

    #[error("InsufficientQuorum: {got} distinct valid signatures, quorum is {required}")]
    InsufficientQuorum { got: u8, required: u8 },

    #[error("InvalidSignature")]
    InvalidSignature {},

    #[error("PayloadTooLarge: {size} bytes, limit is {limit}")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("CapacityExceeded: directory holds {num} verifiers, capacity is {capacity}")]
    CapacityExceeded { num: u8, capacity: u8 },
}

impl ContractError {
    /// Numeric exit code surfaced to the host. Kept bit-compatible with the
    /// reference deployment.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Std(_) => 500,
            ContractError::Unauthorized {} => 401,
            ContractError::NotFound { .. } => 404,
            ContractError::RegistrationDenied { .. } => 410,
            ContractError::Expired { .. } => 411,
            ContractError::StaleTimestamp { .. } => 997,
            ContractError::WrongSender { .. } => 414,
            ContractError::EmptyMessage {} => 998,
            ContractError::UnknownKey { .. } => 413,
            ContractError::DuplicateKey { .. } => 413,
            ContractError::InsufficientQuorum { .. } => 413,
            ContractError::InvalidSignature {} => 999,
            ContractError::PayloadTooLarge { .. } => 402,
            ContractError::CapacityExceeded { .. } => 419,
        }
    }
}
