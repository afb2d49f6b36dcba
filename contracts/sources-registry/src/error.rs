use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("BelowMinFee: attached {value}, minimum deployment fee is {min}")]
    BelowMinFee { value: Uint128, min: Uint128 },

    #[error("AboveMaxFee: attached {value}, maximum deployment fee is {max}")]
    AboveMaxFee { value: Uint128, max: Uint128 },

    #[error("EmptyCode")]
    EmptyCode {},

    #[error("FeeFloorViolation: minimum fee {min} is below the protocol floor {floor}")]
    FeeFloorViolation { min: Uint128, floor: Uint128 },
}

impl ContractError {
    /// Numeric exit code surfaced to the host. Kept bit-compatible with the
    /// reference deployment.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Std(_) => 500,
            ContractError::Unauthorized {} => 401,
            ContractError::BelowMinFee { .. } => 900,
            ContractError::AboveMaxFee { .. } => 901,
            ContractError::EmptyCode {} => 902,
            ContractError::FeeFloorViolation { .. } => 903,
        }
    }
}
