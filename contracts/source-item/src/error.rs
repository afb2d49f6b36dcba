use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},
}

impl ContractError {
    /// Numeric exit code surfaced to the host. Kept bit-compatible with the
    /// reference deployment.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Std(_) => 500,
            ContractError::Unauthorized {} => 401,
        }
    }
}
