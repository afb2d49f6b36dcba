pub mod contract;
mod error;
pub mod handler;
pub mod quorum;
pub mod state;


pub use crate::error::ContractError;
