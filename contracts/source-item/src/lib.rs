pub mod contract;
mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
pub mod test;

pub use crate::error::ContractError;
