pub mod constants;
pub mod source_item;
pub mod sources_registry;
pub mod utils;
pub mod verifier_registry;
