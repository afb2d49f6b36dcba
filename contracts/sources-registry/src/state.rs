use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Binary, CanonicalAddr, Uint128};
use cw_storage_plus::Item;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub admin: CanonicalAddr,
    /// Only this address may trigger source item deployment.
    pub verifier_registry: CanonicalAddr,
    pub min_fee: Uint128,
    pub max_fee: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// Code template source item addresses are derived from.
pub const SOURCE_ITEM_CODE: Item<Binary> = Item::new("SOURCE_ITEM_CODE");

/// The registry's own replaceable code blob.
pub const CONTRACT_CODE: Item<Binary> = Item::new("CONTRACT_CODE");
