use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use sourcereg::verifier_registry::Endpoint;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub capacity: u8,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Verifier {
    pub admin: CanonicalAddr,
    pub quorum: u8,
    /// Sorted by public key and deduplicated on write, so iteration is
    /// deterministic. Plain json serialization cannot carry a map.
    pub pub_key_endpoints: Vec<Endpoint>,
    pub name: String,
    pub marketing_url: String,
}

/// Keyed by the 256-bit verifier id, `sha256` of the verifier name.
pub const VERIFIERS: Map<Vec<u8>, Verifier> = Map::new("VERIFIERS");

pub const VERIFIERS_NUM: Item<u8> = Item::new("VERIFIERS_NUM");
