use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::Item;

/// The registry that instantiated this item; the only address allowed to
/// rewrite its content.
pub const PARENT: Item<CanonicalAddr> = Item::new("parent");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Data {
    pub version: u8,
    /// None until the parent pushes content for the first time.
    pub content: Option<String>,
}

pub const DATA: Item<Data> = Item::new("data");
