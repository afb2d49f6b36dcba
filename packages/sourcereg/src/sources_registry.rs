use cosmwasm_std::{Addr, Binary, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender.
    pub admin: Option<String>,
    /// Only this address may trigger source item deployment.
    pub verifier_registry: String,
    /// Defaults to `constants::DEFAULT_MIN_DEPLOY_FEE`.
    pub min_fee: Option<Uint128>,
    /// Defaults to `constants::DEFAULT_MAX_DEPLOY_FEE`.
    pub max_fee: Option<Uint128>,
    /// Code template source item addresses are derived from.
    pub source_item_code: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    DeploySource {
        query_id: u64,
        /// 256-bit id, `sha256` of the verifier name.
        verifier_id: Vec<u8>,
        /// 256-bit content hash of the verified code.
        content_hash: Vec<u8>,
        version: u8,
        json_url: String,
    },
    ChangeVerifierRegistry {
        address: String,
    },
    ChangeAdmin {
        address: String,
    },
    /// Replaces the registry's own executable code.
    ChangeCode {
        code: Binary,
    },
    /// Replaces the source item code template; changes all future derived
    /// addresses.
    SetSourceItemCode {
        code: Binary,
    },
    SetDeploymentCosts {
        min: Uint128,
        max: Uint128,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetVerifierRegistryAddress {},
    GetAdminAddress {},
    GetDeploymentCosts {},
    GetSourceItemAddress {
        verifier_id: Vec<u8>,
        content_hash: Vec<u8>,
    },
    /// The registry's own replaceable code blob, None until `ChangeCode`
    /// stores one.
    GetContractCode {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VerifierRegistryAddressResponse {
    pub address: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminAddressResponse {
    pub address: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeploymentCostsResponse {
    pub min: Uint128,
    pub max: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SourceItemAddressResponse {
    pub address: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContractCodeResponse {
    pub code: Option<Binary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
