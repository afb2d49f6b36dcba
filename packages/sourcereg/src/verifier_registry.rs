use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Maximum number of distinct verifier ids the directory will hold.
    pub capacity: u8,
}

/// One entry of a verifier's endpoint set. The registry stores endpoints as
/// a vector sorted by public key and deduplicated on write, keeping
/// iteration deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Endpoint {
    /// Hex-encoded 32-byte ed25519 public key.
    pub public_key: String,
    /// Opaque 32-bit metadata attached to the key.
    pub metadata: u32,
}

/// The canonical signed envelope binding a verifier id, expiry, source,
/// target and payload. Signatures attest to the digest of its canonical
/// encoding (see `utils::message_description_digest`). The payload is opaque
/// to the registry and is relayed byte-identical.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MessageDescription {
    /// 256-bit verifier id, `sha256` of the verifier name.
    pub verifier_id: Vec<u8>,
    /// Unix seconds after which the description must not be forwarded.
    pub valid_till: u32,
    /// Address that must submit the forward request.
    pub source: String,
    /// Address the payload is relayed to.
    pub target: String,
    pub payload: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SignatureEntry {
    /// 64-byte ed25519 signature over the description digest.
    pub signature: Binary,
    /// 32-byte ed25519 public key.
    pub public_key: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    UpdateVerifier {
        query_id: u64,
        /// 256-bit id, `sha256` of `name`.
        id: Vec<u8>,
        quorum: u8,
        endpoints: Vec<Endpoint>,
        name: String,
        marketing_url: String,
    },
    RemoveVerifier {
        query_id: u64,
        id: Vec<u8>,
    },
    ForwardMessage {
        query_id: u64,
        description: MessageDescription,
        signatures: Vec<SignatureEntry>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetVerifier { id: Vec<u8> },
    GetVerifiersNum {},
    GetVerifiers {},
}

// We define a custom struct for each query response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VerifierResponse {
    pub id: Vec<u8>,
    pub admin: Addr,
    pub quorum: u8,
    pub pub_key_endpoints: Vec<Endpoint>,
    pub name: String,
    pub marketing_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VerifiersNumResponse {
    pub num: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct VerifiersResponse {
    pub verifiers: Vec<VerifierResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
