use cosmwasm_std::Addr;
use hex;
use sha2::{Digest, Sha256};

use crate::verifier_registry::MessageDescription;

pub fn sha256(i: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(i);
    hasher.finalize().to_vec()
}

/// A verifier's 256-bit id is the digest of its name.
pub fn verifier_id_from_name(name: &str) -> Vec<u8> {
    sha256(name.as_bytes())
}

/// Canonical signing encoding of a message description: fixed-width
/// big-endian integers, length-prefixed addresses, then the payload digest.
/// Re-encoding a decoded description reproduces identical bytes.
pub fn encode_message_description(desc: &MessageDescription) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        desc.verifier_id.len() + 4 + 1 + desc.source.len() + 1 + desc.target.len() + 32,
    );
    out.extend_from_slice(&desc.verifier_id);
    out.extend_from_slice(&desc.valid_till.to_be_bytes());
    out.push(desc.source.len() as u8);
    out.extend_from_slice(desc.source.as_bytes());
    out.push(desc.target.len() as u8);
    out.extend_from_slice(desc.target.as_bytes());
    out.extend_from_slice(&sha256(desc.payload.as_slice()));
    out
}

/// The digest signatures attest to.
pub fn message_description_digest(desc: &MessageDescription) -> Vec<u8> {
    sha256(&encode_message_description(desc))
}

/// Deterministic source item address for a (verifier id, content hash) pair.
///
/// This is the sole place host-specific addressing logic lives: the address
/// is the truncated digest of the child's code hash and initial-state hash,
/// mimicking the host's contract-addressing scheme. Identical inputs always
/// yield the identical address.
pub fn derive_source_item_address(
    code: &[u8],
    registry: &Addr,
    verifier_id: &[u8],
    content_hash: &[u8],
) -> Addr {
    let code_hash = sha256(code);

    let mut data = Vec::with_capacity(verifier_id.len() + content_hash.len() + registry.as_str().len());
    data.extend_from_slice(verifier_id);
    data.extend_from_slice(content_hash);
    data.extend_from_slice(registry.as_str().as_bytes());
    let data_hash = sha256(&data);

    let mut state_init = code_hash;
    state_init.extend_from_slice(&data_hash);
    let digest = sha256(&state_init);

    Addr::unchecked(hex::encode(&digest[..20]))
}
