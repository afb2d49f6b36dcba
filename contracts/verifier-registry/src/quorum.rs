use std::collections::BTreeSet;

use cosmwasm_std::Api;

use sourcereg::constants::{PUBLIC_KEY_BYTES, SIGNATURE_BYTES};
use sourcereg::verifier_registry::{Endpoint, SignatureEntry};

use crate::error::ContractError;

/// Counts distinct valid signatures over `digest` and checks them against
/// `required`. Fails closed: an unknown key, a duplicate key, or a signature
/// that does not verify aborts the whole operation. `authorized` is the
/// verifier's stored endpoint set, sorted by public key.
pub fn verify_quorum(
    api: &dyn Api,
    digest: &[u8],
    required: u8,
    signatures: &[SignatureEntry],
    authorized: &[Endpoint],
) -> Result<u8, ContractError> {
    let mut seen: BTreeSet<Vec<u8>> = BTreeSet::new();

    for entry in signatures {
        let key = entry.public_key.as_slice();
        if key.len() != PUBLIC_KEY_BYTES || entry.signature.as_slice().len() != SIGNATURE_BYTES {
            return Err(ContractError::InvalidSignature {});
        }

        let key_hex = hex::encode(key);
        if authorized
            .binary_search_by(|e| e.public_key.as_str().cmp(key_hex.as_str()))
            .is_err()
        {
            return Err(ContractError::UnknownKey { public_key: key_hex });
        }
        if !seen.insert(key.to_vec()) {
            return Err(ContractError::DuplicateKey { public_key: key_hex });
        }

        let valid = api
            .ed25519_verify(digest, entry.signature.as_slice(), key)
            .map_err(|_| ContractError::InvalidSignature {})?;
        if !valid {
            return Err(ContractError::InvalidSignature {});
        }
    }

    let got = seen.len() as u8;
    if got < required {
        return Err(ContractError::InsufficientQuorum { got, required });
    }
    Ok(got)
}
