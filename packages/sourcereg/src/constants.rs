//! Protocol-wide constants shared by the registry contracts.

/// Native denom all protocol fees and deployment costs are paid in.
pub const FEE_DENOM: &str = "uton";

/// Hard floor for the configurable minimum deployment fee.
pub const FEE_FLOOR: u128 = 65_000_000;

pub const DEFAULT_MIN_DEPLOY_FEE: u128 = 65_000_000;
pub const DEFAULT_MAX_DEPLOY_FEE: u128 = 1_000_000_000;

/// Kept by the verifier registry on every successful update; the rest of the
/// attached value is returned to the sender with the receipt.
pub const UPDATE_VERIFIER_FEE: u128 = 10_000_000;

/// Kept by the verifier registry when relaying a forwarded message.
pub const FORWARD_FEE: u128 = 10_000_000;

/// Reserved per verifier entry, returned to the admin on removal.
pub const VERIFIER_STAKE: u128 = 1_000_000_000;

/// A message description may not claim validity further than this many
/// seconds past the current block time.
pub const FORWARD_VALIDITY_WINDOW: u64 = 3_600;

/// Upper bound on the canonically encoded endpoints dictionary.
pub const MAX_ENDPOINTS_BYTES: usize = 1_024;
/// Encoded size of one endpoint entry: 32-byte public key, 32-bit metadata.
pub const ENDPOINT_ENTRY_BYTES: usize = 36;

/// Source and target of a message description carry one-byte length
/// prefixes in the canonical encoding, so they are capped at 255 bytes.
pub const MAX_ADDRESS_BYTES: usize = 255;

pub const VERIFIER_ID_BYTES: usize = 32;
pub const PUBLIC_KEY_BYTES: usize = 32;
pub const SIGNATURE_BYTES: usize = 64;
pub const CONTENT_HASH_BYTES: usize = 32;
