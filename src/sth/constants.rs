//! Wire constants from RFC 6962 §3.4, §3.5 and RFC 5246 §7.4.1.4.1.

/// Version: v1.
pub const VERSION_V1: u8 = 0;
/// SignatureType: tree_hash.
pub const SIG_TYPE_TREE_HASH: u8 = 1;
/// HashAlgorithm: sha256.
pub const HASH_ALG_SHA256: u8 = 4;
/// SignatureAlgorithm: ecdsa.
pub const SIG_ALG_ECDSA: u8 = 3;

// Fixed sizes
pub const SZ_ROOT_HASH: usize = 32;
/// Tree head signature input: 1 + 1 + 8 + 8 + 32.
pub const SZ_STH_INPUT: usize = 50;
