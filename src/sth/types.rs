use super::constants::*;
use crate::codec::{CodecError, Reader, Writer};

/// A signed tree head statement observed from a log.
///
/// `root_hash` is carried as a byte string; its width is validated at
/// encode time rather than by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SthRecord {
    /// Milliseconds since the epoch, as claimed by the log.
    pub timestamp: u64,
    /// Number of leaves in the tree at `timestamp`.
    pub tree_size: u64,
    /// SHA-256 root hash; must be exactly 32 bytes.
    pub root_hash: Vec<u8>,
    /// TLS-encoded `DigitallySigned` tree head signature (§3.5).
    pub signature: Vec<u8>,
}

/// Canonical signature input for a tree head (RFC 6962 §3.5):
///
/// ```text
/// u8   version        = 0 (v1)
/// u8   signature_type = 1 (tree_hash)
/// u64  timestamp
/// u64  tree_size
/// [32] sha256_root_hash
/// ```
///
/// Always 50 bytes. The root-hash width is checked here, before any
/// signature work.
pub fn encode_sth_input(sth: &SthRecord) -> Result<Vec<u8>, CodecError> {
    if sth.root_hash.len() != SZ_ROOT_HASH {
        return Err(CodecError::Invalid("root_hash length"));
    }
    let mut w = Writer::new();
    w.write_u8(VERSION_V1);
    w.write_u8(SIG_TYPE_TREE_HASH);
    w.write_u64(sth.timestamp);
    w.write_u64(sth.tree_size);
    w.write_bytes(&sth.root_hash);
    Ok(w.into_vec())
}

/// Decode the TLS `DigitallySigned` wrapper around a tree head signature:
///
/// ```text
/// u8               hash_algorithm      = 4 (sha256)
/// u8               signature_algorithm = 3 (ecdsa)
/// opaque<0..2^16-1> signature
/// ```
///
/// Returns the inner DER-encoded ECDSA signature. Strict parse: a declared
/// length that does not match the remaining input exactly, in either
/// direction, is an error.
pub fn decode_signature(signature: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut r = Reader::new(signature);
    if r.read_u8()? != HASH_ALG_SHA256 {
        return Err(CodecError::Invalid("hash_algorithm"));
    }
    if r.read_u8()? != SIG_ALG_ECDSA {
        return Err(CodecError::Invalid("signature_algorithm"));
    }
    let inner = r.read_opaque_u16()?;
    r.finish()?;
    Ok(inner)
}

/// Wrap a DER-encoded ECDSA signature in the `DigitallySigned` container.
/// Inverse of [`decode_signature`]; used to produce tree head signatures
/// and test vectors. Fails when `inner` is longer than the u16 length
/// prefix can declare.
pub fn encode_signature(inner: &[u8]) -> Result<Vec<u8>, CodecError> {
    if inner.len() > u16::MAX as usize {
        return Err(CodecError::LengthOutOfRange);
    }
    let mut w = Writer::new();
    w.write_u8(HASH_ALG_SHA256);
    w.write_u8(SIG_ALG_ECDSA);
    w.write_opaque_u16(inner);
    Ok(w.into_vec())
}
