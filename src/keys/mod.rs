//! Log public-key material.
//!
//! Logs declare a key algorithm alongside an encoded public key. Only ECDSA
//! P-256 is implemented; the declared tag is checked before any decode work
//! so an unsupported algorithm is never misreported as a malformed key.

use p256::ecdsa::VerifyingKey;
use p256::pkcs8::DecodePublicKey;

use crate::error::VerifyError;

/// Key algorithm declared in log metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Ecdsa,
    Rsa,
}

/// A log's declared key: algorithm tag plus the encoded
/// SubjectPublicKeyInfo, either PEM armored or raw DER.
#[derive(Debug, Clone)]
pub struct KeyInfo {
    pub algorithm: KeyAlgorithm,
    pub key: Vec<u8>,
}

/// Decode a declared log key into a P-256 verifying key.
pub fn decode_public_key(info: &KeyInfo) -> Result<VerifyingKey, VerifyError> {
    if info.algorithm != KeyAlgorithm::Ecdsa {
        return Err(VerifyError::UnsupportedAlgorithm(info.algorithm));
    }
    if info.key.starts_with(b"-----BEGIN") {
        let text = core::str::from_utf8(&info.key)
            .map_err(|_| VerifyError::KeyDecode("pem is not utf-8"))?;
        VerifyingKey::from_public_key_pem(text)
            .map_err(|_| VerifyError::KeyDecode("pem public key"))
    } else {
        VerifyingKey::from_public_key_der(&info.key)
            .map_err(|_| VerifyError::KeyDecode("der public key"))
    }
}
