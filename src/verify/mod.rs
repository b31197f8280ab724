//! STH signature and consistency verification.
//!
//! [`LogVerifier`] binds one log's public key at construction and verifies
//! tree head signatures against it. Consistency checking between two STHs
//! never touches the key: the temporal rules are pure structural filters,
//! and the hash proof is delegated to the held [`ConsistencyVerifier`].

use std::fmt;

use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};

use crate::codec::CodecError;
use crate::error::VerifyError;
use crate::keys::{decode_public_key, KeyInfo};
use crate::merkle::{ConsistencyVerifier, MerkleVerifier};
use crate::sth::{decode_signature, encode_sth_input, SthRecord};

/// Verifier bound to a single log.
///
/// Immutable after construction; holds no mutable state, so one instance may
/// be shared freely across threads.
pub struct LogVerifier {
    public_key: VerifyingKey,
    merkle: Box<dyn ConsistencyVerifier + Send + Sync>,
}

impl fmt::Debug for LogVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogVerifier")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl LogVerifier {
    /// Bind a log key, checking proofs with the RFC 6962 [`MerkleVerifier`].
    pub fn new(key_info: &KeyInfo) -> Result<Self, VerifyError> {
        Self::with_proof_verifier(key_info, Box::new(MerkleVerifier))
    }

    /// Bind a log key with a caller-supplied consistency-proof verifier.
    pub fn with_proof_verifier(
        key_info: &KeyInfo,
        merkle: Box<dyn ConsistencyVerifier + Send + Sync>,
    ) -> Result<Self, VerifyError> {
        let public_key = decode_public_key(key_info)?;
        Ok(Self { public_key, merkle })
    }

    /// Verify the tree head signature of one STH against the bound key.
    ///
    /// Encodes the canonical 50-byte input, unwraps the `DigitallySigned`
    /// container, then checks the inner DER ECDSA signature over
    /// SHA-256(input). The first failing stage short-circuits with its
    /// specific error kind.
    pub fn verify_sth(&self, sth: &SthRecord) -> Result<(), VerifyError> {
        let input = encode_sth_input(sth)?;
        let inner = decode_signature(&sth.signature)?;
        let sig = Signature::from_der(&inner).map_err(|_| CodecError::Invalid("ecdsa der"))?;
        self.public_key
            .verify(&input, &sig)
            .map_err(|_| VerifyError::Signature)
    }

    /// Verify that `new` is an append-only extension of `old`.
    ///
    /// Runs the temporal rules first; only a structurally plausible pair
    /// reaches the proof verifier. Signatures are not checked here and the
    /// bound key is not consulted.
    pub fn verify_sth_consistency(
        &self,
        old: &SthRecord,
        new: &SthRecord,
        proof: &[[u8; 32]],
    ) -> Result<(), VerifyError> {
        verify_sth_temporal_consistency(old, new)?;
        let old_root = root_hash_array(old)?;
        let new_root = root_hash_array(new)?;
        self.merkle.verify_tree_consistency(
            old.tree_size,
            new.tree_size,
            &old_root,
            &new_root,
            proof,
        )?;
        Ok(())
    }
}

/// Structural sanity rules between two STHs from the same log, `old` being
/// the earlier observation as asserted by the caller.
///
/// Checks timestamps and tree sizes only; no signatures, no hashes. Cheap
/// enough to run before every proof fetch.
pub fn verify_sth_temporal_consistency(
    old: &SthRecord,
    new: &SthRecord,
) -> Result<(), VerifyError> {
    if old.timestamp > new.timestamp {
        return Err(VerifyError::InvalidArgument("older sth has newer timestamp"));
    }
    // Two different tree sizes for one timestamp is equivocation even if the
    // trees are otherwise consistent.
    if old.timestamp == new.timestamp && old.tree_size != new.tree_size {
        return Err(VerifyError::Consistency(
            "different tree sizes for the same timestamp",
        ));
    }
    if old.timestamp < new.timestamp && old.tree_size > new.tree_size {
        return Err(VerifyError::Consistency("older tree has bigger size"));
    }
    Ok(())
}

fn root_hash_array(sth: &SthRecord) -> Result<[u8; 32], VerifyError> {
    <[u8; 32]>::try_from(sth.root_hash.as_slice())
        .map_err(|_| VerifyError::Encoding(CodecError::Invalid("root_hash length")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sth(timestamp: u64, tree_size: u64) -> SthRecord {
        SthRecord {
            timestamp,
            tree_size,
            root_hash: vec![0u8; 32],
            signature: Vec::new(),
        }
    }

    #[test]
    fn temporal_rules_cover_the_full_table() {
        // reversed order is a caller error, whatever the sizes
        for sizes in [(5, 10), (10, 5), (5, 5)] {
            let err = verify_sth_temporal_consistency(&sth(2000, sizes.0), &sth(1000, sizes.1))
                .unwrap_err();
            assert!(matches!(err, VerifyError::InvalidArgument(_)));
        }

        // same timestamp: equal sizes pass, differing sizes are equivocation
        assert!(verify_sth_temporal_consistency(&sth(1000, 5), &sth(1000, 5)).is_ok());
        let err = verify_sth_temporal_consistency(&sth(1000, 5), &sth(1000, 6)).unwrap_err();
        assert!(matches!(err, VerifyError::Consistency(_)));
        let err = verify_sth_temporal_consistency(&sth(1000, 6), &sth(1000, 5)).unwrap_err();
        assert!(matches!(err, VerifyError::Consistency(_)));

        // growing time: tree must not shrink
        let err = verify_sth_temporal_consistency(&sth(1000, 10), &sth(2000, 5)).unwrap_err();
        assert!(matches!(err, VerifyError::Consistency(_)));
        assert!(verify_sth_temporal_consistency(&sth(1000, 5), &sth(2000, 5)).is_ok());
        assert!(verify_sth_temporal_consistency(&sth(1000, 5), &sth(2000, 10)).is_ok());
    }

    #[test]
    fn log_verifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogVerifier>();
    }
}
