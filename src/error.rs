//! Caller-facing error surface.
//!
//! Every verification failure reaches the caller with its specific kind;
//! nothing is downgraded or swallowed. Verification functions return
//! `Ok(())` or an error, never a boolean.

use thiserror::Error;

use crate::codec::CodecError;
use crate::keys::KeyAlgorithm;
use crate::merkle::ProofError;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("unsupported key algorithm: {0:?}")]
    UnsupportedAlgorithm(KeyAlgorithm),
    #[error("key decode failed: {0}")]
    KeyDecode(&'static str),
    /// Binary-format violation. Fatal to the call; does not by itself imply
    /// log misbehavior (could be local corruption).
    #[error("encoding: {0}")]
    Encoding(#[from] CodecError),
    /// Well-formed signature that cryptographically fails to verify.
    #[error("signature did not verify")]
    Signature,
    /// STH pair passed in the wrong temporal order. A caller bug, not a
    /// log-misbehavior finding.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Structurally valid but logically impossible STH pair. Evidence of
    /// log equivocation or a rewritten history.
    #[error("inconsistency: {0}")]
    Consistency(&'static str),
    #[error("consistency proof: {0}")]
    Proof(#[from] ProofError),
}
