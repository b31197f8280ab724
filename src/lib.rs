//! Certificate Transparency log statement verification.
//!
//! Governing specs:
//! - RFC 6962 §3.5 (tree head signature input, `DigitallySigned` wrapper)
//! - RFC 6962 §2.1.2 (Merkle consistency proofs)
//!
//! This crate focuses on correctness and canonical parsing: malformed
//! bytes and inconsistent tree heads surface as typed errors, never as a
//! silent `false`.

pub mod codec;
pub mod error;
pub mod keys;
pub mod merkle;
pub mod sth;
pub mod verify;

pub use error::VerifyError;
pub use keys::{KeyAlgorithm, KeyInfo};
pub use merkle::{ConsistencyVerifier, MerkleVerifier, ProofError};
pub use sth::SthRecord;
pub use verify::{verify_sth_temporal_consistency, LogVerifier};
