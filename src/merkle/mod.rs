//! Merkle tree consistency verification (RFC 6962 §2.1).
//!
//! Proof checking is consumed through the [`ConsistencyVerifier`] trait so
//! the hash-chain algorithm can be developed, tested, and replaced
//! independently of signature verification. [`MerkleVerifier`] is the
//! concrete RFC 6962 implementation.

use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("older tree has bigger size ({0} vs {1})")]
    SizeOutOfOrder(u64, u64),
    #[error("different root hashes for the same tree size")]
    SameSizeMismatch,
    #[error("proof is too short")]
    TooShort,
    #[error("proof has unused nodes")]
    ExtraNodes,
    #[error("computed root does not match the new tree head")]
    BadProof,
    #[error("proof connects to a different old root: trees are inconsistent")]
    Inconsistent,
}

/// Checks that one tree state is an append-only extension of an earlier one.
///
/// `proof` is the consistency path between the two sizes as served by the
/// log. Implementations must fail closed: any proof that does not bind
/// `old_root` to `new_root` exactly is an error, never a warning.
pub trait ConsistencyVerifier {
    fn verify_tree_consistency(
        &self,
        old_size: u64,
        new_size: u64,
        old_root: &[u8; 32],
        new_root: &[u8; 32],
        proof: &[[u8; 32]],
    ) -> Result<(), ProofError>;
}

const LEAF_HASH_PREFIX: u8 = 0x00;
const NODE_HASH_PREFIX: u8 = 0x01;

/// Leaf hash: SHA-256(0x00 || leaf) (RFC 6962 §2.1).
pub fn leaf_hash(leaf: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update([LEAF_HASH_PREFIX]);
    h.update(leaf);
    h.finalize().into()
}

/// Interior node hash: SHA-256(0x01 || left || right).
pub fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update([NODE_HASH_PREFIX]);
    h.update(left);
    h.update(right);
    h.finalize().into()
}

/// Root hash of the empty tree: SHA-256 of the empty string.
pub fn empty_root() -> [u8; 32] {
    Sha256::digest(b"").into()
}

/// RFC 6962 §2.1.2 consistency-proof verifier.
///
/// A consistency proof is an audit path for the node with index
/// `old_size - 1` in the new tree, pre-hashed up to the first node that
/// exists only in the new tree. The verifier recomputes both roots in one
/// walk and requires the proof to be consumed exactly: leftover nodes are
/// rejected, not ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MerkleVerifier;

impl ConsistencyVerifier for MerkleVerifier {
    fn verify_tree_consistency(
        &self,
        old_size: u64,
        new_size: u64,
        old_root: &[u8; 32],
        new_root: &[u8; 32],
        proof: &[[u8; 32]],
    ) -> Result<(), ProofError> {
        if old_size > new_size {
            return Err(ProofError::SizeOutOfOrder(old_size, new_size));
        }
        if old_size == new_size {
            if old_root != new_root {
                return Err(ProofError::SameSizeMismatch);
            }
            // identical trees carry an empty proof
            return if proof.is_empty() {
                Ok(())
            } else {
                Err(ProofError::ExtraNodes)
            };
        }
        if old_size == 0 {
            // the empty tree is a prefix of every tree
            return if proof.is_empty() {
                Ok(())
            } else {
                Err(ProofError::ExtraNodes)
            };
        }

        // 0 < old_size < new_size
        let mut node = old_size - 1;
        let mut last = new_size - 1;

        // While the old head is a right child its subtree is shared by both
        // trees; the path above it starts at the parent.
        while node % 2 == 1 {
            node /= 2;
            last /= 2;
        }

        let mut nodes = proof.iter();
        let (mut old_hash, mut new_hash) = if node > 0 {
            let seed = *nodes.next().ok_or(ProofError::TooShort)?;
            (seed, seed)
        } else {
            // old tree is a complete subtree; its root is the seed
            (*old_root, *old_root)
        };

        while node > 0 {
            if node % 2 == 1 {
                // left sibling exists in both trees
                let sib = nodes.next().ok_or(ProofError::TooShort)?;
                old_hash = node_hash(sib, &old_hash);
                new_hash = node_hash(sib, &new_hash);
            } else if node < last {
                // right sibling exists in the new tree only
                let sib = nodes.next().ok_or(ProofError::TooShort)?;
                new_hash = node_hash(&new_hash, sib);
            }
            node /= 2;
            last /= 2;
        }

        // Climb the remaining levels that exist only in the new tree.
        while last > 0 {
            if node < last {
                let sib = nodes.next().ok_or(ProofError::TooShort)?;
                new_hash = node_hash(&new_hash, sib);
            }
            node /= 2;
            last /= 2;
        }

        if new_hash != *new_root {
            return Err(ProofError::BadProof);
        }
        if old_hash != *old_root {
            // The proof reproduces the new root but binds a different old
            // root: together with the STH signatures this is evidence of a
            // forked history.
            return Err(ProofError::Inconsistent);
        }
        if nodes.next().is_some() {
            return Err(ProofError::ExtraNodes);
        }
        Ok(())
    }
}
