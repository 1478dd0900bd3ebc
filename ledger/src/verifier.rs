//! Proof verification seam.
//!
//! The ledger never looks inside a seal; it hands the seal, the
//! currently trusted image id, and the journal digest to a
//! [`ProofVerifier`] and treats any error as a failed transition. Real
//! deployments put a zkVM receipt verifier behind this trait; this
//! crate ships only the dev-mode implementation.

use alloy_primitives::B256;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Seal rejection reasons.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("seal has wrong length: {0} bytes")]
    SealLength(usize),

    #[error("seal does not match the image id and journal digest")]
    Mismatch,
}

/// Checks that a seal attests execution of the computation named by
/// `image_id` committing the journal behind `journal_digest`.
pub trait ProofVerifier {
    fn verify(&self, seal: &[u8], image_id: B256, journal_digest: B256)
        -> Result<(), VerifyError>;
}

const DEV_SEAL_DOMAIN: &[u8] = b"signal-ledger/dev-seal-v1";

/// Produce a dev-mode seal for a journal digest under an image id.
///
/// The local stand-in for the proving pipeline: the "proof" is just a
/// domain-separated hash binding the identity to the digest.
pub fn dev_seal(image_id: B256, journal_digest: B256) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(DEV_SEAL_DOMAIN);
    hasher.update(image_id);
    hasher.update(journal_digest);
    hasher.finalize().to_vec()
}

/// Verifier accepting exactly the seals [`dev_seal`] produces.
///
/// Carries the binding semantics of a real verifier — a seal is valid
/// for one (image id, digest) pair only — and none of the soundness:
/// anyone can mint seals. Tests and local runs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevModeVerifier;

impl ProofVerifier for DevModeVerifier {
    fn verify(
        &self,
        seal: &[u8],
        image_id: B256,
        journal_digest: B256,
    ) -> Result<(), VerifyError> {
        if seal.len() != 32 {
            return Err(VerifyError::SealLength(seal.len()));
        }
        if seal != dev_seal(image_id, journal_digest).as_slice() {
            return Err(VerifyError::Mismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(byte: u8) -> B256 {
        B256::repeat_byte(byte)
    }

    #[test]
    fn dev_seal_roundtrip() {
        let seal = dev_seal(id(0x11), id(0x22));
        assert!(DevModeVerifier.verify(&seal, id(0x11), id(0x22)).is_ok());
    }

    #[test]
    fn seal_is_bound_to_image_id() {
        let seal = dev_seal(id(0x11), id(0x22));
        assert_eq!(
            DevModeVerifier.verify(&seal, id(0x33), id(0x22)),
            Err(VerifyError::Mismatch)
        );
    }

    #[test]
    fn seal_is_bound_to_digest() {
        let seal = dev_seal(id(0x11), id(0x22));
        assert_eq!(
            DevModeVerifier.verify(&seal, id(0x11), id(0x23)),
            Err(VerifyError::Mismatch)
        );
    }

    #[test]
    fn truncated_seal_is_rejected() {
        let seal = dev_seal(id(0x11), id(0x22));
        assert_eq!(
            DevModeVerifier.verify(&seal[..16], id(0x11), id(0x22)),
            Err(VerifyError::SealLength(16))
        );
    }
}
