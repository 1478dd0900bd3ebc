//! Error taxonomy for the signal ledger

use alloy_primitives::Address;
use thiserror::Error;

use crate::verifier::VerifyError;

/// Failures of the ledger's two mutating operations.
///
/// Three distinct classes, preserved as separate variants because
/// callers pay differently for each: domain validation
/// (`InvalidAction`, `InvalidConfidence`, `InvalidPrice`) is derivable
/// from the input alone and fails before any verification cost;
/// `Verification` means the seal, identity, and journal digest do not
/// line up; `NotOwner` is an access-control rejection. None of them
/// mutates state.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid action: {0} (expected 0 = SELL or 1 = BUY)")]
    InvalidAction(u8),

    #[error("invalid confidence: {0} (must be at most 100)")]
    InvalidConfidence(u64),

    #[error("invalid price: predicted price must be nonzero")]
    InvalidPrice,

    #[error("proof verification failed")]
    Verification(#[source] VerifyError),

    #[error("caller {0} is not the registry owner")]
    NotOwner(Address),
}
