//! Proof-gated trading signal ledger.
//!
//! Accepts a (action, confidence, predicted price) submission only
//! together with a seal attesting that the trusted prediction engine
//! build actually computed it. Domain validation runs before
//! verification, verification runs before any state change, and a
//! failed transition leaves the stored signal untouched.

mod error;
mod ledger;
mod registry;
pub mod verifier;

pub use error::LedgerError;
pub use ledger::{ImageIdUpdated, Signal, SignalLedger, SignalUpdated, MAX_CONFIDENCE};
pub use registry::ImageRegistry;
pub use verifier::{dev_seal, DevModeVerifier, ProofVerifier, VerifyError};
