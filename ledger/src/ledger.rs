//! Proof-gated signal state machine

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use signal_journal::Action;

use crate::error::LedgerError;
use crate::registry::ImageRegistry;
use crate::verifier::ProofVerifier;

/// Maximum accepted confidence percentage.
pub const MAX_CONFIDENCE: u64 = 100;

/// The latest accepted trading signal.
///
/// A singleton record: fields are only ever replaced all together, and
/// an overwritten signal is gone. Starts zero-valued before the first
/// accepted update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub action: u8,
    pub confidence: u64,
    pub predicted_price: U256,
    /// Unix seconds of the last accepted update.
    pub timestamp: u64,
}

/// Emitted when a submission passes validation and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalUpdated {
    pub action: u8,
    pub confidence: u64,
    pub predicted_price: U256,
    pub timestamp: u64,
}

/// Emitted when the trusted image id is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIdUpdated {
    pub image_id: B256,
}

/// Validated ledger holding the latest signal and the identity of the
/// computation allowed to produce it.
///
/// The ledger owns its state exclusively and mutates only through
/// `&mut self`, so a transition either completes or leaves nothing
/// behind; there is no interleaved partial state to observe.
#[derive(Debug)]
pub struct SignalLedger<V: ProofVerifier> {
    registry: ImageRegistry,
    signal: Signal,
    verifier: V,
}

impl<V: ProofVerifier> SignalLedger<V> {
    pub fn new(owner: Address, initial_image_id: B256, verifier: V) -> Self {
        Self {
            registry: ImageRegistry::new(owner, initial_image_id),
            signal: Signal::default(),
            verifier,
        }
    }

    /// Submit a new signal together with a seal proving it.
    ///
    /// Guard clauses run strictly in this order: cheap domain checks
    /// first, cryptographic verification last. The order is an
    /// observable cost contract — a malformed submission must never
    /// pay for verification.
    pub fn set_signal(
        &mut self,
        action: u8,
        confidence: u64,
        predicted_price: U256,
        seal: &[u8],
    ) -> Result<SignalUpdated, LedgerError> {
        Action::try_from(action).map_err(|_| LedgerError::InvalidAction(action))?;
        if confidence > MAX_CONFIDENCE {
            return Err(LedgerError::InvalidConfidence(confidence));
        }
        if predicted_price.is_zero() {
            return Err(LedgerError::InvalidPrice);
        }

        // Re-encode the submitted fields; the seal must be bound to
        // exactly these bytes under the currently trusted id.
        let journal = signal_journal::encode(action, confidence, predicted_price);
        let digest = signal_journal::digest(&journal);
        self.verifier
            .verify(seal, self.registry.current(), digest)
            .map_err(LedgerError::Verification)?;

        let timestamp = now_unix();
        self.signal = Signal {
            action,
            confidence,
            predicted_price,
            timestamp,
        };

        tracing::info!(
            action,
            confidence,
            %predicted_price,
            timestamp,
            "signal updated"
        );
        Ok(SignalUpdated {
            action,
            confidence,
            predicted_price,
            timestamp,
        })
    }

    /// Replace the trusted image id. Owner only.
    ///
    /// Has no retroactive effect on the stored signal; it only changes
    /// which seals the next submissions verify against.
    pub fn set_image_id(
        &mut self,
        caller: Address,
        new_image_id: B256,
    ) -> Result<ImageIdUpdated, LedgerError> {
        let previous = self.registry.set(caller, new_image_id)?;

        tracing::info!(%previous, image_id = %new_image_id, "image id updated");
        Ok(ImageIdUpdated {
            image_id: new_image_id,
        })
    }

    pub fn latest_signal(&self) -> Signal {
        self.signal
    }

    pub fn signal_action(&self) -> u8 {
        self.signal.action
    }

    pub fn confidence(&self) -> u64 {
        self.signal.confidence
    }

    pub fn predicted_price(&self) -> U256 {
        self.signal.predicted_price
    }

    /// Currently trusted image id.
    pub fn image_id(&self) -> B256 {
        self.registry.current()
    }

    pub fn owner(&self) -> Address {
        self.registry.owner()
    }
}

fn now_unix() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
