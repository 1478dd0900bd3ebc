//! ╔══════════════════════════════════════════════════════════════════╗
//! ║   SIGNAL JOURNAL — Canonical result encoding                     ║
//! ║                                                                  ║
//! ║   96-byte layout, identical to abi.encode(uint8,uint256,uint256):║
//! ║   word 0: action, right-aligned in the low byte                  ║
//! ║   word 1: confidence, 32-byte big-endian                         ║
//! ║   word 2: predicted price, 32-byte big-endian                    ║
//! ║                                                                  ║
//! ║   Both the prediction engine and the ledger link this crate, so  ║
//! ║   the two sides agree on the layout by construction.             ║
//! ╚══════════════════════════════════════════════════════════════════╝

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Width of one encoded word.
pub const WORD: usize = 32;

/// Total length of an encoded journal.
pub const JOURNAL_LEN: usize = 3 * WORD;

/// Trading action committed in a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Action {
    Sell = 0,
    Buy = 1,
}

/// An action byte outside {0, 1}.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid action byte: {0}")]
pub struct InvalidAction(pub u8);

impl TryFrom<u8> for Action {
    type Error = InvalidAction;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(Action::Sell),
            1 => Ok(Action::Buy),
            other => Err(InvalidAction(other)),
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        action as u8
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Sell => write!(f, "SELL"),
            Action::Buy => write!(f, "BUY"),
        }
    }
}

/// Decode failures. Encoding is total; only decoding can reject.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalError {
    #[error("journal must be {JOURNAL_LEN} bytes, got {0}")]
    Length(usize),

    #[error("action word has nonzero padding above the low byte")]
    ActionPadding,

    #[error("confidence word exceeds the 64-bit confidence domain")]
    ConfidenceOverflow,
}

/// Encode the three signal fields into the canonical 96-byte journal.
///
/// Total over its whole input domain: range validation belongs to the
/// ledger, not the codec, exactly as `abi.encode` accepts any value.
pub fn encode(action: u8, confidence: u64, predicted_price: U256) -> [u8; JOURNAL_LEN] {
    let mut journal = [0u8; JOURNAL_LEN];
    journal[WORD - 1] = action;
    journal[WORD..2 * WORD].copy_from_slice(&U256::from(confidence).to_be_bytes::<WORD>());
    journal[2 * WORD..].copy_from_slice(&predicted_price.to_be_bytes::<WORD>());
    journal
}

/// Strict inverse of [`encode`].
///
/// Rejects anything a canonical encoder could not have produced: wrong
/// length, nonzero padding above the action byte, or a confidence word
/// wider than 64 bits.
pub fn decode(journal: &[u8]) -> Result<(u8, u64, U256), JournalError> {
    if journal.len() != JOURNAL_LEN {
        return Err(JournalError::Length(journal.len()));
    }
    if journal[..WORD - 1].iter().any(|&b| b != 0) {
        return Err(JournalError::ActionPadding);
    }
    let action = journal[WORD - 1];

    let confidence_word = U256::from_be_slice(&journal[WORD..2 * WORD]);
    let confidence: u64 = confidence_word
        .try_into()
        .map_err(|_| JournalError::ConfidenceOverflow)?;

    let predicted_price = U256::from_be_slice(&journal[2 * WORD..]);
    Ok((action, confidence, predicted_price))
}

/// SHA-256 digest of a journal. This is the value a seal is bound to.
pub fn digest(journal: &[u8; JOURNAL_LEN]) -> B256 {
    B256::from_slice(&Sha256::digest(journal))
}
