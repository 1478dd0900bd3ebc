//! Trusted computation identity registry

use alloy_primitives::{Address, B256};

use crate::error::LedgerError;

/// Single privileged-mutable slot naming the trusted engine build.
///
/// Kept separate from the signal state so the trusted computation can
/// be upgraded without touching what was last validated. The flip side
/// is an abrupt trust transition: the moment the id changes, every
/// seal proven under the old id stops verifying, with no grace window.
#[derive(Debug, Clone)]
pub struct ImageRegistry {
    owner: Address,
    image_id: B256,
}

impl ImageRegistry {
    pub fn new(owner: Address, initial_image_id: B256) -> Self {
        Self {
            owner,
            image_id: initial_image_id,
        }
    }

    /// Currently trusted image id.
    pub fn current(&self) -> B256 {
        self.image_id
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Replace the trusted id. Owner only. Returns the replaced id.
    pub fn set(&mut self, caller: Address, new_image_id: B256) -> Result<B256, LedgerError> {
        if caller != self.owner {
            return Err(LedgerError::NotOwner(caller));
        }
        let previous = self.image_id;
        self.image_id = new_image_id;
        Ok(previous)
    }
}
