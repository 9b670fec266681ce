//! Error types for keyslot-core.

use crate::SlotId;
use thiserror::Error;

/// Result type alias for keyslot-core operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Every id in `0..capacity` is active.
    #[error("registry capacity exhausted: the maximum id is {}", .capacity.saturating_sub(1))]
    CapacityExhausted {
        /// Configured capacity of the registry
        capacity: usize,
    },

    /// Id lies outside `0..capacity`
    #[error("slot id {id} out of range (capacity {capacity})")]
    IdOutOfRange {
        /// Offending id
        id: SlotId,
        /// Configured capacity of the registry
        capacity: usize,
    },

    /// Capacity must lie in `1..=MAX_CAPACITY`
    #[error("invalid capacity: {0} (must be between 1 and {max})", max = crate::MAX_CAPACITY)]
    InvalidCapacity(usize),
}

impl RegistryError {
    /// The capacity carried by the error, if any.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::CapacityExhausted { capacity } | Self::IdOutOfRange { capacity, .. } => {
                Some(*capacity)
            }
            Self::InvalidCapacity(_) => None,
        }
    }
}
