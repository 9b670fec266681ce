//! Slot identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense integer handle naming a slot in a [`Registry`](crate::Registry).
///
/// Ids are small and non-negative; a registry only ever hands out ids in
/// `0..capacity`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotId(usize);

impl SlotId {
    /// Create an id from a raw slot index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying slot index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SlotId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<SlotId> for usize {
    fn from(id: SlotId) -> Self {
        id.0
    }
}
