//! Bounded registry handing out dense, recyclable slot ids.
//!
//! The registry stores values of a single type `T` in a slot table indexed
//! directly by [`SlotId`]. Allocation always picks the smallest free id in
//! `0..capacity`, so live ids stay clustered near zero and a released id is
//! the first candidate for the next [`add`](Registry::add).
//!
//! # Example
//!
//! ```
//! use keyslot_core::{Registry, RegistryError, SlotId};
//!
//! let mut registry = Registry::with_capacity(2)?;
//! let a = registry.add("alpha")?;
//! let b = registry.add("beta")?;
//! assert_eq!((a, b), (SlotId::new(0), SlotId::new(1)));
//!
//! // Full: the error carries the configured capacity
//! assert_eq!(
//!     registry.add("gamma"),
//!     Err(RegistryError::CapacityExhausted { capacity: 2 })
//! );
//!
//! // Releasing an id makes it the next one handed out
//! assert_eq!(registry.remove(a), Some("alpha"));
//! assert_eq!(registry.add("gamma")?, a);
//! # Ok::<(), RegistryError>(())
//! ```

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::id::SlotId;
use crate::stats::RegistryStats;

/// Capacity-bounded table of values keyed by small integer ids.
///
/// # Thread Safety
///
/// `Registry` does no internal locking. The free-id scan and the insertion
/// that follows must happen as one step, so shared use needs external
/// serialization (a single owner, or a `Mutex<Registry<T>>`).
#[derive(Debug, Clone)]
pub struct Registry<T> {
    /// Slot table; `Some` marks an active id. Never longer than the capacity
    /// and never ends in an empty slot.
    slots: Vec<Option<T>>,
    /// Number of active ids.
    len: usize,
    config: RegistryConfig,
    stats: RegistryStats,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::from_valid_config(RegistryConfig::default())
    }
}

impl<T> Registry<T> {
    /// Create an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidCapacity`] if the capacity is zero or
    /// above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Create an empty registry accepting ids in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(RegistryConfig { capacity })
    }

    fn from_valid_config(config: RegistryConfig) -> Self {
        tracing::info!(capacity = config.capacity, "Creating registry");
        Self {
            slots: Vec::new(),
            len: 0,
            config,
            stats: RegistryStats::default(),
        }
    }

    /// Get the registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Exclusive upper bound on ids.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of active ids.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no id is active.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every id in `0..capacity` is active.
    pub fn is_full(&self) -> bool {
        self.len >= self.config.capacity
    }

    /// Get the registry statistics.
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Store `value` under the smallest free id and return that id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExhausted`] when all ids are active.
    /// No id is registered in that case.
    pub fn add(&mut self, value: T) -> Result<SlotId> {
        self.allocate(value).map(|(id, _)| id)
    }

    /// Look up the value stored under `id`.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Mutable access to the value stored under `id`.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Whether `id` is currently active.
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Store `value` under `id`, replacing any previous value.
    ///
    /// An inactive id inside `0..capacity` becomes active, so a later
    /// [`add`](Self::add) will not hand it out until it is removed again.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdOutOfRange`] if `id >= capacity`; nothing
    /// is stored in that case.
    pub fn update(&mut self, id: SlotId, value: T) -> Result<SlotId> {
        let index = id.index();
        if index >= self.config.capacity {
            tracing::warn!(
                slot_id = %id,
                capacity = self.config.capacity,
                "Rejected update outside registry range"
            );
            return Err(RegistryError::IdOutOfRange {
                id,
                capacity: self.config.capacity,
            });
        }

        if let Some(Some(slot)) = self.slots.get_mut(index) {
            *slot = value;
            tracing::debug!(slot_id = %id, "Slot updated");
            return Ok(id);
        }

        self.occupy(index, value);
        tracing::debug!(slot_id = %id, len = self.len, "Slot activated by update");
        Ok(id)
    }

    /// Release `id`, returning the value it held.
    ///
    /// Returns `None` and changes nothing if `id` is not active.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.index())?.take()?;
        self.len -= 1;
        self.stats.record_releases(1);

        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }

        tracing::debug!(slot_id = %id, len = self.len, "Slot released");
        Some(value)
    }

    /// Release every id. The capacity is unchanged.
    pub fn clear(&mut self) {
        let released = self.len;
        self.slots.clear();
        self.len = 0;
        self.stats.record_releases(released);

        if released > 0 {
            tracing::debug!(released, "Registry cleared");
        }
    }

    /// Snapshot of the active ids, in ascending order.
    ///
    /// The returned vector is independent of the registry.
    pub fn ids(&self) -> Vec<SlotId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Iterate over active `(id, value)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (SlotId::new(index), value)))
    }

    /// Add each value in iteration order, returning the assigned ids.
    ///
    /// # Errors
    ///
    /// Stops at the first [`RegistryError::CapacityExhausted`]. Values added
    /// before the failure stay registered.
    pub fn load<I>(&mut self, values: I) -> Result<Vec<SlotId>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut ids = Vec::new();
        self.load_with(values, |id, _| ids.push(id))?;
        Ok(ids)
    }

    /// Add each value in iteration order, calling `on_each` with the
    /// assigned id and the stored value after every successful addition.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with<I, F>(&mut self, values: I, mut on_each: F) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(SlotId, &T),
    {
        for value in values {
            let (id, stored) = self.allocate(value)?;
            on_each(id, stored);
        }
        Ok(())
    }

    /// Smallest id in `0..capacity` that is not active.
    fn next_free(&self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        // With no holes the table is exactly `len` long, which is below
        // capacity here, so the next index past the end is free.
        self.slots
            .iter()
            .position(Option::is_none)
            .or(Some(self.slots.len()))
    }

    fn allocate(&mut self, value: T) -> Result<(SlotId, &T)> {
        let Some(index) = self.next_free() else {
            self.stats.record_exhaustion();
            tracing::warn!(
                capacity = self.config.capacity,
                "Registry capacity exhausted"
            );
            return Err(RegistryError::CapacityExhausted {
                capacity: self.config.capacity,
            });
        };

        let id = SlotId::new(index);
        tracing::debug!(slot_id = %id, len = self.len + 1, "Slot allocated");
        let stored: &T = self.occupy(index, value);
        Ok((id, stored))
    }

    /// Fill the empty slot at `index`, growing the table if needed.
    fn occupy(&mut self, index: usize, value: T) -> &mut T {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.len += 1;
        self.stats.record_allocation(self.len);

        let slot = &mut self.slots[index];
        debug_assert!(slot.is_none(), "occupying an active slot: {index}");
        slot.insert(value)
    }
}
