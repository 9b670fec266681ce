//! # keyslot-core
//!
//! Bounded registry of values keyed by small, dense, recyclable integer ids.
//!
//! A [`Registry`] owns a fixed range of ids `0..capacity` and a value for
//! each active id. It suits slot tables such as connection tables or
//! fixed-size pools, where callers want cheap integer handles and predictable
//! failure once the handle space is used up.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Registry<T>                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  add(value) ──▶ scan 0..capacity for smallest free id    │
//! │                                                          │
//! │  slots: Vec<Option<T>>                                   │
//! │   ┌─────┬─────┬─────┬─────┐                              │
//! │   │  0  │  1  │  2  │  3  │   len <= capacity            │
//! │   │Some │None │Some │Some │   (never ends in None)       │
//! │   └─────┴─────┴─────┴─────┘                              │
//! │                                                          │
//! │  remove(id) ──▶ slot freed, id reusable by next add      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use keyslot_core::{Registry, RegistryConfig};
//!
//! # fn example() -> keyslot_core::Result<()> {
//! let config = RegistryConfig::builder().capacity(16).build()?;
//! let mut connections = Registry::new(config)?;
//!
//! let id = connections.add("10.0.0.1:4000".to_string())?;
//! assert_eq!(connections.get(id).map(String::as_str), Some("10.0.0.1:4000"));
//!
//! connections.load_with(["10.0.0.2:4000".to_string()], |id, addr| {
//!     println!("{id} -> {addr}");
//! })?;
//!
//! assert_eq!(connections.ids().len(), 2);
//! connections.remove(id);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Dense Allocation**: `add` always returns the smallest free id
//! - **Bounded**: ids stay below the configured capacity (default 128)
//! - **Upsert**: `update` writes any in-range id and marks it active
//! - **Bulk Load**: `load` / `load_with` add a sequence with an optional callback
//! - **Statistics**: lifetime counters and a peak-occupancy mark

mod config;
mod error;
mod id;
mod registry;
mod stats;

pub use config::{
    RegistryConfig, RegistryConfigBuilder, CAPACITY_ENV, DEFAULT_CAPACITY, MAX_CAPACITY,
};
pub use error::{RegistryError, Result};
pub use id::SlotId;
pub use registry::Registry;
pub use stats::RegistryStats;
