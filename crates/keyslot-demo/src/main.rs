//! keyslot demo entry point.
//!
//! Loads every positional argument into a fresh registry and prints the
//! resulting id table as JSON on stdout. Logs go to stderr.
//!
//! ```text
//! $ KEYSLOT_CAPACITY=4 keyslot-demo alpha beta
//! {"capacity":4,"slots":[{"id":0,"value":"alpha"},{"id":1,"value":"beta"}]}
//! ```

use keyslot_core::{Registry, RegistryConfig, SlotId};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One active registry entry.
#[derive(Debug, Serialize)]
struct SlotEntry<'a> {
    id: SlotId,
    value: &'a str,
}

/// Snapshot printed on stdout.
#[derive(Debug, Serialize)]
struct Report<'a> {
    capacity: usize,
    slots: Vec<SlotEntry<'a>>,
}

impl<'a> Report<'a> {
    fn from_registry(registry: &'a Registry<String>) -> Self {
        Self {
            capacity: registry.capacity(),
            slots: registry
                .iter()
                .map(|(id, value)| SlotEntry {
                    id,
                    value: value.as_str(),
                })
                .collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("keyslot=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RegistryConfig::from_env();
    tracing::info!(?config, "Configuration loaded");

    let mut registry = Registry::new(config)?;
    registry.load_with(std::env::args().skip(1), |id, value| {
        tracing::info!(slot_id = %id, value = %value, "Loaded value");
    })?;

    let stats = registry.stats();
    tracing::info!(
        loaded = stats.allocations(),
        peak = stats.peak(),
        "Registry ready"
    );

    println!("{}", serde_json::to_string(&Report::from_registry(&registry))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let mut registry = Registry::with_capacity(4).unwrap();
        registry
            .load(["alpha".to_string(), "beta".to_string()])
            .unwrap();
        registry.remove(SlotId::new(0));

        let json = serde_json::to_string(&Report::from_registry(&registry)).unwrap();
        assert_eq!(json, r#"{"capacity":4,"slots":[{"id":1,"value":"beta"}]}"#);
    }
}
