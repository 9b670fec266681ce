//! Behavioral tests for the registry's public API.

use keyslot_core::{Registry, RegistryError, SlotId, MAX_CAPACITY};

fn ids(raw: &[usize]) -> Vec<SlotId> {
    raw.iter().copied().map(SlotId::from).collect()
}

#[test]
fn test_add_then_get_round_trips() {
    let mut registry = Registry::default();
    let id = registry.add(String::from("socket-a")).unwrap();

    assert_eq!(registry.get(id).map(String::as_str), Some("socket-a"));
    assert!(registry.contains(id));
}

#[test]
fn test_add_hands_out_ids_in_order() {
    let mut registry = Registry::with_capacity(8).unwrap();
    for expected in 0..8 {
        assert_eq!(registry.add(expected).unwrap(), SlotId::new(expected));
    }
}

#[test]
fn test_removed_id_is_reused_first() {
    let mut registry = Registry::with_capacity(16).unwrap();
    registry.load(0..5).unwrap();

    assert_eq!(registry.remove(SlotId::new(2)), Some(2));
    assert_eq!(registry.add(99).unwrap(), SlotId::new(2));
    assert_eq!(registry.add(100).unwrap(), SlotId::new(5));
}

#[test]
fn test_smallest_of_several_holes_is_reused() {
    let mut registry = Registry::with_capacity(16).unwrap();
    registry.load(0..6).unwrap();
    registry.remove(SlotId::new(4));
    registry.remove(SlotId::new(1));

    assert_eq!(registry.add(0).unwrap(), SlotId::new(1));
    assert_eq!(registry.add(0).unwrap(), SlotId::new(4));
}

#[test]
fn test_exhaustion_and_recovery() {
    let mut registry = Registry::with_capacity(2).unwrap();
    let first = registry.add("a").unwrap();
    let second = registry.add("b").unwrap();

    let err = registry.add("c").unwrap_err();
    assert_eq!(err, RegistryError::CapacityExhausted { capacity: 2 });
    assert_eq!(err.capacity(), Some(2));
    assert_eq!(registry.len(), 2);

    assert_eq!(registry.remove(second), Some("b"));
    assert_eq!(registry.add("c").unwrap(), second);
    assert_eq!(registry.get(first), Some(&"a"));
}

#[test]
fn test_get_and_remove_on_inactive_id_are_absent() {
    let mut registry: Registry<u32> = Registry::with_capacity(4).unwrap();

    assert_eq!(registry.get(SlotId::new(0)), None);
    assert_eq!(registry.get(SlotId::new(1000)), None);
    assert!(!registry.contains(SlotId::new(3)));
    assert_eq!(registry.remove(SlotId::new(1)), None);
    assert_eq!(registry.stats().releases(), 0);
}

#[test]
fn test_remove_twice_returns_absent_second_time() {
    let mut registry = Registry::with_capacity(4).unwrap();
    let id = registry.add(7u8).unwrap();

    assert_eq!(registry.remove(id), Some(7));
    assert_eq!(registry.remove(id), None);
    assert!(registry.is_empty());
}

#[test]
fn test_clear_is_idempotent() {
    let mut registry = Registry::with_capacity(4).unwrap();
    registry.load(["a", "b", "c"]).unwrap();

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.ids().is_empty());

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.ids().is_empty());
    assert_eq!(registry.capacity(), 4);

    // Numbering restarts from zero
    assert_eq!(registry.add("d").unwrap(), SlotId::new(0));
}

#[test]
fn test_ids_snapshot_is_isolated() {
    let mut registry = Registry::with_capacity(8).unwrap();
    registry.load(["a", "b", "c"]).unwrap();

    let mut snapshot = registry.ids();
    snapshot.clear();
    snapshot.push(SlotId::new(7));

    assert_eq!(registry.ids(), ids(&[0, 1, 2]));
}

#[test]
fn test_ids_reflect_removals() {
    let mut registry = Registry::with_capacity(8).unwrap();
    registry.load(["a", "b", "c", "d"]).unwrap();
    registry.remove(SlotId::new(1));

    let mut active = registry.ids();
    active.sort();
    assert_eq!(active, ids(&[0, 2, 3]));
}

#[test]
fn test_load_with_reports_each_assignment() {
    let mut registry = Registry::with_capacity(3).unwrap();
    let mut seen = Vec::new();

    registry
        .load_with(["a", "b", "c"], |id, value| seen.push((id, *value)))
        .unwrap();

    assert_eq!(
        seen,
        vec![
            (SlotId::new(0), "a"),
            (SlotId::new(1), "b"),
            (SlotId::new(2), "c"),
        ]
    );
}

#[test]
fn test_load_fills_holes_first() {
    let mut registry = Registry::with_capacity(8).unwrap();
    registry.load(["a", "b", "c"]).unwrap();
    registry.remove(SlotId::new(1));

    let assigned = registry.load(["x", "y"]).unwrap();
    assert_eq!(assigned, ids(&[1, 3]));
}

#[test]
fn test_load_stops_at_exhaustion_without_rollback() {
    let mut registry = Registry::with_capacity(2).unwrap();
    let mut calls = 0;

    let result = registry.load_with(["a", "b", "c", "d"], |_, _| calls += 1);

    assert_eq!(result, Err(RegistryError::CapacityExhausted { capacity: 2 }));
    assert_eq!(calls, 2);
    assert_eq!(registry.ids(), ids(&[0, 1]));
    assert_eq!(registry.get(SlotId::new(1)), Some(&"b"));
}

#[test]
fn test_update_inactive_id_marks_it_active() {
    let mut registry = Registry::with_capacity(4).unwrap();

    assert_eq!(registry.update(SlotId::new(2), "late"), Ok(SlotId::new(2)));
    assert!(registry.contains(SlotId::new(2)));
    assert_eq!(registry.ids(), ids(&[2]));

    // The upserted id is skipped by allocation
    registry.load(["a", "b", "c"]).unwrap();
    assert_eq!(registry.ids(), ids(&[0, 1, 2, 3]));
    assert_eq!(registry.get(SlotId::new(3)), Some(&"c"));
}

#[test]
fn test_update_outside_capacity_fails() {
    let mut registry = Registry::with_capacity(4).unwrap();
    let result = registry.update(SlotId::new(4), 1u8);

    assert!(matches!(
        result,
        Err(RegistryError::IdOutOfRange { capacity: 4, .. })
    ));
    assert!(!registry.contains(SlotId::new(4)));
    assert!(registry.is_empty());
}

#[test]
fn test_values_are_generic() {
    #[derive(Debug, PartialEq)]
    struct Conn {
        peer: &'static str,
        open: bool,
    }

    let mut registry = Registry::with_capacity(4).unwrap();
    let id = registry
        .add(Conn {
            peer: "db",
            open: true,
        })
        .unwrap();

    if let Some(conn) = registry.get_mut(id) {
        conn.open = false;
    }

    assert_eq!(
        registry.remove(id),
        Some(Conn {
            peer: "db",
            open: false
        })
    );
}

#[test]
fn test_capacity_above_maximum_is_rejected() {
    assert_eq!(
        Registry::<u8>::with_capacity(usize::MAX).unwrap_err(),
        RegistryError::InvalidCapacity(usize::MAX)
    );
    assert!(Registry::<u8>::with_capacity(MAX_CAPACITY + 1).is_err());
}

#[test]
fn test_update_near_top_of_large_capacity() {
    let mut registry = Registry::with_capacity(MAX_CAPACITY).unwrap();
    let top = SlotId::new(MAX_CAPACITY - 1);

    assert_eq!(registry.update(top, 7u8), Ok(top));
    assert_eq!(registry.ids(), vec![top]);
    assert_eq!(registry.add(1).unwrap(), SlotId::new(0));
    assert!(matches!(
        registry.update(SlotId::new(MAX_CAPACITY), 9),
        Err(RegistryError::IdOutOfRange { capacity: MAX_CAPACITY, .. })
    ));
}
