#![cfg(feature = "serde")]

//! Integration tests for serde support of the envelopes.

use deferrable::collection::{CollectionEnvelope, MapEnvelope, SetEnvelope};
use rstest::rstest;
use std::collections::HashMap;

// =============================================================================
// MapEnvelope
// =============================================================================

#[rstest]
fn test_map_json_roundtrip() {
    let map = MapEnvelope::of([("one".to_string(), 1), ("two".to_string(), 2)]);
    let json = serde_json::to_string(&map).unwrap();
    let restored: MapEnvelope<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
}

#[rstest]
fn test_map_serializes_as_plain_object() {
    let map = MapEnvelope::from_backing(HashMap::from([("key".to_string(), true)]));
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"key":true}"#);
}

#[rstest]
fn test_map_duplicate_keys_keep_last_value() {
    let restored: MapEnvelope<String, i32> =
        serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored["a"], 3);
    assert_eq!(restored["b"], 2);
}

#[rstest]
fn test_map_rejects_non_object() {
    let result: Result<MapEnvelope<String, i32>, _> = serde_json::from_str("[1, 2]");
    assert!(result.is_err());
}

// =============================================================================
// SetEnvelope
// =============================================================================

#[rstest]
fn test_set_json_roundtrip() {
    let set: SetEnvelope<i32> = (1..=5).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: SetEnvelope<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_duplicates_collapse_on_deserialize() {
    let restored: SetEnvelope<String> = serde_json::from_str(r#"["x", "y", "x"]"#).unwrap();
    assert_eq!(restored.len(), 2);
    assert!(restored.contains("x"));
}

// =============================================================================
// CollectionEnvelope
// =============================================================================

#[rstest]
fn test_collection_keeps_order_and_duplicates() {
    let collection: CollectionEnvelope<u8> = vec![3, 1, 3].into();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, "[3,1,3]");

    let restored: CollectionEnvelope<u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(collection, restored);
}

#[rstest]
fn test_nested_envelopes() {
    let inner: CollectionEnvelope<i32> = vec![1, 2].into();
    let outer = MapEnvelope::of([("items".to_string(), inner)]);

    let json = serde_json::to_string(&outer).unwrap();
    let restored: MapEnvelope<String, CollectionEnvelope<i32>> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(restored["items"].as_slice(), &[1, 2]);
}
