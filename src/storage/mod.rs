//! Key-value persistence for the inventory.
//!
//! Each key holds one JSON document. The app uses two keys, [`FOOD_ITEMS_KEY`]
//! and [`RECIPES_KEY`], each storing a JSON array.

pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::core::errors::FoodError;

pub type Result<T> = std::result::Result<T, FoodError>;

pub const FOOD_ITEMS_KEY: &str = "foodItems";
pub const RECIPES_KEY: &str = "recipes";

/// Abstraction over backends that store raw JSON documents by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Reads a JSON array stored under `key`. An absent key yields an empty list.
pub fn read_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw).map_err(|err| {
            FoodError::StorageError(format!("`{key}` holds malformed data: {err}"))
        }),
        _ => Ok(Vec::new()),
    }
}

pub fn write_list<T: Serialize>(store: &dyn KeyValueStore, key: &str, values: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(values)?;
    store.set(key, &json)?;
    tracing::debug!(key, entries = values.len(), "list persisted");
    Ok(())
}

/// Writes `defaults()` under `key` unless the key already exists. Returns whether it seeded.
pub fn seed_if_absent<T, F>(store: &dyn KeyValueStore, key: &str, defaults: F) -> Result<bool>
where
    T: Serialize,
    F: FnOnce() -> Vec<T>,
{
    if store.contains(key)? {
        return Ok(false);
    }
    write_list(store, key, &defaults())?;
    tracing::info!(key, "store seeded with starter data");
    Ok(true)
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_empty_list() {
        let store = MemoryStorage::default();
        let values: Vec<u32> = read_list(&store, "missing").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn malformed_value_is_a_storage_error() {
        let store = MemoryStorage::default();
        store.set(FOOD_ITEMS_KEY, "{not json").unwrap();
        let err = read_list::<u32>(&store, FOOD_ITEMS_KEY).unwrap_err();
        assert!(matches!(err, FoodError::StorageError(_)));
        assert!(err.to_string().contains("foodItems"));
    }

    #[test]
    fn seeding_only_happens_once() {
        let store = MemoryStorage::default();
        assert!(seed_if_absent(&store, RECIPES_KEY, || vec![1u32, 2]).unwrap());
        write_list(&store, RECIPES_KEY, &[7u32]).unwrap();
        assert!(!seed_if_absent(&store, RECIPES_KEY, || vec![1u32, 2]).unwrap());
        let values: Vec<u32> = read_list(&store, RECIPES_KEY).unwrap();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn an_empty_list_still_counts_as_present() {
        let store = MemoryStorage::default();
        write_list::<u32>(&store, FOOD_ITEMS_KEY, &[]).unwrap();
        assert!(!seed_if_absent(&store, FOOD_ITEMS_KEY, || vec![1u32]).unwrap());
    }
}
