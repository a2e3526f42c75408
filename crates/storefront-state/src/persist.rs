//! # Persistence Collaborator
//!
//! The engine does not own a storage mechanism; it talks to a
//! [`CollectionStore`] that keeps one JSON document per logical key
//! (`"cart"`, `"products"`, `"coupons"`).
//!
//! ## Contract
//! - Saving an empty collection removes the key instead of storing `[]`
//! - Loading a missing or unparseable document falls back to the caller's
//!   initial dataset - the stores never see invalid records

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Logical key for the persisted cart lines.
pub const CART_KEY: &str = "cart";
/// Logical key for the persisted product catalog.
pub const PRODUCTS_KEY: &str = "products";
/// Logical key for the persisted coupon list.
pub const COUPONS_KEY: &str = "coupons";

/// A keyed JSON-document store supplied by the host application.
pub trait CollectionStore {
    /// Returns the stored document for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Stores `json` under `key`, replacing any previous document.
    fn save(&self, key: &str, json: &str);

    /// Removes the document for `key`, if present.
    fn remove(&self, key: &str);
}

/// Loads a collection, falling back to `initial` when the document is
/// missing or does not parse.
pub fn load_collection<T>(store: &dyn CollectionStore, key: &str, initial: &[T]) -> Vec<T>
where
    T: DeserializeOwned + Clone,
{
    match store.load(key) {
        Some(json) => match serde_json::from_str(&json) {
            Ok(items) => items,
            Err(err) => {
                warn!(%key, %err, "stored collection unparseable, using initial dataset");
                initial.to_vec()
            }
        },
        None => initial.to_vec(),
    }
}

/// Saves a collection; an empty collection removes the key.
pub fn save_collection<T>(
    store: &dyn CollectionStore,
    key: &str,
    items: &[T],
) -> serde_json::Result<()>
where
    T: Serialize,
{
    if items.is_empty() {
        store.remove(key);
        return Ok(());
    }

    let json = serde_json::to_string(items)?;
    store.save(key, &json);
    Ok(())
}

/// In-memory [`CollectionStore`] for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .contains_key(key)
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, json: &str) {
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), json.to_string());
    }

    fn remove(&self, key: &str) {
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_coupons;
    use storefront_core::Coupon;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let coupons = seed_coupons();

        save_collection(&store, COUPONS_KEY, &coupons).unwrap();
        let loaded: Vec<Coupon> = load_collection(&store, COUPONS_KEY, &[]);

        assert_eq!(loaded, coupons);
    }

    #[test]
    fn test_empty_collection_removes_key() {
        let store = MemoryStore::new();
        save_collection(&store, COUPONS_KEY, &seed_coupons()).unwrap();
        assert!(store.contains(COUPONS_KEY));

        save_collection::<Coupon>(&store, COUPONS_KEY, &[]).unwrap();
        assert!(!store.contains(COUPONS_KEY));
    }

    #[test]
    fn test_missing_key_falls_back_to_initial() {
        let store = MemoryStore::new();
        let initial = seed_coupons();

        let loaded: Vec<Coupon> = load_collection(&store, COUPONS_KEY, &initial);
        assert_eq!(loaded, initial);
    }

    #[test]
    fn test_unparseable_document_falls_back_to_initial() {
        let store = MemoryStore::new();
        store.save(COUPONS_KEY, "not json at all {");

        let initial = seed_coupons();
        let loaded: Vec<Coupon> = load_collection(&store, COUPONS_KEY, &initial);
        assert_eq!(loaded, initial);
    }
}
