use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::{ConfigStore, ITEM_KEY_PREFIX, SHIFT_CLICK_GROUP};

/// Folds cosmetic and charged variants of an item onto one canonical id.
pub trait ItemVariations: Send + Sync {
    fn map(&self, item_id: i32) -> i32;
}

/// Every item is its own canonical id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariations;

impl ItemVariations for NoVariations {
    fn map(&self, item_id: i32) -> i32 {
        item_id
    }
}

/// Variant id → canonical id; unlisted ids map to themselves.
impl ItemVariations for HashMap<i32, i32> {
    fn map(&self, item_id: i32) -> i32 {
        self.get(&item_id).copied().unwrap_or(item_id)
    }
}

/// Per-item shift-click action overrides persisted in the `shiftclick`
/// group as `item_<canonical id>` → action index.
#[derive(Clone)]
pub struct OverrideStore {
    store: Arc<dyn ConfigStore>,
    variations: Arc<dyn ItemVariations>,
}

impl fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OverrideStore")
    }
}

impl OverrideStore {
    pub fn new(store: Arc<dyn ConfigStore>, variations: Arc<dyn ItemVariations>) -> Self {
        Self { store, variations }
    }

    pub fn key_for(&self, item_id: i32) -> String {
        format!("{ITEM_KEY_PREFIX}{}", self.variations.map(item_id))
    }

    pub fn get(&self, item_id: i32) -> Option<i32> {
        let key = self.key_for(item_id);
        let value = self.store.get(SHIFT_CLICK_GROUP, &key)?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse() {
            Ok(index) => Some(index),
            Err(_) => {
                warn!("ignoring shift-click override {key}={value:?}: not an integer");
                None
            }
        }
    }

    pub fn set(&self, item_id: i32, index: i32) {
        let key = self.key_for(item_id);
        debug!("storing shift-click override {key}={index}");
        self.store.set(SHIFT_CLICK_GROUP, &key, &index.to_string());
    }

    pub fn unset(&self, item_id: i32) {
        let key = self.key_for(item_id);
        debug!("clearing shift-click override {key}");
        self.store.unset(SHIFT_CLICK_GROUP, &key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;

    fn overrides(variations: HashMap<i32, i32>) -> (Arc<MemoryConfigStore>, OverrideStore) {
        let store = Arc::new(MemoryConfigStore::new());
        let overrides = OverrideStore::new(store.clone(), Arc::new(variations));
        (store, overrides)
    }

    #[test]
    fn variants_share_one_key() {
        let (store, overrides) = overrides(HashMap::from([(1706, 1712), (1708, 1712)]));
        overrides.set(1706, 3);
        assert_eq!(overrides.get(1708), Some(3));
        assert_eq!(
            store.get(SHIFT_CLICK_GROUP, "item_1712").as_deref(),
            Some("3")
        );
        overrides.unset(1712);
        assert_eq!(overrides.get(1706), None);
    }

    #[test]
    fn unparseable_value_reads_as_absent() {
        let (store, overrides) = overrides(HashMap::new());
        store.set(SHIFT_CLICK_GROUP, "item_4151", "whip");
        assert_eq!(overrides.get(4151), None);
        store.set(SHIFT_CLICK_GROUP, "item_4151", "-1");
        assert_eq!(overrides.get(4151), Some(-1));
    }
}
