use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::Deserialize;
use swapper_core::ConfigStore;

/// Values as they may appear in hand-written JSON; stored as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JsonPrimitive {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl JsonPrimitive {
    pub fn into_config_string(self) -> String {
        match self {
            JsonPrimitive::String(s) => s,
            JsonPrimitive::Int(i) => i.to_string(),
            JsonPrimitive::Bool(b) => b.to_string(),
            JsonPrimitive::Float(f) => f.to_string(),
        }
    }
}

/// Flat `group.key` → value file standing in for the host's configuration
/// manager.
#[derive(Debug, Default)]
pub struct JsonConfigStore {
    values: RwLock<BTreeMap<String, String>>,
    dirty: AtomicBool,
    backing_path: Option<PathBuf>,
}

impl JsonConfigStore {
    pub fn from_json_file(path: Option<&Path>) -> Result<Self> {
        let store = JsonConfigStore {
            backing_path: path.map(Path::to_path_buf),
            ..JsonConfigStore::default()
        };
        if let Some(p) = path {
            if p.exists() {
                let raw = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config store: {}", p.display()))?;
                let map: BTreeMap<String, JsonPrimitive> = serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse config store json: {}", p.display()))?;
                store.write().extend(
                    map.into_iter()
                        .map(|(key, value)| (key, value.into_config_string())),
                );
            }
        }
        Ok(store)
    }

    pub fn entries(&self) -> BTreeMap<String, String> {
        self.read().clone()
    }

    /// Entries of one group with the group prefix stripped.
    pub fn group(&self, group: &str) -> BTreeMap<String, String> {
        let prefix = format!("{group}.");
        self.read()
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|key| (key.to_string(), value.clone()))
            })
            .collect()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = self.backing_path.as_ref() else {
            self.dirty.store(false, Ordering::Relaxed);
            return Ok(());
        };
        if !self.is_dirty() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create config store directory: {}", parent.display())
                })?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.entries())
            .with_context(|| format!("failed to serialize config store: {}", path.display()))?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write config store: {}", path.display()))?;
        self.dirty.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for JsonConfigStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.read().get(&format!("{group}.{key}")).cloned()
    }

    fn set(&self, group: &str, key: &str, value: &str) {
        let previous = self
            .write()
            .insert(format!("{group}.{key}"), value.to_string());
        if previous.as_deref() != Some(value) {
            self.dirty.store(true, Ordering::Relaxed);
        }
    }

    fn unset(&self, group: &str, key: &str) {
        if self.write().remove(&format!("{group}.{key}")).is_some() {
            self.dirty.store(true, Ordering::Relaxed);
        }
    }
}
