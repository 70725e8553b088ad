use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FieldAccess, TableId};

fn default_schema_version() -> u32 {
    crate::SCHEMA_VERSION
}

/// Errors raised when importing a [`FieldStore`] snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// Sparse text storage for every worksheet field.
///
/// Only non-empty values are stored: writing `""` removes the entry, so an absent key and an
/// empty field are the same thing. Values are kept exactly as written; parsing is the reader's
/// job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStore {
    /// Serialization schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    tables: BTreeMap<TableId, BTreeMap<String, String>>,
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            schema_version: crate::SCHEMA_VERSION,
            tables: BTreeMap::new(),
        }
    }

    pub fn get(&self, table: TableId, name: &str) -> Option<&str> {
        self.tables
            .get(&table)
            .and_then(|fields| fields.get(name))
            .map(String::as_str)
    }

    pub fn set(&mut self, table: TableId, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.clear(table, name);
            return;
        }
        self.tables
            .entry(table)
            .or_default()
            .insert(name.to_string(), value);
    }

    pub fn clear(&mut self, table: TableId, name: &str) {
        if let Some(fields) = self.tables.get_mut(&table) {
            fields.remove(name);
            if fields.is_empty() {
                self.tables.remove(&table);
            }
        }
    }

    /// Clear a fixed list of fields, e.g. when a page is reset.
    pub fn clear_fields(&mut self, table: TableId, names: &[&str]) {
        for name in names {
            self.clear(table, name);
        }
    }

    /// Number of stored (non-empty) fields across all tables.
    pub fn field_count(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Stored fields of one table in name order.
    pub fn table_fields(&self, table: TableId) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tables
            .get(&table)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a snapshot produced by [`FieldStore::to_json`] (or by any collaborator writing the
    /// same shape). Blank values are dropped so the sparse invariant holds after import.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let mut store: FieldStore = serde_json::from_str(json)?;
        if store.schema_version > crate::SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedSchema {
                found: store.schema_version,
                supported: crate::SCHEMA_VERSION,
            });
        }

        let before = store.field_count();
        for fields in store.tables.values_mut() {
            fields.retain(|_, value| !value.is_empty());
        }
        store.tables.retain(|_, fields| !fields.is_empty());
        let dropped = before - store.field_count();
        if dropped > 0 {
            log::warn!("dropped {dropped} blank field(s) while importing snapshot");
        }

        store.schema_version = crate::SCHEMA_VERSION;
        Ok(store)
    }
}

impl FieldAccess for FieldStore {
    fn field(&self, table: TableId, name: &str) -> Option<&str> {
        self.get(table, name)
    }

    fn update_field(&mut self, table: TableId, name: &str, value: &str) {
        self.set(table, name, value);
    }
}
