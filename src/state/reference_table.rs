use std::collections::HashMap;

use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::models::Reference;

/// Read-only table of reference items, looked up by name.
///
/// Lookups are case-insensitive. A later item with the same name replaces an
/// earlier one but keeps the earlier position, so menus stay in source order.
#[derive(Debug, Clone)]
pub struct ReferenceTable<R> {
    items: Vec<R>,
    /// Lowercase name -> index into `items`.
    index: HashMap<String, usize>,
}

impl<R: Reference> ReferenceTable<R> {
    pub fn new(items: Vec<R>) -> Self {
        let mut table = Self {
            items: Vec::with_capacity(items.len()),
            index: HashMap::new(),
        };

        for item in items {
            let key = item.key();
            match table.index.get(&key) {
                Some(&pos) => {
                    warn!("duplicate reference item '{}', keeping last", item.name());
                    table.items[pos] = item;
                }
                None => {
                    table.index.insert(key, table.items.len());
                    table.items.push(item);
                }
            }
        }

        table
    }

    /// Get an item by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&R> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&pos| &self.items[pos])
    }

    /// Get an item by name, failing with `UnknownReference` if absent.
    pub fn lookup(&self, name: &str) -> Result<&R> {
        self.get(name)
            .ok_or_else(|| TrackerError::UnknownReference(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Item names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.name()).collect()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
