//! In-memory item catalog.
//!
//! Owns the item list loaded at startup and answers read-only queries over
//! it. Nothing here mutates the items after construction.

use std::collections::BTreeSet;
use std::path::Path;

use crate::dataset::load_items;
use crate::error::DatasetError;
use crate::image::{ImageOptions, build_image_url};
use crate::types::Item;

/// Composable filter for [`ItemCatalog::filtered`].
///
/// All set predicates must match. `limit` truncates after filtering;
/// `None` or `Some(0)` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name.
    pub name_contains: Option<String>,
    /// `Some(true)` keeps only items with a variant, `Some(false)` only items without.
    pub has_variant: Option<bool>,
    pub limit: Option<usize>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_contains(mut self, query: impl Into<String>) -> Self {
        self.name_contains = Some(query.into());
        self
    }

    pub fn has_variant(mut self, has_variant: bool) -> Self {
        self.has_variant = Some(has_variant);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read-only catalog over a fixed list of items.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// A catalog with no items; every query returns nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON dataset file.
    pub fn try_load(path: &Path) -> Result<Self, DatasetError> {
        let items = load_items(path)?;
        log::debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self::new(items))
    }

    /// Load a catalog, falling back to an empty one if the file is missing
    /// or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Item dataset unavailable, starting empty: {e}");
                Self::empty()
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the total number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item whose id is, or whose id list contains, `id`.
    pub fn get_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id.contains(id))
    }

    /// Every item whose id is, or whose id list contains, `id`.
    pub fn get_all_by_id(&self, id: u32) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.id.contains(id))
            .collect()
    }

    /// Like [`get_by_id`](Self::get_by_id) for untrusted text input.
    /// Non-numeric or out-of-range text finds nothing.
    pub fn get_by_id_str(&self, id: &str) -> Option<&Item> {
        id.trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.get_by_id(id))
    }

    /// Like [`get_all_by_id`](Self::get_all_by_id) for untrusted text input.
    pub fn get_all_by_id_str(&self, id: &str) -> Vec<&Item> {
        match id.trim().parse::<u32>() {
            Ok(id) => self.get_all_by_id(id),
            Err(_) => Vec::new(),
        }
    }

    /// Case-sensitive exact match on the raw display name.
    pub fn get_by_exact_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Case-insensitive substring search on the display name, in dataset order.
    pub fn search_by_name(&self, query: &str, limit: Option<usize>) -> Vec<&Item> {
        let needle = query.to_lowercase();
        let matches = self
            .items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle));
        take_limit(matches, limit)
    }

    /// Items matching every predicate set on `filter`, in dataset order.
    pub fn filtered(&self, filter: &ItemFilter) -> Vec<&Item> {
        let needle = filter.name_contains.as_ref().map(|q| q.to_lowercase());
        let matches = self.items.iter().filter(|item| {
            if let Some(ref needle) = needle {
                if !item.name.to_lowercase().contains(needle) {
                    return false;
                }
            }
            if let Some(want) = filter.has_variant {
                if item.has_variant() != want {
                    return false;
                }
            }
            true
        });
        take_limit(matches, filter.limit)
    }

    /// Distinct base names, sorted.
    pub fn unique_base_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.base_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All items sharing the given base name, in dataset order.
    pub fn variants_of(&self, base_name: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.base_name == base_name)
            .collect()
    }

    /// Detail-image URL for any item name, whether or not it is in the catalog.
    pub fn image_url_for(&self, name: &str, options: &ImageOptions) -> String {
        build_image_url(name, options)
    }
}

fn take_limit<'a>(iter: impl Iterator<Item = &'a Item>, limit: Option<usize>) -> Vec<&'a Item> {
    match limit {
        Some(n) if n > 0 => iter.take(n).collect(),
        _ => iter.collect(),
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
