//! Access to the item lists sliders page through.
//!
//! Lists are owned and loaded elsewhere; the core only reads them. A list
//! that has not loaded yet is `None`, which every slider operation treats as
//! an empty list.

use std::collections::HashMap;

use slider_model::ListKey;

use crate::error::Result;

/// Read access to loaded item lists.
pub trait ListCatalog<T> {
    /// The list for `key`, or `None` while it is not loaded.
    fn list(&self, key: &ListKey) -> Option<&[T]>;
}

/// Catalog backed by a map of owned lists.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog<T> {
    lists: HashMap<ListKey, Vec<T>>,
}

impl<T> Default for InMemoryCatalog<T> {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }
}

impl<T> InMemoryCatalog<T> {
    /// Catalog with no lists loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a loaded list, returning the one it replaces.
    pub fn insert(&mut self, key: ListKey, items: Vec<T>) -> Option<Vec<T>> {
        self.lists.insert(key, items)
    }

    /// Store a list under raw route segments.
    pub fn insert_raw(
        &mut self,
        section: &str,
        category: &str,
        items: Vec<T>,
    ) -> Result<Option<Vec<T>>> {
        let key = ListKey::parse(section, category)?;
        Ok(self.insert(key, items))
    }

    /// Drop a list; it reads as not loaded afterwards.
    pub fn remove(&mut self, key: &ListKey) -> Option<Vec<T>> {
        self.lists.remove(key)
    }

    /// Whether a list is stored for `key`, even an empty one.
    pub fn is_loaded(&self, key: &ListKey) -> bool {
        self.lists.contains_key(key)
    }

    /// Number of loaded lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True when no list is loaded.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<T> ListCatalog<T> for InMemoryCatalog<T> {
    fn list(&self, key: &ListKey) -> Option<&[T]> {
        self.lists.get(key).map(Vec::as_slice)
    }
}

/// Look a list up by raw route segments.
///
/// An unknown combination is logged and resolves to no data, the same as a
/// list that has not loaded.
pub fn lookup_raw<'c, T, C>(
    catalog: &'c C,
    section: &str,
    category: &str,
) -> Option<&'c [T]>
where
    C: ListCatalog<T> + ?Sized,
{
    match ListKey::parse(section, category) {
        Ok(key) => catalog.list(&key),
        Err(err) => {
            tracing::warn!(
                section,
                category,
                error = %err,
                "no item list for slider"
            );
            None
        }
    }
}
