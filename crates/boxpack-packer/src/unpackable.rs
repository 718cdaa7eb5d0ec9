//! # Unpackable Tracking
//!
//! Collects shippable order lines that could not be turned into packable
//! units. A set is built fresh for every run and belongs to that run alone.
//! It is never partially consumed: if it is non-empty after expansion, the
//! run aborts before the engine sees anything.

use std::collections::BTreeMap;

use boxpack_core::ShipmentItem;

use crate::error::PackError;

/// Rejected order lines, keyed by SKU.
///
/// A repeated SKU replaces the earlier entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnpackableSet {
    items: BTreeMap<String, ShipmentItem>,
}

impl UnpackableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected line under its SKU.
    pub fn insert(&mut self, item: &ShipmentItem) {
        self.items.insert(item.sku.clone(), item.clone());
    }

    /// Number of distinct SKUs rejected.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The rejected line for `sku`, if any.
    pub fn get(&self, sku: &str) -> Option<&ShipmentItem> {
        self.items.get(sku)
    }

    /// Whether `sku` was rejected.
    pub fn contains(&self, sku: &str) -> bool {
        self.items.contains_key(sku)
    }

    /// Rejected SKUs in sorted order.
    pub fn skus(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Fail the run when anything was rejected.
    pub fn check_and_abort<E: std::error::Error + 'static>(self) -> Result<(), PackError<E>> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PackError::IncompleteDimensions { unpackable: self })
        }
    }
}
