//! # Error Types
//!
//! Dimension defects are recovered per item into an [`UnpackableSet`]; only
//! the aggregate crosses the packer boundary, as
//! [`PackError::IncompleteDimensions`]. Engine failures pass through
//! unchanged.

use boxpack_core::CatalogError;
use thiserror::Error;

use crate::unpackable::UnpackableSet;

/// A shippable record lacks width, length, or depth.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("incomplete dimensions for {description}")]
pub struct DimensionIncomplete {
    /// Description of the record that was rejected.
    pub description: String,
}

/// Run-level packing failure.
#[derive(Error, Debug)]
pub enum PackError<E: std::error::Error + 'static> {
    /// One or more shippable items lack valid dimensions. No partial result
    /// exists; the whole run was aborted before reaching the engine.
    #[error(
        "packing failed: {} item(s) did not have valid width, length, and depth dimensions",
        unpackable.len()
    )]
    IncompleteDimensions {
        /// The rejected items, keyed by SKU.
        unpackable: UnpackableSet,
    },

    /// The box catalog could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The packing engine failed.
    #[error("packing engine failed: {0}")]
    Engine(#[source] E),
}

impl<E: std::error::Error + 'static> PackError<E> {
    /// Items rejected for incomplete dimensions, when that is why the run
    /// failed.
    pub fn unpackable_items(&self) -> Option<&UnpackableSet> {
        match self {
            PackError::IncompleteDimensions { unpackable } => Some(unpackable),
            _ => None,
        }
    }
}
