//! # boxpack-core — Foundational Types for Shipment Packing
//!
//! Defines the records the packer reads, the unit system it normalizes into,
//! and the engine-ready shapes it produces. Every other crate in the
//! workspace depends on `boxpack-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One internal unit pair.** Every [`PackableUnit`] and
//!    [`PackableContainer`] carries millimeters and grams. Conversion happens
//!    once, at construction, through [`UnitNormalizer`].
//!
//! 2. **Raw measurements stay raw.** Records keep whatever the shop stored
//!    as a [`RawMeasure`]; interpretation (numeric parsing, the zero
//!    sentinel) lives in one place.
//!
//! 3. **One measurement interface.** Order lines and extra options are read
//!    through [`HasPhysicalMeasurements`]; the axis relabeling (record depth
//!    → unit length, record height → unit depth) is fixed in the impls.
//!
//! 4. **Precomputed volumes.** A shape's volume is the product of its own
//!    normalized dimensions, fixed at construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `boxpack-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod measure;
pub mod record;
pub mod shape;
pub mod units;

// Re-export primary types for ergonomic imports.
pub use config::{ShippingConfigProvider, ShippingParams};
pub use error::{CatalogError, ConfigError};
pub use measure::{Describable, HasPhysicalMeasurements, RawMeasure};
pub use record::{AuxiliaryItem, Product, ShipmentItem, ShippingBox};
pub use shape::{ContainerDimensions, PackableContainer, PackableUnit};
pub use units::{
    to_internal_length, to_internal_weight, LengthUnit, UnitNormalizer, WeightUnit,
};
