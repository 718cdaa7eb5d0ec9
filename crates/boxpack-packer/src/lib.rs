//! # boxpack-packer — Shipment Packing Orchestrator
//!
//! Sits between a raw shipment item list and a 3D bin-packing engine. It
//! normalizes measurements, decides which lines take part in packing,
//! expands quantities and extra options into individual units, and refuses
//! to pack shipments with dimension-incomplete items rather than silently
//! dropping them.
//!
//! ## Components
//!
//! - **Builder** (`builder.rs`): records → [`PackableUnit`]s and
//!   [`PackableContainer`]s in mm and grams.
//! - **Expansion** (`expansion.rs`): eligibility, quantity expansion, and
//!   forced inclusion of extra options.
//! - **Unpackable tracking** (`unpackable.rs`): per-run reject set and the
//!   abort check.
//! - **Packer** (`packer.rs`): the [`BoxPacker`] facade.
//! - **Volume** (`volume.rs`): reported-volume totals, independent of the
//!   packing path.
//!
//! ## Example
//!
//! ```
//! use boxpack_core::{LengthUnit, ShippingParams, WeightUnit};
//! use boxpack_engine::RecordingEngine;
//! use boxpack_packer::{BoxPacker, PackOutcome};
//!
//! let packer = BoxPacker::new(ShippingParams::new(LengthUnit::Centimeters, WeightUnit::Kilograms));
//! let outcome = packer.pack(RecordingEngine::new(), &[], None).unwrap();
//! assert_eq!(outcome, PackOutcome::NoBoxesAvailable);
//! ```
//!
//! [`PackableUnit`]: boxpack_core::PackableUnit
//! [`PackableContainer`]: boxpack_core::PackableContainer

pub mod builder;
pub mod error;
pub mod expansion;
pub mod packer;
pub mod unpackable;
pub mod volume;

pub use builder::{UnitBuilder, KEEP_FLAT};
pub use error::{DimensionIncomplete, PackError};
pub use expansion::{expand, ExpandedUnit, Expansion};
pub use packer::{BoxPacker, PackOutcome};
pub use unpackable::UnpackableSet;
pub use volume::total_volume;
