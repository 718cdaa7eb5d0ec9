//! # Packing Engine Trait
//!
//! Defines the narrow interface the packer drives. Implementations own all
//! placement decisions; the packer only composes inputs and forwards the
//! result.
//!
//! ## Invariant
//!
//! `pack` consumes the engine. State accumulated by `add_box`/`add_item`
//! cannot leak into another run.

use boxpack_core::{PackableContainer, PackableUnit};

/// A 3D bin-packing engine.
pub trait PackingEngine {
    /// Packed-box result. Opaque to the packer.
    type Packed;
    /// Engine failure, propagated to the caller unchanged.
    type Error: std::error::Error + 'static;

    /// Offer a candidate box.
    fn add_box(&mut self, container: PackableContainer);

    /// Submit one unit. `force` marks units that must ship even without
    /// complete dimensions.
    fn add_item(&mut self, unit: PackableUnit, force: bool);

    /// Pack all submitted units into the submitted boxes.
    fn pack(self) -> Result<Self::Packed, Self::Error>;
}
