//! # Packable Unit Builder
//!
//! Turns catalog records into engine-ready shapes, normalizing every
//! measurement through the shop's [`UnitNormalizer`] exactly once.
//!
//! Units are always built keep-flat: no-tilt packing is requested for every
//! item this packer handles.

use boxpack_core::{
    ContainerDimensions, HasPhysicalMeasurements, PackableContainer, PackableUnit, ShippingBox,
    UnitNormalizer,
};

use crate::error::DimensionIncomplete;

/// Keep-flat flag applied to every built unit.
pub const KEEP_FLAT: bool = true;

/// Builds [`PackableUnit`]s and [`PackableContainer`]s in internal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitBuilder {
    normalizer: UnitNormalizer,
}

impl UnitBuilder {
    /// Create a builder over the given normalizer.
    pub fn new(normalizer: UnitNormalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer in use.
    pub fn normalizer(&self) -> &UnitNormalizer {
        &self.normalizer
    }

    /// Build a unit from a record.
    ///
    /// Unless `force` is set, a record missing width, length, or depth is
    /// rejected. Forced records are built regardless; missing values become
    /// zero, giving a zero-volume unit the engine still accepts.
    pub fn build_unit<M>(&self, item: &M, force: bool) -> Result<PackableUnit, DimensionIncomplete>
    where
        M: HasPhysicalMeasurements + ?Sized,
    {
        if !force && !item.has_complete_dimensions() {
            return Err(DimensionIncomplete {
                description: item.describe().to_string(),
            });
        }
        Ok(self.build_forced(item))
    }

    /// Build a unit without the dimension check. Never fails.
    pub fn build_forced<M>(&self, item: &M) -> PackableUnit
    where
        M: HasPhysicalMeasurements + ?Sized,
    {
        PackableUnit::new(
            item.describe().to_string(),
            self.normalizer.to_mm(item.width()),
            self.normalizer.to_mm(item.length()),
            self.normalizer.to_mm(item.depth()),
            self.normalizer.to_grams(item.weight()),
            KEEP_FLAT,
        )
    }

    /// Build a container from a catalog box. Never fails.
    pub fn build_container(&self, shipping_box: &ShippingBox) -> PackableContainer {
        let n = &self.normalizer;
        let dims = ContainerDimensions {
            outer_width: n.to_mm(&shipping_box.width),
            outer_length: n.to_mm(&shipping_box.length),
            outer_depth: n.to_mm(&shipping_box.depth),
            inner_width: n.to_mm(shipping_box.effective_inner_width()),
            inner_length: n.to_mm(shipping_box.effective_inner_length()),
            inner_depth: n.to_mm(shipping_box.effective_inner_depth()),
        };
        PackableContainer::new(
            shipping_box.name.clone(),
            dims,
            n.to_grams(&shipping_box.empty_weight),
            n.to_grams(&shipping_box.max_weight),
        )
    }
}
