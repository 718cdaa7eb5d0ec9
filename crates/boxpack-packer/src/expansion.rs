//! # Eligibility & Expansion
//!
//! Walks a shipment's order lines in their original order and produces the
//! flat sequence of units submitted to the engine:
//!
//! 1. A shippable line is built once. On success it contributes `quantity`
//!    independent units; on rejection it is recorded in the run's
//!    [`UnpackableSet`] and contributes none.
//! 2. Every extra option on a line, shippable or not, is built forced and
//!    always contributes one unit. Extras are never rejected.
//! 3. Non-shippable lines never contribute rejections.
//!
//! Expansion never fails. Whether the run may proceed is decided afterwards
//! from the returned [`Expansion`].

use boxpack_core::{PackableUnit, ShipmentItem};

use crate::builder::UnitBuilder;
use crate::unpackable::UnpackableSet;

/// One unit to submit, with the force flag it is submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedUnit {
    /// The engine-ready unit.
    pub unit: PackableUnit,
    /// True for extra options, which ship even without dimensions.
    pub force: bool,
}

/// The outcome of expanding one shipment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expansion {
    units: Vec<ExpandedUnit>,
    unpackable: UnpackableSet,
}

impl Expansion {
    /// Units in submission order.
    pub fn units(&self) -> &[ExpandedUnit] {
        &self.units
    }

    /// Shippable lines rejected for incomplete dimensions.
    pub fn unpackable_items(&self) -> &UnpackableSet {
        &self.unpackable
    }

    /// True when no line was rejected.
    pub fn is_packable(&self) -> bool {
        self.unpackable.is_empty()
    }

    /// Split into units and rejects.
    pub fn into_parts(self) -> (Vec<ExpandedUnit>, UnpackableSet) {
        (self.units, self.unpackable)
    }
}

/// Expand a shipment into engine-ready units.
pub fn expand(items: &[ShipmentItem], builder: &UnitBuilder) -> Expansion {
    let mut expansion = Expansion::default();

    for item in items {
        if item.is_shippable() {
            match builder.build_unit(item, false) {
                Ok(unit) => {
                    let copies = item.quantity as usize;
                    expansion.units.extend(
                        std::iter::repeat(unit)
                            .take(copies)
                            .map(|unit| ExpandedUnit { unit, force: false }),
                    );
                }
                Err(rejected) => {
                    tracing::warn!(
                        sku = %item.sku,
                        error = %rejected,
                        "shippable item has no valid dimensions; marking unpackable"
                    );
                    expansion.unpackable.insert(item);
                }
            }
        }

        expansion
            .units
            .extend(item.auxiliary_items.iter().map(|extra| ExpandedUnit {
                unit: builder.build_forced(extra),
                force: true,
            }));
    }

    tracing::debug!(
        lines = items.len(),
        units = expansion.units.len(),
        unpackable = expansion.unpackable.len(),
        "expanded shipment"
    );
    expansion
}
