//! # First-Fit Reference Engine
//!
//! Assigns units to boxes with a first-fit-decreasing heuristic:
//!
//! 1. Units are ordered by volume, then weight, largest first.
//! 2. Each unit goes into the first open box that still has enough inner
//!    volume and weight allowance, and whose inner dimensions admit the unit
//!    in some allowed orientation.
//! 3. Otherwise a new box is opened, choosing the smallest container type
//!    (by inner volume) that can hold the unit on its own.
//!
//! Capacity is tracked by volume, not by exact 3D placement, so a result is
//! an optimistic assignment rather than a loading plan.
//!
//! ## Orientation
//!
//! Keep-flat units may only rotate about the vertical axis: their depth must
//! fit the box's inner depth. Other units may take any of the six axis-aligned
//! orientations. Forced units skip the orientation check; they still consume
//! volume and weight.
//!
//! ## Weight
//!
//! A container's max weight includes its own empty weight. A max weight of
//! zero means the container has no recorded limit.

use boxpack_core::{PackableContainer, PackableUnit};
use serde::Serialize;
use thiserror::Error;

use crate::traits::PackingEngine;

/// Errors from the reference engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Units were submitted but no containers were.
    #[error("no containers to pack {units} unit(s) into")]
    NoContainers {
        /// Number of units waiting to be packed.
        units: usize,
    },

    /// A unit fits none of the submitted containers.
    #[error("item too large for any box: {description}")]
    ItemTooLarge {
        /// Description of the unit that did not fit.
        description: String,
    },
}

/// One filled box in the packing result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedBox {
    container: PackableContainer,
    items: Vec<PackableUnit>,
    weight: f64,
    used_volume: f64,
}

impl PackedBox {
    fn open(container: PackableContainer) -> Self {
        let weight = container.empty_weight();
        Self {
            container,
            items: Vec::new(),
            weight,
            used_volume: 0.0,
        }
    }

    /// The box type.
    pub fn container(&self) -> &PackableContainer {
        &self.container
    }

    /// Units assigned to this box.
    pub fn items(&self) -> &[PackableUnit] {
        &self.items
    }

    /// Gross weight in g, empty box included.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Inner volume taken by units, in mm³.
    pub fn used_volume(&self) -> f64 {
        self.used_volume
    }

    /// Inner volume still free, in mm³.
    pub fn remaining_volume(&self) -> f64 {
        self.container.inner_volume() - self.used_volume
    }

    /// Fraction of inner volume in use, 0.0 for zero-volume boxes.
    pub fn utilization(&self) -> f64 {
        let inner = self.container.inner_volume();
        if inner > 0.0 {
            self.used_volume / inner
        } else {
            0.0
        }
    }

    fn accepts(&self, unit: &PackableUnit, force: bool) -> bool {
        unit.volume() <= self.remaining_volume()
            && within_weight(&self.container, self.weight + unit.weight())
            && (force || fits_inside(unit, &self.container))
    }

    fn push(&mut self, unit: PackableUnit) {
        self.weight += unit.weight();
        self.used_volume += unit.volume();
        self.items.push(unit);
    }
}

fn within_weight(container: &PackableContainer, gross: f64) -> bool {
    container.max_weight() <= 0.0 || gross <= container.max_weight()
}

/// True when `unit` fits the container's inner dimensions in an allowed
/// orientation.
fn fits_inside(unit: &PackableUnit, container: &PackableContainer) -> bool {
    let inner = (
        container.inner_width(),
        container.inner_length(),
        container.inner_depth(),
    );
    let (w, l, d) = (unit.width(), unit.length(), unit.depth());
    let upright = [(w, l, d), (l, w, d)];
    let tilted = [(w, d, l), (d, w, l), (l, d, w), (d, l, w)];

    let fits = |(x, y, z): (f64, f64, f64)| x <= inner.0 && y <= inner.1 && z <= inner.2;
    if unit.keep_flat() {
        upright.into_iter().any(fits)
    } else {
        upright.into_iter().chain(tilted).any(fits)
    }
}

/// Reference first-fit-decreasing engine.
#[derive(Debug, Default)]
pub struct FirstFitEngine {
    containers: Vec<PackableContainer>,
    items: Vec<(PackableUnit, bool)>,
}

impl FirstFitEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest container type that holds `unit` on its own.
    fn smallest_fitting(&self, unit: &PackableUnit, force: bool) -> Option<&PackableContainer> {
        self.containers
            .iter()
            .filter(|c| unit.volume() <= c.inner_volume())
            .filter(|c| within_weight(c, c.empty_weight() + unit.weight()))
            .filter(|c| force || fits_inside(unit, c))
            .min_by(|a, b| a.inner_volume().total_cmp(&b.inner_volume()))
    }
}

impl PackingEngine for FirstFitEngine {
    type Packed = Vec<PackedBox>;
    type Error = EngineError;

    fn add_box(&mut self, container: PackableContainer) {
        self.containers.push(container);
    }

    fn add_item(&mut self, unit: PackableUnit, force: bool) {
        self.items.push((unit, force));
    }

    fn pack(mut self) -> Result<Vec<PackedBox>, EngineError> {
        if self.items.is_empty() {
            return Ok(Vec::new());
        }
        if self.containers.is_empty() {
            return Err(EngineError::NoContainers {
                units: self.items.len(),
            });
        }

        let mut items = std::mem::take(&mut self.items);
        items.sort_by(|(a, _), (b, _)| {
            b.volume()
                .total_cmp(&a.volume())
                .then(b.weight().total_cmp(&a.weight()))
        });

        let mut packed: Vec<PackedBox> = Vec::new();
        for (unit, force) in items {
            if let Some(open) = packed.iter_mut().find(|b| b.accepts(&unit, force)) {
                open.push(unit);
                continue;
            }

            let container = self
                .smallest_fitting(&unit, force)
                .cloned()
                .ok_or_else(|| EngineError::ItemTooLarge {
                    description: unit.description().to_string(),
                })?;
            tracing::trace!(
                container = container.reference(),
                unit = unit.description(),
                "opening box"
            );
            let mut fresh = PackedBox::open(container);
            fresh.push(unit);
            packed.push(fresh);
        }

        tracing::debug!(boxes = packed.len(), "first-fit packing complete");
        Ok(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack_core::ContainerDimensions;

    fn container(name: &str, w: f64, l: f64, d: f64, max_weight: f64) -> PackableContainer {
        PackableContainer::new(
            name,
            ContainerDimensions {
                outer_width: w,
                outer_length: l,
                outer_depth: d,
                inner_width: w,
                inner_length: l,
                inner_depth: d,
            },
            0.0,
            max_weight,
        )
    }

    fn cube(name: &str, side: f64, weight: f64) -> PackableUnit {
        PackableUnit::new(name, side, side, side, weight, true)
    }

    #[test]
    fn empty_run_packs_nothing() {
        let engine = FirstFitEngine::new();
        assert!(engine.pack().unwrap().is_empty());
    }

    #[test]
    fn units_without_containers_fail() {
        let mut engine = FirstFitEngine::new();
        engine.add_item(cube("a", 10.0, 1.0), false);
        assert_eq!(
            engine.pack().unwrap_err(),
            EngineError::NoContainers { units: 1 }
        );
    }

    #[test]
    fn two_cubes_share_one_box() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Box", 300.0, 200.0, 150.0, 5000.0));
        engine.add_item(cube("a", 100.0, 1000.0), false);
        engine.add_item(cube("b", 100.0, 1000.0), false);

        let packed = engine.pack().unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].items().len(), 2);
        assert_eq!(packed[0].weight(), 2000.0);
        assert_eq!(packed[0].used_volume(), 2_000_000.0);
    }

    #[test]
    fn weight_limit_opens_second_box() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Box", 300.0, 200.0, 150.0, 1500.0));
        engine.add_item(cube("a", 100.0, 1000.0), false);
        engine.add_item(cube("b", 100.0, 1000.0), false);

        let packed = engine.pack().unwrap();
        assert_eq!(packed.len(), 2);
    }

    #[test]
    fn prefers_smallest_fitting_container() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Large", 500.0, 500.0, 500.0, 0.0));
        engine.add_box(container("Small", 120.0, 120.0, 120.0, 0.0));
        engine.add_item(cube("a", 100.0, 10.0), false);

        let packed = engine.pack().unwrap();
        assert_eq!(packed[0].container().reference(), "Small");
    }

    #[test]
    fn keep_flat_unit_cannot_be_tipped_over() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Flat", 400.0, 400.0, 50.0, 0.0));
        engine.add_item(PackableUnit::new("Tall", 40.0, 40.0, 300.0, 10.0, true), false);
        assert!(matches!(
            engine.pack(),
            Err(EngineError::ItemTooLarge { .. })
        ));

        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Flat", 400.0, 400.0, 50.0, 0.0));
        engine.add_item(PackableUnit::new("Tall", 40.0, 40.0, 300.0, 10.0, false), false);
        assert_eq!(engine.pack().unwrap().len(), 1);
    }

    #[test]
    fn zero_volume_forced_unit_rides_along() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Box", 300.0, 200.0, 150.0, 5000.0));
        engine.add_item(cube("a", 100.0, 1000.0), false);
        engine.add_item(PackableUnit::new("Extra Option: Card", 0.0, 0.0, 0.0, 0.0, true), true);

        let packed = engine.pack().unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].items().len(), 2);
        assert_eq!(packed[0].items()[1].description(), "Extra Option: Card");
    }

    #[test]
    fn utilization_reports_fill_fraction() {
        let mut engine = FirstFitEngine::new();
        engine.add_box(container("Box", 200.0, 100.0, 100.0, 0.0));
        engine.add_item(cube("a", 100.0, 1.0), false);
        let packed = engine.pack().unwrap();
        assert!((packed[0].utilization() - 0.5).abs() < 1e-12);
        assert_eq!(packed[0].remaining_volume(), 1_000_000.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use boxpack_core::ContainerDimensions;
    use proptest::prelude::*;

    proptest! {
        /// Every submitted unit ends up in exactly one box, and no box
        /// exceeds its inner volume.
        #[test]
        fn all_units_placed_within_capacity(
            sides in prop::collection::vec(1.0f64..100.0, 1..30)
        ) {
            let mut engine = FirstFitEngine::new();
            engine.add_box(PackableContainer::new(
                "Crate",
                ContainerDimensions {
                    outer_width: 200.0,
                    outer_length: 200.0,
                    outer_depth: 200.0,
                    inner_width: 200.0,
                    inner_length: 200.0,
                    inner_depth: 200.0,
                },
                0.0,
                0.0,
            ));
            for (i, side) in sides.iter().enumerate() {
                engine.add_item(
                    PackableUnit::new(format!("u{i}"), *side, *side, *side, 1.0, true),
                    false,
                );
            }

            let packed = engine.pack().unwrap();
            let placed: usize = packed.iter().map(|b| b.items().len()).sum();
            prop_assert_eq!(placed, sides.len());
            for b in &packed {
                prop_assert!(b.used_volume() <= b.container().inner_volume() + 1e-6);
            }
        }
    }
}
