//! # Packing Orchestrator
//!
//! [`BoxPacker`] composes the pieces of a packing run:
//!
//! ```text
//! boxes? ──► resolve (explicit | catalog) ──► build containers
//! items  ──► expand ──► unpackable? ──► abort
//!                            │
//!                            └──► engine.add_box / add_item ──► engine.pack()
//! ```
//!
//! The packer keeps no per-run state. Each call builds its own
//! [`UnpackableSet`](crate::UnpackableSet) and consumes its own engine, so
//! concurrent runs over one packer cannot observe each other.
//!
//! An aborted run never touches the engine: containers and units are only
//! submitted once expansion has produced no rejects.

use std::borrow::Cow;

use boxpack_core::{CatalogError, ShipmentItem, ShippingBox, ShippingConfigProvider};
use boxpack_engine::PackingEngine;

use crate::builder::UnitBuilder;
use crate::error::PackError;
use crate::expansion::{expand, Expansion};

/// Result of a packing run that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PackOutcome<T> {
    /// The engine's result, unmodified.
    Packed(T),
    /// No boxes were supplied and the catalog is empty; nothing was packed.
    NoBoxesAvailable,
}

impl<T> PackOutcome<T> {
    /// The engine's result, if packing took place.
    pub fn into_packed(self) -> Option<T> {
        match self {
            PackOutcome::Packed(packed) => Some(packed),
            PackOutcome::NoBoxesAvailable => None,
        }
    }

    /// True when there was nothing to pack into.
    pub fn is_no_boxes(&self) -> bool {
        matches!(self, PackOutcome::NoBoxesAvailable)
    }
}

/// Facade over unit building, expansion, and the packing engine.
#[derive(Debug, Clone)]
pub struct BoxPacker<P> {
    provider: P,
    builder: UnitBuilder,
}

impl<P: ShippingConfigProvider> BoxPacker<P> {
    /// Create a packer using the provider's units and box catalog.
    pub fn new(provider: P) -> Self {
        let builder = UnitBuilder::new(provider.normalizer());
        Self { provider, builder }
    }

    /// The configuration provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The unit builder, bound to the provider's unit pair.
    pub fn builder(&self) -> &UnitBuilder {
        &self.builder
    }

    /// The provider's configured box catalog.
    pub fn shipping_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError> {
        self.provider.shipping_boxes()
    }

    /// Expand a shipment without packing it.
    pub fn expand(&self, items: &[ShipmentItem]) -> Expansion {
        expand(items, &self.builder)
    }

    /// Pack a shipment.
    ///
    /// `boxes` overrides the catalog when it is non-empty. With no boxes from
    /// either source the run returns [`PackOutcome::NoBoxesAvailable`]. If
    /// any shippable line lacks dimensions the run fails with
    /// [`PackError::IncompleteDimensions`] before the engine is used.
    /// Otherwise the engine's result is returned as-is.
    pub fn pack<E: PackingEngine>(
        &self,
        mut engine: E,
        items: &[ShipmentItem],
        boxes: Option<&[ShippingBox]>,
    ) -> Result<PackOutcome<E::Packed>, PackError<E::Error>> {
        let boxes = self.resolve_boxes(boxes)?;
        if boxes.is_empty() {
            tracing::debug!(lines = items.len(), "no shipping boxes available");
            return Ok(PackOutcome::NoBoxesAvailable);
        }

        let containers: Vec<_> = boxes
            .iter()
            .map(|b| self.builder.build_container(b))
            .collect();

        let (units, unpackable) = self.expand(items).into_parts();
        if !unpackable.is_empty() {
            tracing::warn!(
                unpackable = unpackable.len(),
                "packing aborted: items without valid dimensions"
            );
        }
        unpackable.check_and_abort::<E::Error>()?;

        tracing::info!(
            boxes = containers.len(),
            units = units.len(),
            "submitting shipment to packing engine"
        );
        for container in containers {
            engine.add_box(container);
        }
        for expanded in units {
            engine.add_item(expanded.unit, expanded.force);
        }

        engine.pack().map(PackOutcome::Packed).map_err(PackError::Engine)
    }

    fn resolve_boxes<'a>(
        &self,
        explicit: Option<&'a [ShippingBox]>,
    ) -> Result<Cow<'a, [ShippingBox]>, CatalogError> {
        match explicit {
            Some(boxes) if !boxes.is_empty() => Ok(Cow::Borrowed(boxes)),
            _ => Ok(Cow::Owned(self.provider.shipping_boxes()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack_core::{
        LengthUnit, Product, RawMeasure, ShippingParams, UnitNormalizer, WeightUnit,
    };
    use boxpack_engine::{RecordingEngine, RecordedRun};

    struct BrokenCatalog;

    impl ShippingConfigProvider for BrokenCatalog {
        fn length_unit(&self) -> LengthUnit {
            LengthUnit::Centimeters
        }

        fn weight_unit(&self) -> WeightUnit {
            WeightUnit::Kilograms
        }

        fn shipping_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError> {
            Err(CatalogError::new("database offline"))
        }
    }

    fn small_box() -> ShippingBox {
        ShippingBox {
            name: "Small".into(),
            width: RawMeasure::Number(30.0),
            length: RawMeasure::Number(20.0),
            depth: RawMeasure::Number(15.0),
            empty_weight: RawMeasure::Absent,
            inner_width: RawMeasure::Absent,
            inner_length: RawMeasure::Absent,
            inner_depth: RawMeasure::Absent,
            max_weight: RawMeasure::Number(5.0),
        }
    }

    fn line(sku: &str, width: RawMeasure) -> ShipmentItem {
        ShipmentItem {
            sku: sku.into(),
            quantity: 1,
            product: Product {
                name: sku.into(),
                shippable: true,
            },
            width,
            depth: RawMeasure::Number(10.0),
            height: RawMeasure::Number(10.0),
            weight: RawMeasure::Number(1.0),
            total_volume: 1000.0,
            auxiliary_items: vec![],
        }
    }

    fn run(outcome: PackOutcome<RecordedRun>) -> RecordedRun {
        outcome.into_packed().expect("expected a packed result")
    }

    #[test]
    fn builder_follows_provider_units() {
        let packer = BoxPacker::new(ShippingParams::new(LengthUnit::Inches, WeightUnit::Pounds));
        assert_eq!(
            *packer.builder().normalizer(),
            UnitNormalizer::new(LengthUnit::Inches, WeightUnit::Pounds)
        );
    }

    #[test]
    fn shipping_boxes_lists_the_provider_catalog() {
        let packer = BoxPacker::new(ShippingParams::default().with_boxes(vec![small_box()]));
        assert_eq!(packer.provider().shipping_boxes().unwrap().len(), 1);
        let names: Vec<_> = packer
            .shipping_boxes()
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Small"]);

        let broken = BoxPacker::new(BrokenCatalog);
        assert_eq!(broken.provider().length_unit(), LengthUnit::Centimeters);
        assert!(broken.shipping_boxes().is_err());
    }

    #[test]
    fn explicit_boxes_override_catalog() {
        let mut catalog_box = small_box();
        catalog_box.name = "Catalog".into();
        let params = ShippingParams::default().with_boxes(vec![catalog_box]);
        let packer = BoxPacker::new(params);

        let explicit = [small_box()];
        let outcome = packer
            .pack(
                RecordingEngine::new(),
                &[line("A", RawMeasure::Number(10.0))],
                Some(&explicit),
            )
            .unwrap();
        let recorded = run(outcome);
        assert_eq!(recorded.containers.len(), 1);
        assert_eq!(recorded.containers[0].reference(), "Small");
    }

    #[test]
    fn empty_explicit_list_falls_back_to_catalog() {
        let params = ShippingParams::default().with_boxes(vec![small_box()]);
        let packer = BoxPacker::new(params);
        let outcome = packer
            .pack(
                RecordingEngine::new(),
                &[line("A", RawMeasure::Number(10.0))],
                Some(&[]),
            )
            .unwrap();
        assert_eq!(run(outcome).containers.len(), 1);
    }

    #[test]
    fn no_boxes_anywhere_is_not_a_failure() {
        let packer = BoxPacker::new(ShippingParams::default());
        let outcome = packer
            .pack(
                RecordingEngine::new(),
                &[line("A", RawMeasure::Absent)],
                None,
            )
            .unwrap();
        assert!(outcome.is_no_boxes());
    }

    #[test]
    fn incomplete_dimensions_abort_before_engine() {
        let packer = BoxPacker::new(ShippingParams::default().with_boxes(vec![small_box()]));
        let items = [
            line("GOOD", RawMeasure::Number(10.0)),
            line("BAD", RawMeasure::Absent),
        ];
        let err = packer
            .pack(RecordingEngine::new(), &items, None)
            .unwrap_err();
        let rejected = err.unpackable_items().unwrap();
        assert_eq!(rejected.skus().collect::<Vec<_>>(), vec!["BAD"]);
    }

    #[test]
    fn catalog_failure_is_reported() {
        let packer = BoxPacker::new(BrokenCatalog);
        let err = packer
            .pack(
                RecordingEngine::new(),
                &[line("A", RawMeasure::Number(10.0))],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, PackError::Catalog(_)));
        assert!(err.unpackable_items().is_none());
        assert!(err.to_string().contains("database offline"));
    }

    #[test]
    fn packer_holds_no_run_state() {
        let packer = BoxPacker::new(ShippingParams::default().with_boxes(vec![small_box()]));
        let bad = [line("BAD", RawMeasure::Absent)];
        assert!(packer.pack(RecordingEngine::new(), &bad, None).is_err());

        let good = [line("GOOD", RawMeasure::Number(10.0))];
        let recorded = run(packer.pack(RecordingEngine::new(), &good, None).unwrap());
        assert_eq!(recorded.items.len(), 1);
    }
}
