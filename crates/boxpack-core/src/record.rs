//! # Catalog Records
//!
//! Read-only shapes of the order lines and shipping boxes handed to the
//! packer. These are owned by the caller; the packer never mutates them.
//! Measurements are stored raw, in the shop's configured unit system.

use serde::{Deserialize, Serialize};

use crate::measure::{Describable, HasPhysicalMeasurements, RawMeasure};

/// The product an order line refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, used as the packable unit description.
    pub name: String,
    /// Whether the product's type ships physically.
    #[serde(default = "default_shippable")]
    pub shippable: bool,
}

fn default_shippable() -> bool {
    true
}

/// An extra option attached to an order line (engraving, add-on, gift wrap).
///
/// Always packed alongside its parent, whether or not it has dimensions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuxiliaryItem {
    /// Free-text description of the option.
    pub description: String,
    /// Width.
    #[serde(default)]
    pub width: RawMeasure,
    /// Depth, packed as the unit's length.
    #[serde(default)]
    pub depth: RawMeasure,
    /// Height, packed as the unit's depth.
    #[serde(default)]
    pub height: RawMeasure,
    /// Weight.
    #[serde(default)]
    pub weight: RawMeasure,
    /// Volume as reported by the shop.
    #[serde(default)]
    pub volume: f64,
}

/// One order line: a quantity of a product to ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItem {
    /// SKU identifying the line in unpackable reports.
    pub sku: String,
    /// Number of physical units on the line.
    pub quantity: u32,
    /// The ordered product.
    pub product: Product,
    /// Width.
    #[serde(default)]
    pub width: RawMeasure,
    /// Depth, packed as the unit's length.
    #[serde(default)]
    pub depth: RawMeasure,
    /// Height, packed as the unit's depth.
    #[serde(default)]
    pub height: RawMeasure,
    /// Weight of a single unit.
    #[serde(default)]
    pub weight: RawMeasure,
    /// Volume of the whole line as reported by the shop, quantity included.
    #[serde(default)]
    pub total_volume: f64,
    /// Extra options attached to this line.
    #[serde(default)]
    pub auxiliary_items: Vec<AuxiliaryItem>,
}

impl ShipmentItem {
    /// Whether this line takes part in physical packing.
    pub fn is_shippable(&self) -> bool {
        self.product.shippable
    }
}

impl HasPhysicalMeasurements for ShipmentItem {
    fn width(&self) -> &RawMeasure {
        &self.width
    }

    fn length(&self) -> &RawMeasure {
        &self.depth
    }

    fn depth(&self) -> &RawMeasure {
        &self.height
    }

    fn weight(&self) -> &RawMeasure {
        &self.weight
    }

    fn describe(&self) -> Describable {
        Describable::Product(self.product.name.clone())
    }
}

impl HasPhysicalMeasurements for AuxiliaryItem {
    fn width(&self) -> &RawMeasure {
        &self.width
    }

    fn length(&self) -> &RawMeasure {
        &self.depth
    }

    fn depth(&self) -> &RawMeasure {
        &self.height
    }

    fn weight(&self) -> &RawMeasure {
        &self.weight
    }

    fn describe(&self) -> Describable {
        Describable::Auxiliary(self.description.clone())
    }
}

/// A shipping box from the shop's catalog.
///
/// Inner dimensions fall back to the outer ones when absent or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingBox {
    /// Reference name of the box.
    pub name: String,
    /// Outer width.
    #[serde(default)]
    pub width: RawMeasure,
    /// Outer length.
    #[serde(default)]
    pub length: RawMeasure,
    /// Outer depth.
    #[serde(default)]
    pub depth: RawMeasure,
    /// Weight of the empty box.
    #[serde(default)]
    pub empty_weight: RawMeasure,
    /// Inner width.
    #[serde(default)]
    pub inner_width: RawMeasure,
    /// Inner length.
    #[serde(default)]
    pub inner_length: RawMeasure,
    /// Inner depth.
    #[serde(default)]
    pub inner_depth: RawMeasure,
    /// Maximum carry weight.
    #[serde(default)]
    pub max_weight: RawMeasure,
}

impl ShippingBox {
    /// Inner width, or outer width when no inner width is recorded.
    pub fn effective_inner_width(&self) -> &RawMeasure {
        inner_or_outer(&self.inner_width, &self.width)
    }

    /// Inner length, or outer length when no inner length is recorded.
    pub fn effective_inner_length(&self) -> &RawMeasure {
        inner_or_outer(&self.inner_length, &self.length)
    }

    /// Inner depth, or outer depth when no inner depth is recorded.
    pub fn effective_inner_depth(&self) -> &RawMeasure {
        inner_or_outer(&self.inner_depth, &self.depth)
    }
}

fn inner_or_outer<'a>(inner: &'a RawMeasure, outer: &'a RawMeasure) -> &'a RawMeasure {
    if inner.is_present() {
        inner
    } else {
        outer
    }
}
