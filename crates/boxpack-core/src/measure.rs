//! # Raw Measurements
//!
//! Item and box records arrive from catalogs in whatever shape the shop
//! stored them: a number, a numeric string, an empty string, or nothing at
//! all. [`RawMeasure`] captures that shape without interpreting it, and
//! [`HasPhysicalMeasurements`] is the single interface through which the
//! packer reads an item's physical extent, regardless of whether it is an
//! order line or an attached extra.
//!
//! ## Zero Sentinel
//!
//! Absent, zero, and non-numeric values all collapse to "no measurement".
//! A genuinely zero measurement is therefore indistinguishable from an
//! unspecified one. Callers that need to tell the two apart must do so
//! before the record reaches this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical measurement exactly as stored on a record, in the shop's
/// configured unit system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasure {
    /// No value recorded.
    #[default]
    Absent,
    /// A numeric value.
    Number(f64),
    /// A textual value, numeric or not.
    Text(String),
}

impl RawMeasure {
    /// The numeric value, if the measure holds a finite number or a string
    /// that parses as one.
    pub fn numeric(&self) -> Option<f64> {
        let value = match self {
            RawMeasure::Absent => return None,
            RawMeasure::Number(n) => *n,
            RawMeasure::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// True when the measure holds a non-zero numeric value.
    ///
    /// Judged on the raw value, so a tiny measurement that rounds to zero
    /// after unit conversion still counts as present.
    pub fn is_present(&self) -> bool {
        matches!(self.numeric(), Some(v) if v != 0.0)
    }

    /// The numeric value with absent, zero, and non-numeric inputs mapped to
    /// `None`.
    pub fn nonzero(&self) -> Option<f64> {
        self.numeric().filter(|v| *v != 0.0)
    }
}

impl From<f64> for RawMeasure {
    fn from(value: f64) -> Self {
        RawMeasure::Number(value)
    }
}

impl From<Option<f64>> for RawMeasure {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawMeasure::Absent, RawMeasure::Number)
    }
}

impl From<&str> for RawMeasure {
    fn from(value: &str) -> Self {
        RawMeasure::Text(value.to_string())
    }
}

/// How a packable unit is labelled, chosen by whoever builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Describable {
    /// A catalog product, labelled by its display name.
    Product(String),
    /// An extra option attached to an order line.
    Auxiliary(String),
}

impl fmt::Display for Describable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Describable::Product(name) => f.write_str(name),
            Describable::Auxiliary(description) => write!(f, "Extra Option: {description}"),
        }
    }
}

/// Read access to a record's physical extent in packing axes.
///
/// Implementors map their own storage onto the packing frame: what a record
/// calls "depth" is the unit's length, and its "height" is the unit's depth
/// (how the item rests in a box rather than how it stands on a shelf).
pub trait HasPhysicalMeasurements {
    /// Extent along the box width axis.
    fn width(&self) -> &RawMeasure;
    /// Extent along the box length axis.
    fn length(&self) -> &RawMeasure;
    /// Extent along the box depth (vertical) axis.
    fn depth(&self) -> &RawMeasure;
    /// Weight.
    fn weight(&self) -> &RawMeasure;
    /// Label for the packable unit built from this record.
    fn describe(&self) -> Describable;

    /// True when width, length, and depth are all present and non-zero.
    fn has_complete_dimensions(&self) -> bool {
        self.width().is_present() && self.length().is_present() && self.depth().is_present()
    }
}
