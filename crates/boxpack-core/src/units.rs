//! # Unit Normalization
//!
//! Converts shop measurements into the fixed internal unit pair used by every
//! engine-ready shape: millimeters for length and grams for weight. Results
//! are rounded to two decimal places. Conversion happens exactly once, when a
//! shape is constructed.
//!
//! Absent, zero, and non-numeric inputs normalize to `0.0` with no error; see
//! [`crate::measure`] for why zero doubles as "no measurement".

use serde::{Deserialize, Serialize};

use crate::measure::RawMeasure;

/// Millimeters per centimeter.
pub const MM_PER_CM: f64 = 10.0;
/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Grams per kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;
/// Grams per pound.
pub const GRAMS_PER_LB: f64 = 453.592;

const INCHES_PER_MM: f64 = 0.0393701;
const LBS_PER_GRAM: f64 = 0.00220462;

/// Length unit a shop records dimensions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Metric.
    #[default]
    #[serde(rename = "CM", alias = "cm")]
    Centimeters,
    /// Imperial.
    #[serde(rename = "IN", alias = "in")]
    Inches,
}

impl LengthUnit {
    /// True for centimeters.
    pub fn is_metric(self) -> bool {
        matches!(self, LengthUnit::Centimeters)
    }
}

/// Weight unit a shop records weights in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Metric.
    #[default]
    #[serde(rename = "KGS", alias = "kgs", alias = "KG", alias = "kg")]
    Kilograms,
    /// Imperial.
    #[serde(rename = "LBS", alias = "lbs", alias = "LB", alias = "lb")]
    Pounds,
}

impl WeightUnit {
    /// True for pounds.
    pub fn is_imperial(self) -> bool {
        matches!(self, WeightUnit::Pounds)
    }
}

/// Round to two decimal places, halves away from zero.
///
/// The scaled value is first cut to 15 significant digits so that products
/// such as `0.375 * 25.4` (stored as `9.524999...`) round as the decimal
/// value they stand for.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let settled = format!("{scaled:.14e}").parse::<f64>().unwrap_or(scaled);
    settled.round() / 100.0
}

/// Convert a length in `unit` to millimeters.
///
/// `None` and `Some(0.0)` both return `0.0` without conversion.
pub fn to_internal_length(value: Option<f64>, unit: LengthUnit) -> f64 {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => match unit {
            LengthUnit::Centimeters => round2(v * MM_PER_CM),
            LengthUnit::Inches => round2(v * MM_PER_INCH),
        },
        _ => 0.0,
    }
}

/// Convert a weight in `unit` to grams.
///
/// `None` and `Some(0.0)` both return `0.0` without conversion.
pub fn to_internal_weight(value: Option<f64>, unit: WeightUnit) -> f64 {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => match unit {
            WeightUnit::Kilograms => round2(v * GRAMS_PER_KG),
            WeightUnit::Pounds => round2(v * GRAMS_PER_LB),
        },
        _ => 0.0,
    }
}

/// Millimeters to centimeters, for display.
pub fn mm_to_cm(mm: f64) -> f64 {
    round2(mm / MM_PER_CM)
}

/// Millimeters to inches, for display.
pub fn mm_to_inches(mm: f64) -> f64 {
    round2(mm * INCHES_PER_MM)
}

/// Grams to kilograms, for display.
pub fn grams_to_kg(grams: f64) -> f64 {
    round2(grams / GRAMS_PER_KG)
}

/// Grams to pounds, for display.
pub fn grams_to_lbs(grams: f64) -> f64 {
    round2(grams * LBS_PER_GRAM)
}

/// The shop's unit pair, applied to raw record measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitNormalizer {
    length_unit: LengthUnit,
    weight_unit: WeightUnit,
}

impl UnitNormalizer {
    /// Create a normalizer for the given unit pair.
    pub fn new(length_unit: LengthUnit, weight_unit: WeightUnit) -> Self {
        Self {
            length_unit,
            weight_unit,
        }
    }

    /// The configured length unit.
    pub fn length_unit(&self) -> LengthUnit {
        self.length_unit
    }

    /// The configured weight unit.
    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// Normalize a raw length to millimeters.
    pub fn to_mm(&self, raw: &RawMeasure) -> f64 {
        to_internal_length(raw.nonzero(), self.length_unit)
    }

    /// Normalize a raw weight to grams.
    pub fn to_grams(&self, raw: &RawMeasure) -> f64 {
        to_internal_weight(raw.nonzero(), self.weight_unit)
    }

    /// Express an internal length back in the shop's length unit.
    pub fn display_length(&self, mm: f64) -> f64 {
        match self.length_unit {
            LengthUnit::Centimeters => mm_to_cm(mm),
            LengthUnit::Inches => mm_to_inches(mm),
        }
    }

    /// Express an internal weight back in the shop's weight unit.
    pub fn display_weight(&self, grams: f64) -> f64 {
        match self.weight_unit {
            WeightUnit::Kilograms => grams_to_kg(grams),
            WeightUnit::Pounds => grams_to_lbs(grams),
        }
    }
}
