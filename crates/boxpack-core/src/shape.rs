//! # Engine-Ready Shapes
//!
//! [`PackableUnit`] and [`PackableContainer`] are what a packing engine
//! consumes. All lengths are millimeters and all weights grams; volumes are
//! computed once at construction from the shape's own normalized dimensions
//! and never change afterwards. Fields are private so that invariant holds.

use serde::{Deserialize, Serialize};

/// One physical object submitted to a packing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackableUnit {
    description: String,
    width: f64,
    length: f64,
    depth: f64,
    weight: f64,
    volume: f64,
    keep_flat: bool,
}

impl PackableUnit {
    /// Create a unit from normalized dimensions (mm) and weight (g).
    pub fn new(
        description: impl Into<String>,
        width: f64,
        length: f64,
        depth: f64,
        weight: f64,
        keep_flat: bool,
    ) -> Self {
        Self {
            description: description.into(),
            width,
            length,
            depth,
            weight,
            volume: width * length * depth,
            keep_flat,
        }
    }

    /// Human-readable label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Width in mm.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Length in mm.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Depth (vertical extent) in mm.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Weight in g.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Volume in mm³.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether the engine must keep this unit on its base face.
    pub fn keep_flat(&self) -> bool {
        self.keep_flat
    }
}

/// One candidate shipping box submitted to a packing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackableContainer {
    reference: String,
    outer_width: f64,
    outer_length: f64,
    outer_depth: f64,
    empty_weight: f64,
    inner_width: f64,
    inner_length: f64,
    inner_depth: f64,
    max_weight: f64,
    inner_volume: f64,
}

/// Normalized box dimensions, outer then inner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerDimensions {
    /// Outer width in mm.
    pub outer_width: f64,
    /// Outer length in mm.
    pub outer_length: f64,
    /// Outer depth in mm.
    pub outer_depth: f64,
    /// Inner width in mm.
    pub inner_width: f64,
    /// Inner length in mm.
    pub inner_length: f64,
    /// Inner depth in mm.
    pub inner_depth: f64,
}

impl PackableContainer {
    /// Create a container from normalized dimensions (mm) and weights (g).
    pub fn new(
        reference: impl Into<String>,
        dims: ContainerDimensions,
        empty_weight: f64,
        max_weight: f64,
    ) -> Self {
        Self {
            reference: reference.into(),
            outer_width: dims.outer_width,
            outer_length: dims.outer_length,
            outer_depth: dims.outer_depth,
            empty_weight,
            inner_width: dims.inner_width,
            inner_length: dims.inner_length,
            inner_depth: dims.inner_depth,
            max_weight,
            inner_volume: dims.inner_width * dims.inner_length * dims.inner_depth,
        }
    }

    /// Reference name.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Outer width in mm.
    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }

    /// Outer length in mm.
    pub fn outer_length(&self) -> f64 {
        self.outer_length
    }

    /// Outer depth in mm.
    pub fn outer_depth(&self) -> f64 {
        self.outer_depth
    }

    /// Empty box weight in g.
    pub fn empty_weight(&self) -> f64 {
        self.empty_weight
    }

    /// Inner width in mm.
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Inner length in mm.
    pub fn inner_length(&self) -> f64 {
        self.inner_length
    }

    /// Inner depth in mm.
    pub fn inner_depth(&self) -> f64 {
        self.inner_depth
    }

    /// Maximum carry weight in g, box included.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Inner volume in mm³.
    pub fn inner_volume(&self) -> f64 {
        self.inner_volume
    }
}
