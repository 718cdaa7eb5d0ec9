//! # Recording Engine
//!
//! An engine that performs no placement. `pack` returns the containers and
//! units it received, in submission order, which makes the packer's output
//! directly observable.

use std::convert::Infallible;

use boxpack_core::{PackableContainer, PackableUnit};
use serde::Serialize;

use crate::traits::PackingEngine;

/// A unit as it was submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedItem {
    /// The submitted unit.
    pub unit: PackableUnit,
    /// The force flag it was submitted with.
    pub force: bool,
}

/// Everything submitted during one run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecordedRun {
    /// Containers in submission order.
    pub containers: Vec<PackableContainer>,
    /// Units in submission order.
    pub items: Vec<RecordedItem>,
}

/// Engine that records its inputs and returns them from `pack`.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    run: RecordedRun,
}

impl RecordingEngine {
    /// Create an empty recording engine.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PackingEngine for RecordingEngine {
    type Packed = RecordedRun;
    type Error = Infallible;

    fn add_box(&mut self, container: PackableContainer) {
        self.run.containers.push(container);
    }

    fn add_item(&mut self, unit: PackableUnit, force: bool) {
        self.run.items.push(RecordedItem { unit, force });
    }

    fn pack(self) -> Result<RecordedRun, Infallible> {
        Ok(self.run)
    }
}
