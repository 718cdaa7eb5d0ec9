//! # boxpack-engine — Packing Engine Seam
//!
//! The packer decides *what* goes to the engine; the engine decides *where*
//! it goes. This crate holds the contract between the two.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): [`PackingEngine`] accepts containers and
//!   units, then packs them in a single consuming call. One engine instance
//!   serves exactly one packing run.
//!
//! - **Recording** (`recording.rs`): [`RecordingEngine`] packs nothing and
//!   returns exactly what it was given. Used for dry runs and to observe what
//!   the packer submits.
//!
//! - **First fit** (`first_fit.rs`): [`FirstFitEngine`] is a reference
//!   engine assigning units to boxes by volume, weight, and orientation.
//!   Production deployments are expected to plug in a real 3D engine.
//!
//! ## Crate Policy
//!
//! - Depends only on `boxpack-core` internally.
//! - Engines never reinterpret units: dimensions arrive in mm and grams.

pub mod first_fit;
pub mod recording;
pub mod traits;

pub use first_fit::{EngineError, FirstFitEngine, PackedBox};
pub use recording::{RecordedItem, RecordedRun, RecordingEngine};
pub use traits::PackingEngine;
