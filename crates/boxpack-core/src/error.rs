//! # Error Types
//!
//! Errors raised by the configuration layer. Packing-level failures live in
//! `boxpack-packer`; this crate only fails when shipping configuration cannot
//! be read or the box catalog cannot be obtained.

use std::path::PathBuf;

use thiserror::Error;

/// Error while loading shipping configuration from disk or a string.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("shipping configuration not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported shipping configuration format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// YAML parsing failed.
    #[error("invalid YAML in {}: {source}", path.display())]
    YamlParse {
        /// Source file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("invalid JSON in {}: {source}", path.display())]
    JsonParse {
        /// Source file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_json::Error,
    },

    /// In-memory YAML parsing failed.
    #[error("invalid shipping configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The shipping-box catalog could not be obtained from the provider.
#[derive(Error, Debug)]
#[error("shipping box catalog unavailable: {reason}")]
pub struct CatalogError {
    /// Why the catalog could not be read.
    pub reason: String,
}

impl CatalogError {
    /// Build a catalog error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
