//! # Shipping Configuration
//!
//! The packer needs two things from the shop's shipping settings: the unit
//! pair measurements are recorded in, and the catalog of boxes to pack into
//! when the caller supplies none. [`ShippingConfigProvider`] is that seam.
//! [`ShippingParams`] is the file-backed implementation, loadable from YAML
//! or JSON.
//!
//! ```yaml
//! dimension_unit: CM
//! weight_unit: KGS
//! shipping_boxes:
//!   - name: Small
//!     width: 30
//!     length: 20
//!     depth: 15
//!     max_weight: 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ConfigError};
use crate::record::ShippingBox;
use crate::units::{LengthUnit, UnitNormalizer, WeightUnit};

/// Source of unit settings and the default box catalog.
pub trait ShippingConfigProvider {
    /// Unit item and box dimensions are recorded in.
    fn length_unit(&self) -> LengthUnit;

    /// Unit item and box weights are recorded in.
    fn weight_unit(&self) -> WeightUnit;

    /// The shop's configured shipping boxes.
    fn shipping_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError>;

    /// Normalizer for this provider's unit pair.
    fn normalizer(&self) -> UnitNormalizer {
        UnitNormalizer::new(self.length_unit(), self.weight_unit())
    }
}

/// Shipping settings as stored by the shop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShippingParams {
    /// Dimension unit (`CM` or `IN`).
    #[serde(default)]
    pub dimension_unit: LengthUnit,
    /// Weight unit (`KGS` or `LBS`).
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Box catalog.
    #[serde(default)]
    pub shipping_boxes: Vec<ShippingBox>,
}

impl ShippingParams {
    /// Settings with the given units and an empty box catalog.
    pub fn new(dimension_unit: LengthUnit, weight_unit: WeightUnit) -> Self {
        Self {
            dimension_unit,
            weight_unit,
            shipping_boxes: Vec::new(),
        }
    }

    /// Replace the box catalog.
    pub fn with_boxes(mut self, boxes: Vec<ShippingBox>) -> Self {
        self.shipping_boxes = boxes;
        self
    }

    /// Parse settings from a YAML (or JSON, which is valid YAML) string.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load settings from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io(e)
            }
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let params: Self = match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::debug!(
            path = %path.display(),
            dimension_unit = ?params.dimension_unit,
            weight_unit = ?params.weight_unit,
            boxes = params.shipping_boxes.len(),
            "loaded shipping configuration"
        );
        Ok(params)
    }
}

impl ShippingConfigProvider for ShippingParams {
    fn length_unit(&self) -> LengthUnit {
        self.dimension_unit
    }

    fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    fn shipping_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError> {
        Ok(self.shipping_boxes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
dimension_unit: IN
weight_unit: LBS
shipping_boxes:
  - name: Small
    width: 12
    length: 10
    depth: 6
    empty_weight: 0.5
    max_weight: 20
"#;

    #[test]
    fn parses_yaml_string() {
        let params = ShippingParams::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(params.length_unit(), LengthUnit::Inches);
        assert_eq!(params.weight_unit(), WeightUnit::Pounds);
        let boxes = params.shipping_boxes().unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].name, "Small");
    }

    #[test]
    fn missing_fields_default_to_metric_and_no_boxes() {
        let params = ShippingParams::from_yaml_str("{}").unwrap();
        assert_eq!(params, ShippingParams::default());
        assert_eq!(
            params.normalizer(),
            UnitNormalizer::new(LengthUnit::Centimeters, WeightUnit::Kilograms)
        );
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let params = ShippingParams::load(file.path()).unwrap();
        assert_eq!(params.shipping_boxes.len(), 1);
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"dimension_unit": "CM", "weight_unit": "KGS", "shipping_boxes": []}"#)
            .unwrap();
        let params = ShippingParams::load(file.path()).unwrap();
        assert_eq!(params.dimension_unit, LengthUnit::Centimeters);
        assert!(params.shipping_boxes.is_empty());
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = ShippingParams::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping.yaml");
        let err = ShippingParams::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
        assert!(err.to_string().contains("shipping.yaml"));
    }

    #[test]
    fn invalid_unit_code_fails() {
        let err = ShippingParams::from_yaml_str("dimension_unit: FURLONG").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
