use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::layout::SheetLayout;
use crate::error::Result;
use crate::types::NormalizationPolicy;

/// Per-sheet processing parameters suitable for manifests and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceParams {
    /// Inward margin in pixels applied to every side of each cell
    pub margin: u32,
    /// If set, near-white pixels above this value become transparent before slicing
    pub background_threshold: Option<u8>,
    /// Trim fully transparent borders from each icon
    pub trim: bool,
    /// Square normalization applied last; None keeps the cell aspect ratio
    pub square: Option<NormalizationPolicy>,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            margin: 0,
            background_threshold: None,
            trim: false,
            square: None,
        }
    }
}

/// One sheet entry of a batch manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetJob {
    pub file: PathBuf,
    #[serde(flatten)]
    pub layout: SheetLayout,
    #[serde(default)]
    pub params: SliceParams,
    /// Overrides the manifest-wide output directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// A batch of sheets to slice, usually read from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetManifest {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub sheets: Vec<SheetJob>,
}

impl SheetManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_flattened_layout_and_defaults() {
        let manifest = SheetManifest::from_json_str(
            r#"{
                "output_dir": "icons",
                "sheets": [
                    {"file": "sheet1.png", "rows": 2, "columns": 4,
                     "labels": ["fire", "cold", null],
                     "params": {"square": "pad", "margin": 3}},
                    {"file": "sheet2.png", "rows": 1, "columns": 1, "labels": ["x"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.output_dir, Some(PathBuf::from("icons")));
        let first = &manifest.sheets[0];
        assert_eq!(first.layout.rows, 2);
        assert_eq!(first.layout.labeled_count(), 2);
        assert_eq!(first.params.square, Some(NormalizationPolicy::Pad));
        assert_eq!(first.params.margin, 3);
        assert!(!first.params.trim);
        assert_eq!(manifest.sheets[1].params, SliceParams::default());
    }

    #[test]
    fn malformed_manifest_is_reported() {
        let err = SheetManifest::from_json_str("{\"sheets\": 3}").unwrap_err();
        assert!(matches!(err, crate::Error::Manifest(_)));
    }
}
