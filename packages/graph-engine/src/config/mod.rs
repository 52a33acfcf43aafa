//! Report configuration
//!
//! Controls how computed results are rendered. Nothing here changes what the
//! graph algorithms compute.
//!
//! # Examples
//!
//! ```rust,ignore
//! use graph_engine::config::ReportConfig;
//!
//! // Defaults: "----" marker, label paths on, 10-wide columns
//! let config = ReportConfig::default();
//!
//! // From YAML
//! let config = ReportConfig::from_yaml("report.yaml")?;
//! ```
//!
//! # YAML Schema v1
//!
//! ```yaml
//! version: 1
//! no_path_marker: "----"
//! show_labels: true
//! show_self_pairs: false
//! column_width: 10
//! ```

pub mod error;

pub use error::{ConfigError, ConfigResult};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::shared::constants::report::{COLUMN_WIDTH, MAX_COLUMN_WIDTH, NO_PATH_MARKER};

/// Supported schema versions
const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Rendering options for shortest-path and traversal reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rendered in place of a distance for unreachable pairs
    pub no_path_marker: String,

    /// Print the label of every vertex on a reported path
    pub show_labels: bool,

    /// Include `i -> i` rows in the all-pairs report
    pub show_self_pairs: bool,

    /// Width of numeric columns
    pub column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            no_path_marker: NO_PATH_MARKER.to_string(),
            show_labels: true,
            show_self_pairs: false,
            column_width: COLUMN_WIDTH,
        }
    }
}

/// YAML Schema v1
///
/// Every field except `version` is optional and falls back to the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportConfigFileV1 {
    #[serde(default)]
    version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    no_path_marker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_labels: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_self_pairs: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    column_width: Option<usize>,
}

impl ReportConfig {
    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ReportConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            no_path_marker: file.no_path_marker.unwrap_or(defaults.no_path_marker),
            show_labels: file.show_labels.unwrap_or(defaults.show_labels),
            show_self_pairs: file.show_self_pairs.unwrap_or(defaults.show_self_pairs),
            column_width: file.column_width.unwrap_or(defaults.column_width),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ReportConfigFileV1 {
            version: Some(1),
            no_path_marker: Some(self.no_path_marker.clone()),
            show_labels: Some(self.show_labels),
            show_self_pairs: Some(self.show_self_pairs),
            column_width: Some(self.column_width),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let marker = self.no_path_marker.trim();
        if marker.is_empty() {
            return Err(ConfigError::invalid(
                "no_path_marker",
                format!("{:?}", self.no_path_marker),
                "The marker must be visible, e.g. \"----\".",
            ));
        }
        if marker.parse::<i64>().is_ok() {
            return Err(ConfigError::invalid(
                "no_path_marker",
                &self.no_path_marker,
                "The marker must not look like a distance.",
            ));
        }
        if self.column_width == 0 || self.column_width > MAX_COLUMN_WIDTH {
            return Err(ConfigError::invalid(
                "column_width",
                self.column_width,
                format!("Use a width between 1 and {}.", MAX_COLUMN_WIDTH),
            ));
        }
        Ok(())
    }
}
