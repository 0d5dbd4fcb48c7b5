use crate::{ConfigError, MaterialPalette, TreeDefinitionRegistry};

use serde::Deserialize;
use std::fs;
use std::path::Path;

// Top-level timber config file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TimberConfig {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub trees: Vec<TreeDefinitionConfig>,
}

impl TimberConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;

        Self::from_toml_str(&text)
    }

    /// Builds the registry, interning every material name into `palette`.
    pub fn build_registry(
        &self,
        palette: &mut MaterialPalette,
    ) -> Result<TreeDefinitionRegistry, ConfigError> {
        TreeDefinitionRegistry::from_config(&self.trees, palette)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TreeDefinitionConfig {
    pub key: String,
    #[serde(default)]
    pub log_materials: Vec<String>,
    #[serde(default)]
    pub leaf_materials: Vec<String>,
    #[serde(default = "default_max_distance")]
    pub max_log_distance_from_trunk: u32,
    #[serde(default = "default_max_distance")]
    pub max_leaf_distance_from_log: u32,
    #[serde(default)]
    pub detect_leaves_diagonally: bool,
    #[serde(default)]
    pub topple_cooldown_override: Option<u32>,
}

fn default_max_distance() -> u32 {
    6
}

/// Host-wide detection settings. Read-only while a detection runs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Fewer detected logs than this and the voxel is treated as a stump or decoration.
    pub logs_required_for_tree: usize,
    pub leaves_required_for_tree: usize,
    /// Restricts branch growth to the upper 3x2x3 shell and stops recursing at or below the break
    /// height. For horizontal trees it also stops the trunk growing back past the break point.
    pub only_detect_logs_upwards: bool,
    pub detect_leaves: bool,
    pub vertical: VerticalFeatures,
    pub horizontal: HorizontalFeatures,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            logs_required_for_tree: 1,
            leaves_required_for_tree: 0,
            only_detect_logs_upwards: true,
            detect_leaves: true,
            vertical: VerticalFeatures::default(),
            horizontal: HorizontalFeatures::default(),
        }
    }
}

/// Toggles for vertical detection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct VerticalFeatures {
    pub branch_growth: bool,
    /// Only accept branch logs within `max_log_distance_from_trunk` of the trunk.
    pub distance_gate: bool,
}

impl Default for VerticalFeatures {
    fn default() -> Self {
        Self {
            branch_growth: true,
            distance_gate: true,
        }
    }
}

/// Toggles for horizontal detection. The simplified build turns off `branch_growth` and
/// `axis_fallback`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct HorizontalFeatures {
    pub branch_growth: bool,
    /// Probe the east-west axis when the north-south axis has no connected logs.
    pub axis_fallback: bool,
    pub distance_gate: bool,
}

impl HorizontalFeatures {
    pub fn simplified() -> Self {
        Self {
            branch_growth: false,
            axis_fallback: false,
            distance_gate: true,
        }
    }
}

impl Default for HorizontalFeatures {
    fn default() -> Self {
        Self {
            branch_growth: true,
            axis_fallback: true,
            distance_gate: true,
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
