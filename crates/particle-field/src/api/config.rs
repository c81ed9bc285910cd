use serde::{Deserialize, Serialize};

use super::params::ParameterSet;

/// Startup configuration for a field, provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Initial parameter values.
    pub params: ParameterSet,
    /// RNG seed (default: 42). Equal seeds replay identical runs.
    pub seed: u64,
    /// Viewports at or below this width count as small devices (default: 768).
    pub small_device_width: f32,
    /// Surface height as a fraction of the viewport on small devices in
    /// normal mode (default: 0.6).
    pub small_device_height_ratio: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            params: ParameterSet::default(),
            seed: 42,
            small_device_width: 768.0,
            small_device_height_ratio: 0.6,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
