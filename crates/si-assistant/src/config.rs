//! Assistant configuration, loadable from TOML.

use std::path::PathBuf;

use serde::Deserialize;
use si_protocol::InteractionMode;

/// Top-level configuration for the assistant front-end.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Where generated Terraform files land.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Interaction mode tag stamped on each request envelope.
    #[serde(default)]
    pub mode: InteractionMode,
    /// Region override. None picks the provider's default region.
    #[serde(default)]
    pub region: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./terraform")
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            mode: InteractionMode::default(),
            region: None,
        }
    }
}

impl AssistantConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
