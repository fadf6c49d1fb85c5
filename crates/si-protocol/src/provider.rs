use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical cloud provider tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    #[default]
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Gcp => "gcp",
        }
    }

    /// Marketing name, for user-facing output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aws => "Amazon Web Services",
            Self::Azure => "Microsoft Azure",
            Self::Gcp => "Google Cloud Platform",
        }
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized provider tag.
#[derive(Debug, Error)]
#[error("unknown cloud provider tag: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for CloudProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            "gcp" => Ok(Self::Gcp),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}
