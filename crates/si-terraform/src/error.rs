//! Terraform rendering error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing rendered configuration to disk.
///
/// Rendering itself is infallible — every `ProvisionConfig` produces text,
/// with unsupported combinations degrading to explanatory comments.
#[derive(Debug, Error)]
pub enum TerraformError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for Terraform results.
pub type TerraformResult<T> = Result<T, TerraformError>;
