//! Terraform configuration rendering for SpeakInfra.
//!
//! Turns a `si_protocol::ProvisionConfig` into `main.tf`, `variables.tf`,
//! and `outputs.tf` text for AWS, Azure, or GCP. Rendering is pure string
//! templating keyed by the config's typed choices; the only fallible
//! operation is writing the files to disk.

pub mod blocks;
pub mod error;
pub mod generator;

// Re-export key types for convenience
pub use error::{TerraformError, TerraformResult};
pub use generator::{TerraformFiles, TerraformGenerator};
