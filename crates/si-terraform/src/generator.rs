//! Assembles block fragments into complete Terraform files.

use std::fs;
use std::path::{Path, PathBuf};

use si_protocol::ProvisionConfig;

use crate::blocks;
use crate::error::{TerraformError, TerraformResult};

/// Renders a `ProvisionConfig` into the three standard Terraform files.
pub struct TerraformGenerator {
    config: ProvisionConfig,
}

impl TerraformGenerator {
    pub fn new(config: ProvisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Render all files. Infallible — unsupported combinations degrade to
    /// comment lines inside the affected fragment.
    pub fn render(&self) -> TerraformFiles {
        let main_tf = [
            blocks::provider::render(&self.config),
            blocks::network::render(&self.config),
            blocks::security::render(&self.config),
            blocks::compute::render(&self.config),
            blocks::database::render(&self.config),
            blocks::monitoring::render(&self.config),
        ]
        .concat();

        TerraformFiles {
            main_tf,
            variables_tf: blocks::vars::variables(&self.config),
            outputs_tf: blocks::vars::outputs(&self.config),
        }
    }
}

/// Rendered Terraform file contents, ready to write.
#[derive(Debug, Clone)]
pub struct TerraformFiles {
    pub main_tf: String,
    pub variables_tf: String,
    pub outputs_tf: String,
}

impl TerraformFiles {
    /// `(file name, contents)` pairs in conventional order.
    pub fn named(&self) -> [(&'static str, &str); 3] {
        [
            ("main.tf", self.main_tf.as_str()),
            ("variables.tf", self.variables_tf.as_str()),
            ("outputs.tf", self.outputs_tf.as_str()),
        ]
    }

    /// Write the three files into `dir`, creating it if needed.
    /// Returns the written paths.
    pub fn write_to(&self, dir: &Path) -> TerraformResult<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| TerraformError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(3);
        for (name, contents) in self.named() {
            let path = dir.join(name);
            fs::write(&path, contents).map_err(|source| TerraformError::WriteFile {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote terraform file");
            written.push(path);
        }

        tracing::info!(dir = %dir.display(), "terraform files generated");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use si_protocol::{CloudProvider, MonitoringChoice};

    #[test]
    fn main_tf_concatenates_blocks_in_order() {
        let files = TerraformGenerator::new(ProvisionConfig::default()).render();
        let provider_pos = files.main_tf.find(r#"provider "aws""#).unwrap();
        let vpc_pos = files.main_tf.find(r#"resource "aws_vpc""#).unwrap();
        let sg_pos = files.main_tf.find(r#"resource "aws_security_group""#).unwrap();
        let instance_pos = files.main_tf.find(r#"resource "aws_instance""#).unwrap();
        let db_pos = files.main_tf.find(r#"resource "aws_db_instance""#).unwrap();
        assert!(provider_pos < vpc_pos);
        assert!(vpc_pos < sg_pos);
        assert!(sg_pos < instance_pos);
        assert!(instance_pos < db_pos);
        // default config disables monitoring
        assert!(files.main_tf.contains("# Monitoring disabled by user choice"));
    }

    #[test]
    fn render_covers_all_three_files() {
        let files = TerraformGenerator::new(ProvisionConfig::default()).render();
        assert!(files.variables_tf.contains(r#"variable "region""#));
        assert!(files.outputs_tf.contains(r#"output "instance_id""#));
    }

    #[test]
    fn monitoring_enabled_lands_in_main_tf() {
        let config = ProvisionConfig {
            monitoring: MonitoringChoice::Enabled,
            ..Default::default()
        };
        let files = TerraformGenerator::new(config).render();
        assert!(files.main_tf.contains("aws_cloudwatch_metric_alarm"));
    }

    #[test]
    fn write_to_creates_directory_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("stack");
        let files = TerraformGenerator::new(ProvisionConfig::default()).render();

        let written = files.write_to(&target).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists(), "{} should exist", path.display());
        }
        let main = std::fs::read_to_string(target.join("main.tf")).unwrap();
        assert!(main.contains(r#"provider "aws""#));
    }

    #[test]
    fn write_to_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = TerraformGenerator::new(ProvisionConfig::default()).render();
        files.write_to(dir.path()).unwrap();

        let gcp = ProvisionConfig {
            provider: CloudProvider::Gcp,
            ..Default::default()
        };
        TerraformGenerator::new(gcp)
            .render()
            .write_to(dir.path())
            .unwrap();
        let main = std::fs::read_to_string(dir.path().join("main.tf")).unwrap();
        assert!(main.contains(r#"provider "google""#));
        assert!(!main.contains(r#"provider "aws""#));
    }
}
