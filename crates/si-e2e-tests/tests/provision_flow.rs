//! E2E tests for the full pipeline: sentence → config → Terraform files.

use si_assistant::pipeline::provision_from_detection;
use si_intent::{IntentParser, validate_intent};
use si_protocol::{CloudProvider, DatabaseEngine, InteractionMode, RequestEnvelope};
use si_terraform::{TerraformError, TerraformGenerator};

#[test]
fn e2e_sentence_to_terraform_files() {
    let parser = IntentParser::new();
    let envelope = RequestEnvelope::new(
        InteractionMode::Text,
        "Deploy a small Ubuntu server on AWS with MySQL",
    );

    let detection = parser.detect(&envelope.raw_text);
    assert!(validate_intent(&detection));

    let config = provision_from_detection(&detection, None);
    assert_eq!(config.provider, CloudProvider::Aws);
    assert_eq!(config.instance_type, "t2.micro");
    assert_eq!(config.database, Some(DatabaseEngine::Mysql));

    let dir = tempfile::tempdir().unwrap();
    let written = TerraformGenerator::new(config)
        .render()
        .write_to(dir.path())
        .unwrap();
    assert_eq!(written.len(), 3);

    let main = std::fs::read_to_string(dir.path().join("main.tf")).unwrap();
    assert!(main.contains(r#"provider "aws""#));
    assert!(main.contains(r#"data "aws_ami" "ubuntu""#));
    assert!(main.contains(r#"engine                 = "mysql""#));

    let variables = std::fs::read_to_string(dir.path().join("variables.tf")).unwrap();
    assert!(variables.contains(r#"default     = "us-east-1""#));

    let outputs = std::fs::read_to_string(dir.path().join("outputs.tf")).unwrap();
    assert!(outputs.contains(r#"output "instance_public_ip""#));
}

#[test]
fn e2e_negated_database_never_reaches_terraform() {
    let parser = IntentParser::new();
    let detection = parser.detect("Launch a medium server on azure without a database");
    assert!(validate_intent(&detection));

    let config = provision_from_detection(&detection, None);
    assert_eq!(config.provider, CloudProvider::Azure);
    assert_eq!(config.database, None);

    let files = TerraformGenerator::new(config).render();
    assert!(files.main_tf.contains("# Database excluded by request"));
    assert!(!files.main_tf.contains("azurerm_mysql_server"));
}

#[test]
fn e2e_gcp_flow_renders_google_stack() {
    let parser = IntentParser::new();
    let detection = parser.detect("Provision a large container host on google cloud with postgres");
    assert!(validate_intent(&detection));

    let config = provision_from_detection(&detection, None);
    assert_eq!(config.provider, CloudProvider::Gcp);
    assert_eq!(config.instance_type, "n2-standard-2");

    let files = TerraformGenerator::new(config).render();
    assert!(files.main_tf.contains(r#"provider "google""#));
    assert!(files.main_tf.contains(r#"database_version = "POSTGRES_15""#));
    assert!(files.variables_tf.contains(r#"variable "project_id""#));
}

#[test]
fn e2e_write_failure_surfaces_as_terraform_error() {
    let dir = tempfile::tempdir().unwrap();
    // occupy the target path with a plain file so create_dir_all fails
    let blocked = dir.path().join("stack");
    std::fs::write(&blocked, "in the way").unwrap();

    let files = TerraformGenerator::new(Default::default()).render();
    let err = files.write_to(&blocked).unwrap_err();
    assert!(matches!(err, TerraformError::CreateDir { .. }));
    assert!(err.to_string().contains("stack"));
}
