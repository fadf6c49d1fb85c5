//! Detection → `ProvisionConfig` derivation.
//!
//! Fills a complete provisioning config from whatever the sentence
//! mentioned, falling back to the same defaults the interactive wizard
//! would offer first. Every fallback is logged at debug level so a user
//! can see which parameters were assumed rather than requested.

use si_intent::{extract_os, normalize_provider};
use si_protocol::{
    CloudProvider, DatabaseEngine, DetectionResult, MonitoringChoice, NetworkingChoice,
    ProvisionConfig, SecurityChoice,
};

/// Derive a provisioning config from a validated detection.
pub fn provision_from_detection(
    detection: &DetectionResult,
    region_override: Option<&str>,
) -> ProvisionConfig {
    let provider = normalize_provider(detection).unwrap_or_else(|| {
        tracing::debug!("no provider detected, assuming aws");
        CloudProvider::default()
    });

    let region = region_override
        .map(str::to_string)
        .unwrap_or_else(|| default_region(provider).to_string());

    let operating_system = extract_os(detection).unwrap_or_else(|| {
        tracing::debug!("no operating system detected, assuming Ubuntu");
        "Ubuntu".to_string()
    });

    ProvisionConfig {
        provider,
        region,
        instance_type: instance_type(provider, detection).to_string(),
        operating_system,
        database: database_engine(detection),
        networking: networking_choice(detection),
        security: security_choice(detection),
        monitoring: monitoring_choice(detection),
        ..Default::default()
    }
}

/// Provider default regions, matching the first entry of the wizard's menus.
fn default_region(provider: CloudProvider) -> &'static str {
    match provider {
        CloudProvider::Aws => "us-east-1",
        CloudProvider::Azure => "eastus",
        CloudProvider::Gcp => "us-central1",
    }
}

/// Size keyword ("small"/"medium"/"large") → provider instance type.
fn instance_type(provider: CloudProvider, detection: &DetectionResult) -> &'static str {
    let size = detection
        .keywords_for("compute")
        .into_iter()
        .flatten()
        .find_map(|kw| match kw.as_str() {
            "small" | "medium" | "large" => Some(kw.as_str()),
            _ => None,
        })
        .unwrap_or("small");

    match (provider, size) {
        (CloudProvider::Aws, "medium") => "t3.medium",
        (CloudProvider::Aws, "large") => "m5.large",
        (CloudProvider::Aws, _) => "t2.micro",
        (CloudProvider::Azure, "medium") => "Standard_B2s",
        (CloudProvider::Azure, "large") => "Standard_D2s_v3",
        (CloudProvider::Azure, _) => "Standard_B1s",
        (CloudProvider::Gcp, "medium") => "e2-medium",
        (CloudProvider::Gcp, "large") => "n2-standard-2",
        (CloudProvider::Gcp, _) => "e2-small",
    }
}

fn database_engine(detection: &DetectionResult) -> Option<DatabaseEngine> {
    if detection.is_negated("database") && !detection.matched("database") {
        return None;
    }
    let engine = detection
        .keywords_for("database")
        .into_iter()
        .flatten()
        .find_map(|kw| match kw.as_str() {
            "mysql" | "mariadb" => Some(DatabaseEngine::Mysql),
            "postgres" | "postgresql" => Some(DatabaseEngine::Postgres),
            "mongodb" => Some(DatabaseEngine::Mongodb),
            _ => None,
        })
        .unwrap_or_default();
    Some(engine)
}

fn networking_choice(detection: &DetectionResult) -> NetworkingChoice {
    if detection.is_negated("networking") && !detection.matched("networking") {
        NetworkingChoice::DefaultVpc
    } else {
        NetworkingChoice::CustomVpc
    }
}

fn security_choice(detection: &DetectionResult) -> SecurityChoice {
    let strict = detection
        .keywords_for("security")
        .into_iter()
        .flatten()
        .any(|kw| kw == "strict");
    if strict {
        SecurityChoice::Strict
    } else {
        SecurityChoice::Basic
    }
}

fn monitoring_choice(detection: &DetectionResult) -> MonitoringChoice {
    if detection.matched("monitoring") && !detection.is_negated("monitoring") {
        MonitoringChoice::Enabled
    } else {
        MonitoringChoice::Disabled
    }
}
