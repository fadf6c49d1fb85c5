use serde::{Deserialize, Serialize};

use crate::provider::CloudProvider;

/// Database engine choices the renderer knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    #[default]
    Mysql,
    Postgres,
    Mongodb,
}

impl DatabaseEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Mongodb => "mongodb",
        }
    }
}

/// Networking layout for the generated stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NetworkingChoice {
    /// Use the provider's default network, emit no network resources.
    DefaultVpc,
    /// Emit a dedicated VPC/VNet with a public subnet and routing.
    #[default]
    CustomVpc,
}

/// Firewall posture for the generated security group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecurityChoice {
    /// SSH and HTTP open to the world.
    #[default]
    Basic,
    /// SSH restricted to an admin IP, HTTPS only.
    Strict,
}

/// Whether to emit monitoring resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringChoice {
    #[default]
    Disabled,
    Enabled,
}

/// Everything the Terraform renderer needs to emit a stack.
///
/// Field defaults mirror the assistant's fallbacks for parameters the
/// sentence never mentioned: AWS, us-east-1, a free-tier instance running
/// Ubuntu, a 20 GB MySQL database, a custom VPC, basic firewall, no
/// monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    #[serde(default)]
    pub provider: CloudProvider,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_instance_type")]
    pub instance_type: String,
    #[serde(default = "default_operating_system")]
    pub operating_system: String,
    /// `None` means the user excluded the database outright.
    #[serde(default = "default_database")]
    pub database: Option<DatabaseEngine>,
    #[serde(default = "default_storage_gb")]
    pub storage_gb: u32,
    #[serde(default)]
    pub networking: NetworkingChoice,
    #[serde(default)]
    pub security: SecurityChoice,
    #[serde(default)]
    pub monitoring: MonitoringChoice,
}

fn default_region() -> String {
    "us-east-1".into()
}
fn default_instance_type() -> String {
    "t2.micro".into()
}
fn default_operating_system() -> String {
    "Ubuntu".into()
}
fn default_database() -> Option<DatabaseEngine> {
    Some(DatabaseEngine::Mysql)
}
fn default_storage_gb() -> u32 {
    20
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            provider: CloudProvider::default(),
            region: default_region(),
            instance_type: default_instance_type(),
            operating_system: default_operating_system(),
            database: default_database(),
            storage_gb: default_storage_gb(),
            networking: NetworkingChoice::default(),
            security: SecurityChoice::default(),
            monitoring: MonitoringChoice::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_free_tier_aws() {
        let config = ProvisionConfig::default();
        assert_eq!(config.provider, CloudProvider::Aws);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.instance_type, "t2.micro");
        assert_eq!(config.operating_system, "Ubuntu");
        assert_eq!(config.database, Some(DatabaseEngine::Mysql));
        assert_eq!(config.storage_gb, 20);
        assert_eq!(config.networking, NetworkingChoice::CustomVpc);
        assert_eq!(config.security, SecurityChoice::Basic);
        assert_eq!(config.monitoring, MonitoringChoice::Disabled);
    }

    #[test]
    fn deserialize_empty_object_uses_defaults() {
        let config: ProvisionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider, CloudProvider::Aws);
        assert_eq!(config.database, Some(DatabaseEngine::Mysql));
    }

    #[test]
    fn deserialize_partial_override() {
        let json = r#"{
            "provider": "gcp",
            "region": "us-central1",
            "database": null,
            "monitoring": "enabled"
        }"#;
        let config: ProvisionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.provider, CloudProvider::Gcp);
        assert_eq!(config.region, "us-central1");
        assert_eq!(config.database, None);
        assert_eq!(config.monitoring, MonitoringChoice::Enabled);
        // untouched fields keep defaults
        assert_eq!(config.instance_type, "t2.micro");
    }

    #[test]
    fn choice_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&NetworkingChoice::CustomVpc).unwrap(),
            r#""custom_vpc""#
        );
        assert_eq!(
            serde_json::to_string(&SecurityChoice::Strict).unwrap(),
            r#""strict""#
        );
        assert_eq!(
            serde_json::to_string(&DatabaseEngine::Postgres).unwrap(),
            r#""postgres""#
        );
    }
}
