//! `variables.tf` and `outputs.tf` content.

use si_protocol::{CloudProvider, ProvisionConfig};

pub fn variables(config: &ProvisionConfig) -> String {
    let mut out = format!(
        r#"
variable "region" {{
  description = "Cloud region"
  type        = string
  default     = "{region}"
}}

variable "vpc_cidr" {{
  description = "VPC CIDR block"
  type        = string
  default     = "10.0.0.0/16"
}}

variable "subnet_cidr" {{
  description = "Subnet CIDR block"
  type        = string
  default     = "10.0.1.0/24"
}}

variable "db_username" {{
  description = "Database administrator username"
  type        = string
  default     = "admin"
}}

variable "db_password" {{
  description = "Database administrator password"
  type        = string
  sensitive   = true
}}

variable "admin_ip" {{
  description = "Admin IP for SSH access"
  type        = string
  default     = "0.0.0.0/0"
}}
"#,
        region = config.region,
    );

    if config.provider == CloudProvider::Azure {
        out.push_str(
            r#"
variable "resource_group_name" {
  description = "Resource group name"
  type        = string
  default     = "main-resources"
}
"#,
        );
    }

    if config.provider == CloudProvider::Gcp {
        out.push_str(
            r#"
variable "project_id" {
  description = "GCP Project ID"
  type        = string
}
"#,
        );
    }

    out
}

pub fn outputs(config: &ProvisionConfig) -> String {
    match config.provider {
        CloudProvider::Aws => AWS_OUTPUTS.to_string(),
        CloudProvider::Azure => AZURE_OUTPUTS.to_string(),
        CloudProvider::Gcp => GCP_OUTPUTS.to_string(),
    }
}

const AWS_OUTPUTS: &str = r#"
output "instance_id" {
  description = "EC2 instance ID"
  value       = aws_instance.main.id
}

output "instance_public_ip" {
  description = "Public IP address"
  value       = aws_instance.main.public_ip
}

output "database_endpoint" {
  description = "Database endpoint"
  value       = try(aws_db_instance.main.endpoint, "N/A")
}
"#;

const AZURE_OUTPUTS: &str = r#"
output "vm_id" {
  description = "Virtual machine ID"
  value       = azurerm_linux_virtual_machine.main.id
}

output "vm_private_ip" {
  description = "Private IP address"
  value       = azurerm_network_interface.main.private_ip_address
}
"#;

const GCP_OUTPUTS: &str = r#"
output "instance_id" {
  description = "Compute instance ID"
  value       = google_compute_instance.main.id
}

output "instance_external_ip" {
  description = "External IP address"
  value       = google_compute_instance.main.network_interface[0].access_config[0].nat_ip
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_default_comes_from_config() {
        let config = ProvisionConfig {
            region: "eu-west-1".into(),
            ..Default::default()
        };
        assert!(variables(&config).contains(r#"default     = "eu-west-1""#));
    }

    #[test]
    fn db_password_is_sensitive() {
        assert!(variables(&ProvisionConfig::default()).contains("sensitive   = true"));
    }

    #[test]
    fn azure_adds_resource_group_variable() {
        let config = ProvisionConfig {
            provider: CloudProvider::Azure,
            ..Default::default()
        };
        assert!(variables(&config).contains(r#"variable "resource_group_name""#));
    }

    #[test]
    fn gcp_requires_project_id() {
        let config = ProvisionConfig {
            provider: CloudProvider::Gcp,
            ..Default::default()
        };
        let text = variables(&config);
        assert!(text.contains(r#"variable "project_id""#));
        // project_id has no default — it must be supplied
        let project_block = text.split(r#"variable "project_id""#).nth(1).unwrap();
        assert!(!project_block.contains("default"));
    }

    #[test]
    fn outputs_match_provider() {
        assert!(outputs(&ProvisionConfig::default()).contains("aws_instance.main.public_ip"));

        let azure = ProvisionConfig {
            provider: CloudProvider::Azure,
            ..Default::default()
        };
        assert!(outputs(&azure).contains("azurerm_linux_virtual_machine.main.id"));

        let gcp = ProvisionConfig {
            provider: CloudProvider::Gcp,
            ..Default::default()
        };
        assert!(outputs(&gcp).contains("nat_ip"));
    }
}
