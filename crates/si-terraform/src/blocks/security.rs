//! Security group / firewall blocks.

use si_protocol::{CloudProvider, NetworkingChoice, ProvisionConfig, SecurityChoice};

pub fn render(config: &ProvisionConfig) -> String {
    match config.provider {
        CloudProvider::Aws => aws(config),
        CloudProvider::Azure => AZURE.to_string(),
        CloudProvider::Gcp => GCP.to_string(),
    }
}

fn aws(config: &ProvisionConfig) -> String {
    // On the default VPC the group attaches to it implicitly
    let vpc_line = match config.networking {
        NetworkingChoice::CustomVpc => "  vpc_id      = aws_vpc.main.id\n",
        NetworkingChoice::DefaultVpc => "",
    };
    match config.security {
        SecurityChoice::Strict => format!(
            r#"
resource "aws_security_group" "main" {{
  name        = "main-sg"
  description = "Strict security group with limited access"
{vpc_line}
  ingress {{
    description = "SSH from specific IP"
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = [var.admin_ip]
  }}

  ingress {{
    description = "HTTPS"
    from_port   = 443
    to_port     = 443
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }}

  egress {{
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }}

  tags = {{
    Name = "main-sg"
  }}
}}
"#
        ),
        SecurityChoice::Basic => format!(
            r#"
resource "aws_security_group" "main" {{
  name        = "main-sg"
  description = "Basic security group"
{vpc_line}
  ingress {{
    description = "SSH"
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }}

  ingress {{
    description = "HTTP"
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }}

  egress {{
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }}

  tags = {{
    Name = "main-sg"
  }}
}}
"#
        ),
    }
}

const AZURE: &str = r#"
resource "azurerm_network_security_group" "main" {
  name                = "main-nsg"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name

  security_rule {
    name                       = "SSH"
    priority                   = 1001
    direction                  = "Inbound"
    access                     = "Allow"
    protocol                   = "Tcp"
    source_port_range          = "*"
    destination_port_range     = "22"
    source_address_prefix      = "*"
    destination_address_prefix = "*"
  }
}
"#;

const GCP: &str = r#"
resource "google_compute_firewall" "ssh" {
  name    = "allow-ssh"
  network = google_compute_network.main.name

  allow {
    protocol = "tcp"
    ports    = ["22"]
  }

  source_ranges = ["0.0.0.0/0"]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_basic_opens_http() {
        let text = render(&ProvisionConfig::default());
        assert!(text.contains(r#"description = "Basic security group""#));
        assert!(text.contains("from_port   = 80"));
        assert!(text.contains("vpc_id      = aws_vpc.main.id"));
    }

    #[test]
    fn aws_strict_locks_ssh_to_admin_ip() {
        let config = ProvisionConfig {
            security: SecurityChoice::Strict,
            ..Default::default()
        };
        let text = render(&config);
        assert!(text.contains("cidr_blocks = [var.admin_ip]"));
        assert!(text.contains("from_port   = 443"));
        assert!(!text.contains("from_port   = 80\n"));
    }

    #[test]
    fn aws_default_vpc_omits_vpc_reference() {
        let config = ProvisionConfig {
            networking: NetworkingChoice::DefaultVpc,
            ..Default::default()
        };
        assert!(!render(&config).contains("aws_vpc.main.id"));
    }

    #[test]
    fn azure_and_gcp_open_ssh() {
        let azure = ProvisionConfig {
            provider: CloudProvider::Azure,
            ..Default::default()
        };
        assert!(render(&azure).contains(r#"destination_port_range     = "22""#));

        let gcp = ProvisionConfig {
            provider: CloudProvider::Gcp,
            ..Default::default()
        };
        assert!(render(&gcp).contains(r#"ports    = ["22"]"#));
    }
}
