//! VPC / VNet / network blocks.

use si_protocol::{CloudProvider, NetworkingChoice, ProvisionConfig};

pub fn render(config: &ProvisionConfig) -> String {
    match (config.provider, config.networking) {
        (CloudProvider::Aws, NetworkingChoice::CustomVpc) => AWS_CUSTOM.to_string(),
        (CloudProvider::Aws, NetworkingChoice::DefaultVpc) => "# Using default VPC\n".to_string(),
        // Azure always needs a resource group, even on the default network
        (CloudProvider::Azure, NetworkingChoice::CustomVpc) => AZURE_CUSTOM.to_string(),
        (CloudProvider::Azure, NetworkingChoice::DefaultVpc) => AZURE_GROUP_ONLY.to_string(),
        (CloudProvider::Gcp, NetworkingChoice::CustomVpc) => GCP_CUSTOM.to_string(),
        (CloudProvider::Gcp, NetworkingChoice::DefaultVpc) => {
            "# Using default network\n".to_string()
        }
    }
}

const AWS_CUSTOM: &str = r#"
# VPC Configuration
resource "aws_vpc" "main" {
  cidr_block           = var.vpc_cidr
  enable_dns_hostnames = true
  enable_dns_support   = true

  tags = {
    Name = "main-vpc"
  }
}

resource "aws_subnet" "public" {
  vpc_id                  = aws_vpc.main.id
  cidr_block              = var.subnet_cidr
  map_public_ip_on_launch = true

  tags = {
    Name = "public-subnet"
  }
}

resource "aws_internet_gateway" "main" {
  vpc_id = aws_vpc.main.id

  tags = {
    Name = "main-igw"
  }
}

resource "aws_route_table" "public" {
  vpc_id = aws_vpc.main.id

  route {
    cidr_block = "0.0.0.0/0"
    gateway_id = aws_internet_gateway.main.id
  }

  tags = {
    Name = "public-rt"
  }
}

resource "aws_route_table_association" "public" {
  subnet_id      = aws_subnet.public.id
  route_table_id = aws_route_table.public.id
}
"#;

const AZURE_CUSTOM: &str = r#"
resource "azurerm_resource_group" "main" {
  name     = var.resource_group_name
  location = var.region
}

resource "azurerm_virtual_network" "main" {
  name                = "main-vnet"
  address_space       = [var.vpc_cidr]
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name
}

resource "azurerm_subnet" "main" {
  name                 = "main-subnet"
  resource_group_name  = azurerm_resource_group.main.name
  virtual_network_name = azurerm_virtual_network.main.name
  address_prefixes     = [var.subnet_cidr]
}
"#;

const AZURE_GROUP_ONLY: &str = r#"
resource "azurerm_resource_group" "main" {
  name     = var.resource_group_name
  location = var.region
}
"#;

const GCP_CUSTOM: &str = r#"
resource "google_compute_network" "main" {
  name                    = "main-network"
  auto_create_subnetworks = false
}

resource "google_compute_subnetwork" "main" {
  name          = "main-subnet"
  ip_cidr_range = var.subnet_cidr
  region        = var.region
  network       = google_compute_network.main.id
}
"#;
