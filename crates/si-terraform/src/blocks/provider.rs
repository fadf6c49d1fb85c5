//! `terraform` and `provider` blocks.

use si_protocol::{CloudProvider, ProvisionConfig};

pub fn render(config: &ProvisionConfig) -> String {
    match config.provider {
        CloudProvider::Aws => AWS.to_string(),
        CloudProvider::Azure => AZURE.to_string(),
        CloudProvider::Gcp => GCP.to_string(),
    }
}

const AWS: &str = r#"
terraform {
  required_version = ">= 1.0"
  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }
  }
}

provider "aws" {
  region = var.region
}
"#;

const AZURE: &str = r#"
terraform {
  required_version = ">= 1.0"
  required_providers {
    azurerm = {
      source  = "hashicorp/azurerm"
      version = "~> 3.0"
    }
  }
}

provider "azurerm" {
  features {}
}
"#;

const GCP: &str = r#"
terraform {
  required_version = ">= 1.0"
  required_providers {
    google = {
      source  = "hashicorp/google"
      version = "~> 5.0"
    }
  }
}

provider "google" {
  project = var.project_id
  region  = var.region
}
"#;
