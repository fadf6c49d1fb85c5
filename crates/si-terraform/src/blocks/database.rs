//! Managed database blocks.

use si_protocol::{CloudProvider, DatabaseEngine, NetworkingChoice, ProvisionConfig};

pub fn render(config: &ProvisionConfig) -> String {
    let Some(engine) = config.database else {
        return "# Database excluded by request\n".to_string();
    };
    match config.provider {
        CloudProvider::Aws => aws(config, engine),
        CloudProvider::Azure => azure(config, engine),
        CloudProvider::Gcp => gcp(config, engine),
    }
}

fn aws(config: &ProvisionConfig, engine: DatabaseEngine) -> String {
    let version = match engine {
        DatabaseEngine::Mysql => "8.0",
        DatabaseEngine::Postgres => "15.3",
        DatabaseEngine::Mongodb => {
            return "# MongoDB not natively supported in AWS RDS\n".to_string();
        }
    };
    let subnet_group = match config.networking {
        NetworkingChoice::CustomVpc => AWS_SUBNET_GROUP,
        NetworkingChoice::DefaultVpc => "",
    };
    let subnet_group_line = match config.networking {
        NetworkingChoice::CustomVpc => {
            "  db_subnet_group_name   = aws_db_subnet_group.main.name\n"
        }
        NetworkingChoice::DefaultVpc => "",
    };
    format!(
        r#"{subnet_group}
resource "aws_db_instance" "main" {{
  identifier             = "main-database"
  engine                 = "{engine}"
  engine_version         = "{version}"
  instance_class         = "db.t3.micro"
  allocated_storage      = {storage}
  storage_type           = "gp2"
  db_name                = "mydb"
  username               = var.db_username
  password               = var.db_password
{subnet_group_line}  vpc_security_group_ids = [aws_security_group.main.id]
  skip_final_snapshot    = true

  tags = {{
    Name = "main-db"
  }}
}}
"#,
        engine = engine.as_str(),
        storage = config.storage_gb,
    )
}

const AWS_SUBNET_GROUP: &str = r#"
resource "aws_db_subnet_group" "main" {
  name       = "main-db-subnet"
  subnet_ids = [aws_subnet.public.id]
}
"#;

fn azure(config: &ProvisionConfig, engine: DatabaseEngine) -> String {
    let storage_mb = config.storage_gb * 1024;
    match engine {
        DatabaseEngine::Mysql => format!(
            r#"
resource "azurerm_mysql_server" "main" {{
  name                = "main-mysql-server"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name

  administrator_login          = var.db_username
  administrator_login_password = var.db_password

  sku_name   = "B_Gen5_2"
  storage_mb = {storage_mb}
  version    = "8.0"

  ssl_enforcement_enabled = true
}}
"#
        ),
        DatabaseEngine::Postgres => format!(
            r#"
resource "azurerm_postgresql_server" "main" {{
  name                = "main-postgresql-server"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name

  administrator_login          = var.db_username
  administrator_login_password = var.db_password

  sku_name   = "B_Gen5_2"
  storage_mb = {storage_mb}
  version    = "11"

  ssl_enforcement_enabled = true
}}
"#
        ),
        DatabaseEngine::Mongodb => {
            "# MongoDB on Azure requires Cosmos DB, not covered by this template\n".to_string()
        }
    }
}

fn gcp(_config: &ProvisionConfig, engine: DatabaseEngine) -> String {
    // Cloud SQL has no MongoDB tier; fall back to MySQL
    let version = match engine {
        DatabaseEngine::Postgres => "POSTGRES_15",
        DatabaseEngine::Mysql | DatabaseEngine::Mongodb => "MYSQL_8_0",
    };
    format!(
        r#"
resource "google_sql_database_instance" "main" {{
  name             = "main-db-instance"
  database_version = "{version}"
  region           = var.region

  settings {{
    tier = "db-f1-micro"

    ip_configuration {{
      ipv4_enabled = true
      authorized_networks {{
        value = "0.0.0.0/0"
      }}
    }}
  }}
}}

resource "google_sql_user" "main" {{
  name     = var.db_username
  instance = google_sql_database_instance.main.name
  password = var.db_password
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_mysql_with_versioned_engine() {
        let text = render(&ProvisionConfig::default());
        assert!(text.contains(r#"engine                 = "mysql""#));
        assert!(text.contains(r#"engine_version         = "8.0""#));
        assert!(text.contains("allocated_storage      = 20"));
        assert!(text.contains(r#"resource "aws_db_subnet_group" "main""#));
    }

    #[test]
    fn aws_postgres_version() {
        let config = ProvisionConfig {
            database: Some(DatabaseEngine::Postgres),
            ..Default::default()
        };
        assert!(render(&config).contains(r#"engine_version         = "15.3""#));
    }

    #[test]
    fn aws_mongodb_degrades_to_comment() {
        let config = ProvisionConfig {
            database: Some(DatabaseEngine::Mongodb),
            ..Default::default()
        };
        assert_eq!(render(&config), "# MongoDB not natively supported in AWS RDS\n");
    }

    #[test]
    fn excluded_database_renders_comment() {
        let config = ProvisionConfig {
            database: None,
            ..Default::default()
        };
        assert_eq!(render(&config), "# Database excluded by request\n");
    }

    #[test]
    fn azure_storage_is_in_megabytes() {
        let config = ProvisionConfig {
            provider: CloudProvider::Azure,
            storage_gb: 50,
            ..Default::default()
        };
        assert!(render(&config).contains("storage_mb = 51200"));
    }

    #[test]
    fn gcp_postgres_version_tag() {
        let config = ProvisionConfig {
            provider: CloudProvider::Gcp,
            database: Some(DatabaseEngine::Postgres),
            ..Default::default()
        };
        let text = render(&config);
        assert!(text.contains(r#"database_version = "POSTGRES_15""#));
        assert!(text.contains(r#"resource "google_sql_user" "main""#));
    }

    #[test]
    fn aws_custom_storage_size() {
        let config = ProvisionConfig {
            storage_gb: 100,
            ..Default::default()
        };
        assert!(render(&config).contains("allocated_storage      = 100"));
    }
}
