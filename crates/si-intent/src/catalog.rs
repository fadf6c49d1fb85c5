//! Static category and action tables — the vocabulary the parser matches.
//!
//! Pure data. Declaration order is load-bearing in two places: categories
//! are scanned in table order (fixes the order of `DetectionResult`
//! entries), and action kinds are tried in table order (create wins ties
//! over delete/modify/query).

use si_protocol::{ActionKind, CloudProvider};

/// One detectable resource category: its trigger keywords and the
/// Terraform resource identifiers it maps to per provider.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    /// Case-insensitive whole-word/phrase match targets.
    pub keywords: &'static [&'static str],
    /// Provider tag → resource identifiers, empty for tag-only categories.
    pub resources: &'static [(CloudProvider, &'static [&'static str])],
}

/// One action kind and the verbs that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct ActionDef {
    pub kind: ActionKind,
    pub verbs: &'static [&'static str],
}

/// The builtin category table, in scan order.
pub const CATALOG: &[CategoryDef] = &[
    CategoryDef {
        name: "networking",
        keywords: &[
            "vpc",
            "vnet",
            "network",
            "subnet",
            "gateway",
            "load balancer",
            "alb",
            "nlb",
            "vpn",
            "dns",
            "route",
            "peering",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &[
                    "vpc",
                    "subnet",
                    "internet_gateway",
                    "nat_gateway",
                    "route_table",
                    "elastic_load_balancer",
                    "application_load_balancer",
                ],
            ),
            (
                CloudProvider::Azure,
                &["virtual_network", "subnet", "vpn_gateway", "load_balancer"],
            ),
            (
                CloudProvider::Gcp,
                &[
                    "compute_network",
                    "compute_subnetwork",
                    "compute_vpn_gateway",
                    "compute_forwarding_rule",
                ],
            ),
        ],
    },
    CategoryDef {
        name: "compute",
        keywords: &[
            "server",
            "instance",
            "ec2",
            "vm",
            "virtual machine",
            "compute",
            "container",
            "auto scaling",
            "asg",
            "vmss",
            "small",
            "medium",
            "large",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["ec2_instance", "autoscaling_group", "launch_template"],
            ),
            (
                CloudProvider::Azure,
                &[
                    "linux_virtual_machine",
                    "windows_virtual_machine",
                    "virtual_machine_scale_set",
                ],
            ),
            (
                CloudProvider::Gcp,
                &["compute_instance", "compute_instance_group_manager"],
            ),
        ],
    },
    CategoryDef {
        name: "database",
        keywords: &[
            "database",
            "db",
            "rds",
            "sql",
            "mysql",
            "postgres",
            "postgresql",
            "dynamodb",
            "cosmosdb",
            "firestore",
            "mongodb",
            "mariadb",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["db_instance", "dynamodb_table", "rds_cluster"],
            ),
            (
                CloudProvider::Azure,
                &[
                    "mssql_server",
                    "mysql_server",
                    "postgresql_server",
                    "cosmosdb_account",
                ],
            ),
            (
                CloudProvider::Gcp,
                &["sql_database_instance", "firestore_database"],
            ),
        ],
    },
    CategoryDef {
        name: "storage",
        keywords: &[
            "storage",
            "bucket",
            "blob",
            "s3",
            "ebs",
            "disk",
            "volume",
            "file storage",
            "object storage",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["s3_bucket", "ebs_volume", "efs_file_system"],
            ),
            (
                CloudProvider::Azure,
                &["storage_account", "storage_blob", "managed_disk"],
            ),
            (CloudProvider::Gcp, &["storage_bucket", "compute_disk"]),
        ],
    },
    CategoryDef {
        name: "security",
        keywords: &[
            "iam",
            "role",
            "policy",
            "security group",
            "firewall",
            "acl",
            "kms",
            "key vault",
            "secrets",
            "certificate",
            "strict",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["iam_role", "iam_policy", "security_group", "kms_key"],
            ),
            (
                CloudProvider::Azure,
                &["role_assignment", "key_vault", "network_security_group"],
            ),
            (
                CloudProvider::Gcp,
                &["project_iam_binding", "compute_firewall", "kms_crypto_key"],
            ),
        ],
    },
    CategoryDef {
        name: "monitoring",
        keywords: &[
            "monitor",
            "monitoring",
            "logs",
            "alerts",
            "metrics",
            "cloudwatch",
            "log analytics",
            "stackdriver",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &[
                    "cloudwatch_log_group",
                    "cloudwatch_metric_alarm",
                    "sns_topic",
                ],
            ),
            (
                CloudProvider::Azure,
                &["monitor_metric_alert", "log_analytics_workspace"],
            ),
            (
                CloudProvider::Gcp,
                &["monitoring_alert_policy", "logging_metric"],
            ),
        ],
    },
    CategoryDef {
        name: "container",
        keywords: &[
            "container",
            "docker",
            "kubernetes",
            "k8s",
            "ecs",
            "eks",
            "aks",
            "gke",
            "fargate",
            "pod",
            "deployment",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["ecs_cluster", "ecs_service", "eks_cluster"],
            ),
            (
                CloudProvider::Azure,
                &["kubernetes_cluster", "container_group"],
            ),
            (
                CloudProvider::Gcp,
                &["container_cluster", "container_node_pool"],
            ),
        ],
    },
    CategoryDef {
        name: "serverless",
        keywords: &[
            "lambda",
            "function",
            "serverless",
            "cloud function",
            "azure function",
        ],
        resources: &[
            (
                CloudProvider::Aws,
                &["lambda_function", "api_gateway_rest_api"],
            ),
            (CloudProvider::Azure, &["function_app"]),
            (CloudProvider::Gcp, &["cloudfunctions_function"]),
        ],
    },
    CategoryDef {
        name: "provider",
        keywords: &[
            "aws",
            "amazon web services",
            "azure",
            "microsoft azure",
            "gcp",
            "google cloud",
            "google cloud platform",
        ],
        resources: &[],
    },
    CategoryDef {
        name: "os",
        keywords: &[
            "ubuntu",
            "windows",
            "amazon linux",
            "centos",
            "rhel",
            "debian",
            "fedora",
        ],
        resources: &[],
    },
];

/// The builtin action lexicon, in priority order.
pub const ACTIONS: &[ActionDef] = &[
    ActionDef {
        kind: ActionKind::Create,
        verbs: &[
            "create",
            "deploy",
            "launch",
            "provision",
            "setup",
            "set up",
            "add",
            "build",
        ],
    },
    ActionDef {
        kind: ActionKind::Delete,
        verbs: &["delete", "remove", "destroy", "terminate", "tear down"],
    },
    ActionDef {
        kind: ActionKind::Modify,
        verbs: &["modify", "update", "change", "edit", "configure"],
    },
    ActionDef {
        kind: ActionKind::Query,
        verbs: &["show", "list", "describe", "get", "what", "which"],
    },
];
