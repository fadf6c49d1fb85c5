//! Monitoring / alerting blocks.

use si_protocol::{CloudProvider, MonitoringChoice, ProvisionConfig};

pub fn render(config: &ProvisionConfig) -> String {
    if config.monitoring == MonitoringChoice::Disabled {
        return "# Monitoring disabled by user choice\n".to_string();
    }
    match config.provider {
        CloudProvider::Aws => AWS.to_string(),
        // TODO: Azure monitor_metric_alert and GCP alert policy templates
        CloudProvider::Azure | CloudProvider::Gcp => "# Monitoring configuration\n".to_string(),
    }
}

const AWS: &str = r#"
resource "aws_cloudwatch_log_group" "main" {
  name              = "/aws/ec2/main-server"
  retention_in_days = 7
}

resource "aws_cloudwatch_metric_alarm" "cpu" {
  alarm_name          = "main-server-cpu"
  comparison_operator = "GreaterThanThreshold"
  evaluation_periods  = 2
  metric_name         = "CPUUtilization"
  namespace           = "AWS/EC2"
  period              = 300
  statistic           = "Average"
  threshold           = 80
  alarm_description   = "This metric monitors ec2 cpu utilization"

  dimensions = {
    InstanceId = aws_instance.main.id
  }
}
"#;
