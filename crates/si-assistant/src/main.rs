//! SpeakInfra assistant — turns plain-text requests into Terraform stacks.

use tracing_subscriber::EnvFilter;

use si_assistant::config::AssistantConfig;
use si_assistant::repl;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "si-assistant starting"
    );

    // Optional TOML config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => AssistantConfig::from_file(&path)?,
        None => AssistantConfig::default(),
    };
    tracing::info!(
        output_dir = %config.output_dir.display(),
        mode = config.mode.as_str(),
        "config loaded"
    );

    repl::run(&config)
}
