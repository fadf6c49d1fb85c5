//! Line-driven front-end: one request in, one Terraform stack out.

use std::io::{self, BufRead, Write};

use si_intent::{IntentParser, validate_intent};
use si_protocol::RequestEnvelope;
use si_terraform::TerraformGenerator;

use crate::config::AssistantConfig;
use crate::pipeline;

/// Read requests from stdin until EOF or an exit command.
pub fn run(config: &AssistantConfig) -> anyhow::Result<()> {
    let parser = IntentParser::new();
    let stdin = io::stdin();

    println!("SpeakInfra — describe the infrastructure you want, one request per line.");
    println!("Type 'exit' to leave.\n");
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(text, "exit" | "quit") {
            break;
        }
        handle_request(&parser, config, text)?;
        prompt()?;
    }

    println!("Goodbye.");
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Run one sentence through detect → validate → derive → render → write.
fn handle_request(
    parser: &IntentParser,
    config: &AssistantConfig,
    text: &str,
) -> anyhow::Result<()> {
    let envelope = RequestEnvelope::new(config.mode, text);
    let detection = parser.detect(&envelope.raw_text);
    tracing::info!(
        request_id = %envelope.id,
        action = %detection.action,
        categories = detection.categories.len(),
        negated = detection.negated_categories.len(),
        "request parsed"
    );

    if detection.is_empty() {
        println!("I couldn't find an infrastructure request in that.");
        println!("Things I understand, with sample keywords:");
        for (name, keywords) in parser.categories() {
            let sample: Vec<&str> = keywords.iter().take(4).copied().collect();
            println!("  {name:<12} {}", sample.join(", "));
        }
        return Ok(());
    }

    if !validate_intent(&detection) {
        let conflicted: Vec<&str> = detection
            .affirmed_categories()
            .filter(|name| detection.is_negated(name))
            .collect();
        println!(
            "That request both asks for and excludes: {}.",
            conflicted.join(", ")
        );
        println!("Please rephrase so each resource is either wanted or excluded.");
        return Ok(());
    }

    let provision = pipeline::provision_from_detection(&detection, config.region.as_deref());
    let files = TerraformGenerator::new(provision.clone()).render();
    let written = files.write_to(&config.output_dir)?;

    println!(
        "{} {} stack on {} ({})",
        detection.action,
        provision.operating_system,
        provision.provider.display_name(),
        provision.region
    );
    for name in detection.affirmed_categories() {
        let resources = parser.resources_for(name, provision.provider);
        if resources.is_empty() {
            println!("  detected: {name}");
        } else {
            println!("  detected: {name} -> {}", resources.join(", "));
        }
    }
    for name in &detection.negated_categories {
        println!("  excluded: {name}");
    }
    println!("Files written:");
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
