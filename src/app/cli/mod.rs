//! CLI Adapter.

use clap::Parser;

use crate::app::api::{self, GenerateOutcome};

#[derive(Parser)]
#[command(name = "dcgen")]
#[command(version)]
#[command(
    about = "Generate a .devcontainer/devcontainer.json file for your project",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    Cli::parse();

    println!("🐳 DevContainer Generator");
    println!("Generate a devcontainer.json file for your project");
    println!();

    match api::generate() {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(outcome: &GenerateOutcome) {
    match outcome {
        GenerateOutcome::Cancelled => println!("Configuration cancelled."),
        GenerateOutcome::Written { path, warnings, .. } => {
            if !warnings.is_empty() {
                println!();
                println!("⚠️  Some optional fields were omitted:");
                for warning in warnings {
                    println!("  • {}", warning);
                }
            }
            println!();
            println!("✅ Success!");
            println!("DevContainer configuration has been saved to: {}", path);
            println!();
            println!("You can now open this project in your terminal or IDE.");
        }
    }
}
