//! Self-rewriting improvement loop CLI.
//!
//! `improver run` asks a chat-completion API to critique and then rewrite
//! this program, saving the rewrite to `improved_code.txt` for a human to
//! review and swap in manually. `improver probe` sends one fixed prompt to
//! verify credentials and connectivity.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use improver::api::OpenAiClient;
use improver::config::ApiConfig;
use improver::improve::{RunPaths, run_improvement};
use improver::probe::run_probe;

#[derive(Parser)]
#[command(
    name = "improver",
    version,
    about = "Ask a language model to rewrite this program"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request suggestions and a full rewrite, saving it for manual review.
    Run,
    /// Send a single fixed prompt to verify credentials and connectivity.
    Probe,
}

fn main() {
    improver::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Credential check happens before any network call.
    let config = ApiConfig::from_env()?;
    let client = OpenAiClient::new(config)?;

    match cli.command {
        Command::Run => {
            let paths = RunPaths::in_dir(Path::new("."));
            run_improvement(&client, &paths)?;
            println!(
                "Rewrite saved to {}. Replace the source manually to continue.",
                paths.output_path.display()
            );
            Ok(())
        }
        Command::Probe => {
            let reply = run_probe(&client)?;
            println!("{reply}");
            Ok(())
        }
    }
}
