mod commands;

use clap::{Parser, Subcommand};
use commands::{render, validate, RenderArgs, ValidateArgs};

/// Cardstock CLI - render and validate card documents
#[derive(Parser, Debug)]
#[command(name = "cardstock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card JSON file to a presentation tree
    Render(RenderArgs),

    /// Parse and validate a card JSON file
    Validate(ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render(args),
        Command::Validate(args) => validate(args),
    }
}
