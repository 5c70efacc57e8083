//! sharpmap - Mermaid class diagrams from C# sources

mod diagram_cli;

use clap::Parser;
use diagram::DiagramConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharpmap")]
#[command(about = "Mermaid class diagrams from C# sources", version)]
struct Cli {
    #[command(subcommand)]
    command: diagram_cli::DiagramCommands,
}

fn main() -> anyhow::Result<()> {
    // stdout carries diagrams and JSON; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DiagramConfig::from_env();

    diagram_cli::run(cli.command, &config)
}
