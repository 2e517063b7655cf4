//! Kinship CLI - interactive shell for the family relationship graph

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;
mod shell;

use output::OutputFormat;
use shell::Shell;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(author, version, about = "Record a family and query derived relationships")]
pub struct Cli {
    /// Output format: table, json
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so scripted sessions can assert on stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting kinship shell");

    let mut shell = Shell::new(OutputFormat::from(cli.format.as_str()));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock())
}
