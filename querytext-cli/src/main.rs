//! querytext: render SQL AST documents back to query text.
//!
//! # Usage
//!
//! ```text
//! querytext render <file.json|file.yaml> [--tracked] [--highlight] [--json]
//! querytext config show [--json]
//! querytext config init
//! querytext config path
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use commands::{config::ConfigCommand, render::RenderArgs};
use querytext_core::{config, RenderConfig};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "querytext",
    version,
    about = "Render SQL abstract syntax trees back to query text",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an AST document (JSON or YAML) to SQL.
    Render(RenderArgs),

    /// Inspect or create ~/.querytext/config.yaml.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logs go to stderr so stdout stays pipeable.
fn init_tracing(verbose: u8, config: &RenderConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let fallback = match verbose {
        0 => config.log_filter().to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let home = dirs::home_dir().context("could not determine home directory")?;
    let loaded = config::load_at(&home);
    let fallback = RenderConfig::default();
    init_tracing(cli.verbose, loaded.as_ref().unwrap_or(&fallback));

    match cli.command {
        Commands::Render(args) => args.run(&loaded.context(commands::CONFIG_LOAD_FAILED)?),
        Commands::Config { command } => commands::config::run(command, &home, loaded),
    }
}
