//! `querytext config show|init|path`

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use querytext_core::{config, ConfigError, RenderConfig};

/// Inspect or create the user configuration.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration.
    Show(ShowArgs),

    /// Write a default config file if none exists.
    Init,

    /// Print the config file location.
    Path,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Emit JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

/// `loaded` is the startup load result. Only `show` needs it to have
/// succeeded, so `path` and `init` keep working with a broken config file.
pub fn run(
    cmd: ConfigCommand,
    home: &Path,
    loaded: Result<RenderConfig, ConfigError>,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show(args) => {
            let current = loaded.context(super::CONFIG_LOAD_FAILED)?;
            show(&current, args.json)
        }
        ConfigCommand::Init => init(home),
        ConfigCommand::Path => {
            if let Err(err) = &loaded {
                tracing::warn!(error = %err, "config file exists but cannot be loaded");
            }
            println!("{}", config::config_path_at(home).display());
            Ok(())
        }
    }
}

fn show(current: &RenderConfig, json: bool) -> Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(current).context("failed to serialize config JSON")?
    } else {
        serde_yaml::to_string(current).context("failed to serialize config YAML")?
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn init(home: &Path) -> Result<()> {
    let (_, created) = config::init_at(home).context("failed to initialize config")?;
    let path = config::config_path_at(home);
    if created {
        println!("✓ Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
