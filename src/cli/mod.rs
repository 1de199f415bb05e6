use crate::cli::commands::CommandExecutor;
use crate::common::config::LOCAL_CONFIG_FILE;
use crate::common::Config;
use crate::platform::Platform;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "build-resolver")]
#[command(about = "Resolve build target and output path from forwarded build arguments", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve platform and output path, e.g. `resolve -- -buildTarget Android -output dist`
    Resolve {
        /// Config file (default: build-resolver.toml, then the user config dir)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Platform used when -buildTarget is absent or unknown
        #[arg(long)]
        default_platform: Option<Platform>,

        /// Product name used for the default file name
        #[arg(long)]
        product_name: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Arguments forwarded by the host build process
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List supported platforms and their output extensions
    Platforms {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    InitConfig {
        /// Where to write the config
        #[arg(default_value = LOCAL_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            config,
            default_platform,
            product_name,
            json,
            args,
        } => {
            let config = load_config(config, default_platform, product_name)?;
            let executor = CommandExecutor::new(config);
            executor.resolve(args, json)?;
        }

        Commands::Platforms { json } => {
            CommandExecutor::list_platforms(json)?;
        }

        Commands::InitConfig { path, force } => {
            CommandExecutor::init_config(&path, force)?;
        }
    }

    Ok(())
}

/// Config file (or the default search) with command-line overrides applied.
pub fn load_config(
    path: Option<PathBuf>,
    default_platform: Option<Platform>,
    product_name: Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    if let Some(platform) = default_platform {
        config.project.default_platform = platform;
    }
    if let Some(name) = product_name {
        config.project.product_name = name;
    }

    Ok(config)
}
