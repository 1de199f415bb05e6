use crate::common::Config;
use crate::platform::Platform;
use crate::resolver::{ArgumentResolver, BuildSettings, PlatformSource};
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

pub struct CommandExecutor {
    config: Config,
}

impl CommandExecutor {
    pub fn new(config: Config) -> Self {
        CommandExecutor { config }
    }

    pub fn resolve_settings(&self, args: Vec<String>) -> Result<BuildSettings> {
        let defaults = self.config.resolver_defaults()?;
        ArgumentResolver::new(args)
            .resolve(&defaults)
            .context("Failed to resolve build arguments")
    }

    pub fn resolve(&self, args: Vec<String>, json: bool) -> Result<()> {
        let settings = self.resolve_settings(args)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&settings_json(&settings))?);
            return Ok(());
        }

        let source = match &settings.source {
            PlatformSource::Default => "(default)".dimmed(),
            PlatformSource::Argument => "(from -buildTarget)".green(),
            PlatformSource::Fallback { requested } => {
                format!("(fallback, unknown -buildTarget \"{}\")", requested).yellow()
            }
        };

        println!("{}", "✅ Build settings resolved".green());
        println!("   Platform:  {} {}", settings.platform.to_string().bright_yellow(), source);
        println!("   Directory: {}", settings.output.directory.display());
        println!("   File:      {}", settings.output.file_name);
        println!("   Path:      {}", settings.output.to_string().bright_cyan());

        Ok(())
    }

    pub fn list_platforms(json: bool) -> Result<()> {
        if json {
            let table: Vec<_> = Platform::ALL
                .iter()
                .map(|platform| {
                    serde_json::json!({
                        "platform": platform,
                        "extension": platform.extension(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
            return Ok(());
        }

        println!("{}", format!("📦 {} platform(s):", Platform::ALL.len()).bold());
        for platform in Platform::ALL {
            let extension = match platform.extension() {
                "" => "(none)".dimmed(),
                ext => ext.bright_cyan(),
            };
            println!("  {:<26} {}", platform.as_str(), extension);
        }

        Ok(())
    }

    pub fn init_config(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!("{:?} already exists (use --force to overwrite)", path);
        }

        Config::default().save(path)?;

        println!("{}", "✅ Config written".green());
        println!("   Path: {}", path.display());

        Ok(())
    }
}

pub fn settings_json(settings: &BuildSettings) -> serde_json::Value {
    serde_json::json!({
        "platform": settings.platform,
        "source": settings.source,
        "directory": settings.output.directory,
        "file_name": settings.output.file_name,
        "path": settings.output.path(),
    })
}
