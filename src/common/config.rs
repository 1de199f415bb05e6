use crate::common::ResolveError;
use crate::platform::Platform;
use crate::resolver::{ResolverDefaults, DEFAULT_OUTPUT_DIRECTORY};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "build-resolver.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub product_name: String,
    pub default_platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Load config from default locations
    pub fn load_default() -> Result<Self> {
        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

        // <config dir>/build-resolver/config.toml
        candidates.extend(Self::user_config_path());

        Self::load_first(candidates)
    }

    /// Load the first candidate that exists, or the built-in defaults.
    pub fn load_first<I>(candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in candidates {
            if path.exists() {
                debug!("Loading config from {:?}", path);
                return Self::load(path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("build-resolver").join("config.toml"))
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config to {:?}", path.as_ref()))?;

        Ok(())
    }

    pub fn resolver_defaults(&self) -> Result<ResolverDefaults> {
        if self.project.product_name.trim().is_empty() {
            return Err(ResolveError::Config(
                "project.product_name must not be empty".to_string(),
            )
            .into());
        }

        Ok(ResolverDefaults {
            platform: self.project.default_platform,
            product_name: self.project.product_name.clone(),
            directory: self.output.directory.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: ProjectConfig {
                product_name: "Product".to_string(),
                default_platform: Platform::StandaloneWindows64,
            },
            output: OutputConfig {
                directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            },
        }
    }
}
