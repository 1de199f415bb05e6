use crate::common::Result;
use crate::platform::Platform;
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod args;

pub use args::ArgumentResolver;

/// Directory builds land in when no `-output` flag is given.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "Builds";

const BUILD_TARGET_FLAG: &str = "buildTarget";
const OUTPUT_FLAG: &str = "output";
const NAME_FLAG: &str = "name";

/// Values supplied by the host environment rather than the command line.
#[derive(Debug, Clone)]
pub struct ResolverDefaults {
    pub platform: Platform,
    pub product_name: String,
    pub directory: PathBuf,
}

impl ResolverDefaults {
    pub fn new(platform: Platform, product_name: impl Into<String>) -> Self {
        ResolverDefaults {
            platform,
            product_name: product_name.into(),
            directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

/// Where a resolved platform came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformSource {
    /// No `-buildTarget` flag was given.
    Default,
    /// `-buildTarget` named a known platform.
    Argument,
    /// `-buildTarget` named no known platform; the default was used.
    Fallback { requested: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformResolution {
    pub platform: Platform,
    pub source: PlatformSource,
}

impl PlatformResolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PlatformSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    pub directory: PathBuf,
    pub file_name: String,
}

impl OutputPath {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl std::fmt::Display for OutputPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Everything the host needs to run the build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub platform: Platform,
    pub source: PlatformSource,
    pub output: OutputPath,
}

impl ArgumentResolver {
    /// Platform named by `-buildTarget`, or `default` when the flag is
    /// absent or does not name a known platform.
    pub fn resolve_platform(&self, default: Platform) -> Result<PlatformResolution> {
        let Some(requested) = self.lookup(BUILD_TARGET_FLAG)? else {
            return Ok(PlatformResolution {
                platform: default,
                source: PlatformSource::Default,
            });
        };

        match requested.parse::<Platform>() {
            Ok(platform) => {
                info!("Received custom build target {}", platform);
                Ok(PlatformResolution {
                    platform,
                    source: PlatformSource::Argument,
                })
            }
            Err(_) => {
                warn!(
                    "Build target \"{}\" is not a known platform, building for {} instead",
                    requested, default
                );
                Ok(PlatformResolution {
                    platform: default,
                    source: PlatformSource::Fallback {
                        requested: requested.to_string(),
                    },
                })
            }
        }
    }

    pub fn resolve_extension(&self, platform: Platform) -> &'static str {
        platform.extension()
    }

    /// Output path for `platform`, rooted at [`DEFAULT_OUTPUT_DIRECTORY`]
    /// unless `-output` says otherwise.
    pub fn resolve_output_path(&self, platform: Platform, product_name: &str) -> Result<OutputPath> {
        self.resolve_output_path_in(platform, product_name, Path::new(DEFAULT_OUTPUT_DIRECTORY))
    }

    /// Like [`resolve_output_path`](Self::resolve_output_path) with a custom
    /// default directory.
    pub fn resolve_output_path_in(
        &self,
        platform: Platform,
        product_name: &str,
        default_directory: &Path,
    ) -> Result<OutputPath> {
        let extension = self.resolve_extension(platform);
        let default_file_name = format!("{}{}", product_name, extension);

        let mut output = OutputPath {
            directory: default_directory.to_path_buf(),
            file_name: default_file_name.clone(),
        };

        if let Some(value) = self.lookup(OUTPUT_FLAG)? {
            let path = Path::new(value);
            match path.file_name() {
                Some(file_name) if has_extension(value) => {
                    output.directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
                    output.file_name = file_name.to_string_lossy().into_owned();
                }
                _ => {
                    output.directory = path.to_path_buf();
                    output.file_name = default_file_name;
                }
            }
            debug!("-output {} -> {:?}", value, output);
        }

        if let Some(name) = self.lookup(NAME_FLAG)? {
            output.file_name = if has_extension(name) {
                name.to_string()
            } else {
                format!("{}{}", name, extension)
            };
            debug!("-name {} -> {}", name, output.file_name);
        }

        Ok(output)
    }

    /// Resolve the platform, then the output path for it.
    pub fn resolve(&self, defaults: &ResolverDefaults) -> Result<BuildSettings> {
        let resolution = self.resolve_platform(defaults.platform)?;
        let output = self.resolve_output_path_in(
            resolution.platform,
            &defaults.product_name,
            &defaults.directory,
        )?;

        Ok(BuildSettings {
            platform: resolution.platform,
            source: resolution.source,
            output,
        })
    }
}

/// True when the text after the last separator contains a `.` that is not
/// its final character. A trailing separator means a directory.
fn has_extension(value: &str) -> bool {
    let last = value.rsplit(std::path::is_separator).next().unwrap_or(value);
    match last.rfind('.') {
        Some(index) => index + 1 < last.len(),
        None => false,
    }
}
