// Library exports for the CLI and integration tests

pub mod cli;
pub mod common;
pub mod platform;
pub mod resolver;

pub use common::{ResolveError, Result};
pub use platform::Platform;
pub use resolver::{ArgumentResolver, BuildSettings, OutputPath, ResolverDefaults};
