pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Action, CliConfig};

pub use crate::adapters::SystemLauncher;
pub use crate::config::ProjectSettings;
pub use crate::core::{ProcessLauncher, ProjectConfig};
pub use crate::utils::error::{ConfigError, Result};
