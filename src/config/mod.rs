#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Action, CliConfig};
pub use settings::ProjectSettings;
pub use toml_config::TomlConfig;
