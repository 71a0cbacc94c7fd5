pub mod facade;

pub use crate::domain::model::{
    ApiEndpoints, CommandLine, CommandSet, DependencyRequirement, EnvironmentConfig,
    EnvironmentProfile, FullConfig, ProjectIdentity, RuntimeConfig, RuntimePorts,
};
pub use crate::domain::ports::ProcessLauncher;
pub use crate::utils::error::Result;
pub use facade::ProjectConfig;
