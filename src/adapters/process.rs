use crate::domain::model::CommandLine;
use crate::domain::ports::ProcessLauncher;
use crate::utils::error::{ConfigError, Result};
use std::path::Path;
use std::process::Command;

/// Spawns the command as a real child process with inherited stdio and waits
/// for it. No timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()> {
        tracing::debug!("Running '{}' in {}", command, cwd.display());

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(cwd)
            .status()
            .map_err(|source| ConfigError::SpawnFailure {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ConfigError::ChildProcessFailure {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
