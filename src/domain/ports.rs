use crate::domain::model::CommandLine;
use crate::utils::error::Result;
use std::path::Path;

/// Runs a command line to completion.
///
/// `Ok(())` means the child exited with status zero. Spawn failures and
/// non-zero exits both come back as errors.
pub trait ProcessLauncher {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()>;
}
