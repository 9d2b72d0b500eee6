//! Backend process execution.

use crate::builder::errors::BuildError;
use crate::builder::toolchain::ToolchainCommand;

/// Exit code reported for a child that ended without one.
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Run a backend command to completion and return its exit code.
///
/// The child inherits stdio and environment; there is no timeout. Any exit
/// code, zero or not, is returned as is. Only a failure to start the
/// process is an error.
pub fn run(command: &ToolchainCommand) -> Result<i32, BuildError> {
    let process = command.to_process();
    tracing::info!("Running `{}`", process.display_command());

    let status = process.status().map_err(|source| BuildError::Spawn {
        program: process.get_program().to_path_buf(),
        source,
    })?;

    let code = exit_code(status);
    tracing::debug!("`{}` exited with code {}", command.program.display(), code);
    Ok(code)
}

/// Map an exit status to a process exit code.
///
/// On Unix a child killed by a signal reports `128 + signal`, as shells do.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_EXIT_CODE
}
