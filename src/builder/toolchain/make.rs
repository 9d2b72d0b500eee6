//! Make backend (Linux).

use std::path::Path;

use super::ToolchainCommand;

/// Program run when no `toolchain.make` override is configured.
pub const MAKE_PROGRAM: &str = "make";

/// `make -C <output_dir> -j<jobs>`
///
/// The build configuration is baked into the generated makefile, so it is
/// not passed here.
pub fn make_command(make: &Path, output_dir: &Path, jobs: usize) -> ToolchainCommand {
    ToolchainCommand::new(make)
        .arg("-C")
        .arg(output_dir)
        .arg(format!("-j{}", jobs))
}
