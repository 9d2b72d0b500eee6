//! Native build backends and how to find them.
//!
//! Each platform maps to one backend: MSBuild on Windows, Make on Linux.
//! A backend executable is found by trying a list of [`ToolchainLocator`]s
//! in order:
//! 1. Toolchain config (`toolchain.msbuild` / `toolchain.make`), used as is
//! 2. MSBuild only: the `MSBuildToolsPath` registry value
//! 3. Make only: plain `make`, resolved by the OS at spawn time
//!
//! A missing registry value is final; MSBuild is never searched for on PATH.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::builder::errors::BuildError;
use crate::core::PlatformKind;
use crate::util::process::ProcessBuilder;

mod detect;
mod make;
mod msbuild;

pub use detect::default_locators;
pub use make::{make_command, MAKE_PROGRAM};
pub use msbuild::{
    append_executable, msbuild_command, msbuild_registry_key, MSBUILD_EXE,
    MSBUILD_TOOLS_PATH_VALUE,
};

/// The native build tool driven on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// MSBuild driving a Visual Studio solution (Windows)
    MsBuild,
    /// Make driving a generated makefile (Linux)
    Make,
}

impl Backend {
    /// Select the backend for a platform, if it has one.
    pub fn for_platform(platform: PlatformKind) -> Option<Backend> {
        match platform {
            PlatformKind::Windows => Some(Backend::MsBuild),
            PlatformKind::Linux => Some(Backend::Make),
            PlatformKind::Unsupported => None,
        }
    }

    /// Human-readable tool name.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Backend::MsBuild => "MSBuild",
            Backend::Make => "make",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

/// A fully assembled backend invocation: executable plus arguments.
///
/// Built once per run and consumed by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainCommand {
    /// The program to run (e.g., "make", "C:\...\MSBuild.exe")
    pub program: PathBuf,
    /// Command arguments, passed to the child byte for byte
    pub args: Vec<OsString>,
}

impl ToolchainCommand {
    /// Create a new command.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ToolchainCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program followed by arguments, lossily converted for display.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program.display().to_string()];
        argv.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        argv
    }

    /// Turn the command into a process ready to spawn.
    pub fn to_process(&self) -> ProcessBuilder {
        ProcessBuilder::new(&self.program).args(&self.args)
    }
}

impl fmt::Display for ToolchainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// One way of finding a backend executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainLocator {
    /// A path or program name used without checking it.
    Fixed(PathBuf),
    /// An installation directory stored in the local-machine registry.
    Registry {
        key: String,
        value: String,
        executable: String,
    },
}

impl ToolchainLocator {
    /// Try this locator. On failure returns a line explaining what was
    /// looked at.
    pub fn locate(&self) -> Result<PathBuf, String> {
        match self {
            ToolchainLocator::Fixed(path) => Ok(path.clone()),
            ToolchainLocator::Registry {
                key,
                value,
                executable,
            } => {
                let dir = msbuild::query_local_machine(key, value)?;
                if dir.trim().is_empty() {
                    return Err(format!(
                        "registry value `{}` under `HKLM\\{}` is empty",
                        value, key
                    ));
                }
                Ok(append_executable(dir.trim(), executable))
            }
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            ToolchainLocator::Fixed(path) => format!("configured path {}", path.display()),
            ToolchainLocator::Registry { key, value, .. } => {
                format!("registry value HKLM\\{}\\{}", key, value)
            }
        }
    }
}

/// Run the locators in order and return the first executable found.
///
/// Every locator is queried fresh; nothing is cached between calls.
pub fn locate_toolchain(
    backend: Backend,
    locators: &[ToolchainLocator],
) -> Result<PathBuf, BuildError> {
    let mut searched = Vec::new();

    for locator in locators {
        match locator.locate() {
            Ok(path) => {
                tracing::debug!(
                    "Located {} via {}: {}",
                    backend,
                    locator.describe(),
                    path.display()
                );
                return Ok(path);
            }
            Err(reason) => {
                tracing::debug!("{} not found via {}: {}", backend, locator.describe(), reason);
                searched.push(reason);
            }
        }
    }

    Err(BuildError::ToolchainNotFound {
        tool: backend.tool_name().to_string(),
        searched,
    })
}
