//! Implementation of a `knet-build` run.
//!
//! One run resolves the platform, picks its backend, locates the backend
//! executable, assembles exactly one command and executes it once.

use std::path::PathBuf;

use crate::builder::{
    default_locators, locate_toolchain, run, Backend, BuildError, ToolchainCommand,
    ToolchainLocator,
};
use crate::builder::toolchain::{make_command, msbuild_command};
use crate::core::{BuildConfiguration, PlatformKind};
use crate::util::config::Config;

/// Options for a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Debug or Release
    pub configuration: BuildConfiguration,

    /// Host platform kind
    pub platform: PlatformKind,

    /// Host OS identifier the platform was resolved from
    pub os: String,

    /// Solution file handed to MSBuild
    pub solution: String,

    /// Directory holding the generated makefile
    pub output_dir: PathBuf,

    /// Parallel jobs passed to make
    pub jobs: usize,
}

impl BuildOptions {
    /// Options for the running host, with settings taken from `config`.
    pub fn new(configuration: BuildConfiguration, config: &Config) -> Self {
        BuildOptions {
            configuration,
            platform: PlatformKind::resolve(),
            os: std::env::consts::OS.to_string(),
            solution: config.solution().to_string(),
            output_dir: config.output_dir(),
            jobs: config.jobs().unwrap_or_else(detect_jobs),
        }
    }
}

/// Number of CPU cores available to this process.
pub fn detect_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

/// Assemble the backend command for these options without running it.
pub fn plan_command(opts: &BuildOptions, config: &Config) -> Result<ToolchainCommand, BuildError> {
    let backend = Backend::for_platform(opts.platform).ok_or_else(|| {
        BuildError::UnsupportedPlatform {
            os: opts.os.clone(),
        }
    })?;

    let locators = default_locators(backend, config);
    assemble_command(backend, opts, &locators)
}

/// Locate `backend` with the given locators and build its command.
pub fn assemble_command(
    backend: Backend,
    opts: &BuildOptions,
    locators: &[ToolchainLocator],
) -> Result<ToolchainCommand, BuildError> {
    let program = locate_toolchain(backend, locators)?;

    let command = match backend {
        Backend::MsBuild => msbuild_command(&program, &opts.solution, opts.configuration),
        Backend::Make => {
            if !opts.output_dir.is_dir() {
                tracing::warn!(
                    "Output directory `{}` does not exist; generate the makefile first",
                    opts.output_dir.display()
                );
            }
            make_command(&program, &opts.output_dir, opts.jobs)
        }
    };

    Ok(command)
}

/// Run the build and return the backend's exit code.
///
/// A nonzero code means the build failed; it is returned, not raised.
pub fn build(opts: &BuildOptions, config: &Config) -> Result<i32, BuildError> {
    tracing::info!(
        "Building {} configuration on {}",
        opts.configuration,
        opts.platform
    );

    let command = plan_command(opts, config)?;
    run(&command)
}
