//! knet-build - launcher for the kNet native build
//!
//! Detects the host platform, locates its native build tool (MSBuild on
//! Windows, Make on Linux), runs it once and reports its exit code.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

pub use builder::{Backend, BuildError, ToolchainCommand, ToolchainLocator};
pub use crate::core::{BuildConfiguration, PlatformKind};
pub use ops::{build, BuildOptions};
pub use util::Config;
