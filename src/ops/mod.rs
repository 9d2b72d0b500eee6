//! High-level operations.

pub mod knet_build;

pub use knet_build::{build, plan_command, BuildOptions};
