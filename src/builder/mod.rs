//! Backend selection, toolchain lookup and process execution.

pub mod errors;
pub mod executor;
pub mod toolchain;

pub use errors::BuildError;
pub use executor::run;
pub use toolchain::{
    default_locators, locate_toolchain, Backend, ToolchainCommand, ToolchainLocator,
};
