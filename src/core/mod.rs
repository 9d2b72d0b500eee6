//! Core data structures for knet-build.
//!
//! - Host platform detection (`PlatformKind`)
//! - Build configuration selection (`BuildConfiguration`)

pub mod platform;
pub mod profile;

pub use platform::PlatformKind;
pub use profile::BuildConfiguration;
