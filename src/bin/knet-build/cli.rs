//! CLI definitions using clap.

use clap::Parser;

use knet_build::BuildConfiguration;

/// Build kNet with the platform's native toolchain (MSBuild or Make)
#[derive(Parser, Debug)]
#[command(name = "knet-build")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Build the Debug configuration instead of Release
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The configuration selected on the command line.
    pub fn configuration(&self) -> BuildConfiguration {
        BuildConfiguration::from_debug_flag(self.debug)
    }
}
