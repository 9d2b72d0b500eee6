//! knet-build CLI - runs the kNet native build

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use knet_build::util::config::{global_config_path, load_config, project_config_path};
use knet_build::util::diagnostic::emit;
use knet_build::{build, BuildError, BuildOptions};

/// Environment variable holding an `EnvFilter` directive for log output.
const LOG_ENV: &str = "KNET_BUILD_LOG";

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            match e.downcast_ref::<BuildError>() {
                Some(build_err) => emit(&build_err.to_diagnostic()),
                None => eprintln!("error: {:#}", e),
            }
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the backend's stdout
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("knet_build=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cwd = std::env::current_dir()?;
    let config = load_config(global_config_path().as_deref(), &project_config_path(&cwd));

    let opts = BuildOptions::new(cli.configuration(), &config);
    let code = build(&opts, &config)?;

    if code == 0 {
        tracing::info!("Finished {} build", opts.configuration);
    } else {
        tracing::error!("Build failed with exit code {}", code);
    }

    Ok(code)
}
