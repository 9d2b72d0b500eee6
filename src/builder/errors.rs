//! Launcher error types and diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error that ends a build run before or while starting the backend.
///
/// A backend that runs and exits nonzero is not an error; its exit code is
/// returned as data.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not locate {tool}")]
    ToolchainNotFound {
        tool: String,
        /// One line per locator that was tried.
        searched: Vec<String>,
    },

    #[error("failed to start `{program}`")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported platform `{os}`")]
    UnsupportedPlatform { os: String },
}

impl BuildError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::ToolchainNotFound { tool, searched } => {
                let mut diag = Diagnostic::error(format!("could not locate {}", tool));
                for line in searched {
                    diag = diag.with_context(line.clone());
                }
                if tool.eq_ignore_ascii_case("msbuild") {
                    diag = diag.with_suggestion(suggestions::INSTALL_MSBUILD);
                }
                diag.with_suggestion(suggestions::OVERRIDE_TOOLCHAIN)
            }

            BuildError::Spawn { program, source } => {
                let diag = Diagnostic::error(format!("failed to start `{}`", program.display()))
                    .with_location(program.clone())
                    .with_context(source.to_string());

                if source.kind() == io::ErrorKind::NotFound {
                    diag.with_suggestion(suggestions::TOOL_NOT_ON_PATH)
                        .with_suggestion(suggestions::OVERRIDE_TOOLCHAIN)
                } else {
                    diag
                }
            }

            BuildError::UnsupportedPlatform { os } => {
                Diagnostic::error(format!("unsupported platform `{}`", os))
                    .with_context("no build backend is available for this host")
                    .with_suggestion(suggestions::SUPPORTED_PLATFORMS)
            }
        }
    }
}
