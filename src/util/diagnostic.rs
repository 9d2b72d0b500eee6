//! User-facing diagnostic messages.
//!
//! Every fatal condition is reported with its root cause, what was tried,
//! and what the user can change to fix it.

use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when MSBuild is missing from the registry.
    pub const INSTALL_MSBUILD: &str =
        "Install the Visual Studio 2015 Build Tools (MSBuild 14.0)";

    /// Suggestion pointing at the toolchain overrides.
    pub const OVERRIDE_TOOLCHAIN: &str =
        "Set `toolchain.msbuild` or `toolchain.make` in .knet/build.toml";

    /// Suggestion when the backend executable cannot be found.
    pub const TOOL_NOT_ON_PATH: &str = "Make sure the build tool is installed and on PATH";

    /// Suggestion when the host has no backend.
    pub const SUPPORTED_PLATFORMS: &str =
        "Build on Windows (MSBuild) or Linux (Make), or run the native tool directly";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Config file or path the diagnostic refers to
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  → {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr, colored when stderr is a terminal.
pub fn emit(diagnostic: &Diagnostic) {
    let color = std::io::stderr().is_terminal();
    eprint!("{}", diagnostic.format(color));
}
