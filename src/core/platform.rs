//! Host platform detection.

use std::fmt;

/// OS identifier prefix selecting the MSBuild backend.
///
/// Matches both `win32` and Rust's own `windows`.
pub const WINDOWS_MARKER: &str = "win";

/// OS identifier prefix selecting the Make backend.
pub const LINUX_MARKER: &str = "linux";

/// The kind of host the build runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Windows,
    Linux,
    Unsupported,
}

impl PlatformKind {
    /// Resolve the platform of the running host.
    pub fn resolve() -> Self {
        Self::from_os_identifier(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform kind.
    pub fn from_os_identifier(os: &str) -> Self {
        if os.starts_with(WINDOWS_MARKER) {
            PlatformKind::Windows
        } else if os.starts_with(LINUX_MARKER) {
            PlatformKind::Linux
        } else {
            PlatformKind::Unsupported
        }
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Windows => "windows",
            PlatformKind::Linux => "linux",
            PlatformKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
