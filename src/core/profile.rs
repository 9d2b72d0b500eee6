//! Build configuration (Debug/Release).

use std::fmt;

/// The configuration name forwarded to the native build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildConfiguration {
    Debug,
    #[default]
    Release,
}

impl BuildConfiguration {
    /// Select the configuration from the `--debug` flag.
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            BuildConfiguration::Debug
        } else {
            BuildConfiguration::Release
        }
    }

    /// The name MSBuild expects in `/p:Configuration=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_release() {
        assert_eq!(BuildConfiguration::default(), BuildConfiguration::Release);
        assert_eq!(
            BuildConfiguration::from_debug_flag(false),
            BuildConfiguration::Release
        );
    }

    #[test]
    fn test_debug_flag() {
        assert_eq!(
            BuildConfiguration::from_debug_flag(true),
            BuildConfiguration::Debug
        );
        assert_eq!(BuildConfiguration::Debug.to_string(), "Debug");
        assert_eq!(BuildConfiguration::Release.to_string(), "Release");
    }
}
