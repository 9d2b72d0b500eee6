//! Locator selection per backend.

use std::path::PathBuf;

use crate::util::config::Config;

use super::msbuild::{msbuild_registry_key, MSBUILD_EXE, MSBUILD_TOOLS_PATH_VALUE};
use super::{Backend, ToolchainLocator, MAKE_PROGRAM};

/// Build the locator list for a backend.
///
/// A configured tool path is authoritative and replaces the search.
/// Otherwise MSBuild comes from the registry alone, and Make is handed to
/// the OS by name.
pub fn default_locators(backend: Backend, config: &Config) -> Vec<ToolchainLocator> {
    match backend {
        Backend::MsBuild => {
            if let Some(ref msbuild) = config.toolchain.msbuild {
                return vec![ToolchainLocator::Fixed(msbuild.clone())];
            }

            vec![ToolchainLocator::Registry {
                key: msbuild_registry_key(config.msbuild_tools_version()),
                value: MSBUILD_TOOLS_PATH_VALUE.to_string(),
                executable: MSBUILD_EXE.to_string(),
            }]
        }
        Backend::Make => {
            let make = config
                .toolchain
                .make
                .clone()
                .unwrap_or_else(|| PathBuf::from(MAKE_PROGRAM));
            vec![ToolchainLocator::Fixed(make)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msbuild_default_locators() {
        let locators = default_locators(Backend::MsBuild, &Config::default());

        assert_eq!(
            locators,
            [ToolchainLocator::Registry {
                key: "SOFTWARE\\Microsoft\\MSBuild\\ToolsVersions\\14.0".to_string(),
                value: "MSBuildToolsPath".to_string(),
                executable: "MSBuild.exe".to_string(),
            }]
        );
    }

    #[test]
    fn test_msbuild_tools_version_override() {
        let mut config = Config::default();
        config.toolchain.msbuild_tools_version = Some("4.0".to_string());

        match &default_locators(Backend::MsBuild, &config)[0] {
            ToolchainLocator::Registry { key, .. } => {
                assert!(key.ends_with("ToolsVersions\\4.0"));
            }
            other => panic!("expected registry locator, got {:?}", other),
        }
    }

    #[test]
    fn test_configured_msbuild_skips_registry() {
        let mut config = Config::default();
        config.toolchain.msbuild = Some(PathBuf::from("D:\\VS\\MSBuild.exe"));

        assert_eq!(
            default_locators(Backend::MsBuild, &config),
            [ToolchainLocator::Fixed(PathBuf::from("D:\\VS\\MSBuild.exe"))]
        );
    }

    #[test]
    fn test_make_locators() {
        assert_eq!(
            default_locators(Backend::Make, &Config::default()),
            [ToolchainLocator::Fixed(PathBuf::from("make"))]
        );

        let mut config = Config::default();
        config.toolchain.make = Some(PathBuf::from("/usr/bin/gmake"));
        assert_eq!(
            default_locators(Backend::Make, &config),
            [ToolchainLocator::Fixed(PathBuf::from("/usr/bin/gmake"))]
        );
    }
}
