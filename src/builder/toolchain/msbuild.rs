//! MSBuild backend (Windows).

use std::path::{Path, PathBuf};

use super::ToolchainCommand;
use crate::core::BuildConfiguration;

/// Executable appended to the registry's tools directory.
pub const MSBUILD_EXE: &str = "MSBuild.exe";

/// Registry value holding the MSBuild tools directory.
pub const MSBUILD_TOOLS_PATH_VALUE: &str = "MSBuildToolsPath";

/// Registry key (under HKLM) for a given MSBuild tools version.
pub fn msbuild_registry_key(tools_version: &str) -> String {
    format!(
        "SOFTWARE\\Microsoft\\MSBuild\\ToolsVersions\\{}",
        tools_version
    )
}

/// Join an installation directory read from the registry with an executable.
///
/// Registry directories usually carry a trailing backslash; those are
/// concatenated verbatim so the result does not depend on the host's path
/// separator.
pub fn append_executable(dir: &str, executable: &str) -> PathBuf {
    if dir.ends_with('\\') || dir.ends_with('/') {
        PathBuf::from(format!("{}{}", dir, executable))
    } else {
        Path::new(dir).join(executable)
    }
}

/// `MSBuild.exe <solution> /t:Build /p:Configuration=<Debug|Release>`
pub fn msbuild_command(
    msbuild: &Path,
    solution: &str,
    configuration: BuildConfiguration,
) -> ToolchainCommand {
    ToolchainCommand::new(msbuild)
        .arg(solution)
        .arg("/t:Build")
        .arg(format!("/p:Configuration={}", configuration))
}

/// Read a string value from `HKEY_LOCAL_MACHINE\<key>`.
#[cfg(windows)]
pub(super) fn query_local_machine(key: &str, value: &str) -> Result<String, String> {
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
    use winreg::RegKey;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let subkey = hklm
        .open_subkey_with_flags(key, KEY_READ)
        .map_err(|e| format!("registry key `HKLM\\{}` could not be opened: {}", key, e))?;

    subkey.get_value::<String, _>(value).map_err(|e| {
        format!(
            "registry value `{}` under `HKLM\\{}` could not be read: {}",
            value, key, e
        )
    })
}

#[cfg(not(windows))]
pub(super) fn query_local_machine(key: &str, _value: &str) -> Result<String, String> {
    Err(format!(
        "registry key `HKLM\\{}` is unavailable: this host has no registry",
        key
    ))
}
