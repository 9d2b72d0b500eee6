//! CLI integration tests for knet-build.
//!
//! On Linux the Make backend is pointed at a shell script through
//! `.knet/build.toml`, so the full run (config, dispatch, spawn, exit code)
//! is exercised without a real build.

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the knet-build binary command, isolated from the user's global config.
fn knet_build(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("knet-build").unwrap();
    cmd.env("HOME", home).env_remove("KNET_BUILD_LOG");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn test_help_lists_debug_flag() {
    let tmp = temp_dir();

    knet_build(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let tmp = temp_dir();

    knet_build(tmp.path())
        .arg("--release")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--release"));
}

// ============================================================================
// Make backend
// ============================================================================

#[cfg(target_os = "linux")]
mod linux {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Write a fake `make` that records its arguments and exits with `code`.
    fn fake_make(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
        let script = dir.join("fake-make");
        let args_file = dir.join("make-args.txt");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n",
                args_file.display(),
                code
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        (script, args_file)
    }

    /// Write `.knet/build.toml` in `project`.
    fn write_project_config(project: &Path, contents: &str) {
        let dir = project.join(".knet");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("build.toml"), contents).unwrap();
    }

    fn recorded_args(args_file: &Path) -> Vec<String> {
        fs::read_to_string(args_file)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_make_invoked_with_output_dir_and_jobs() {
        let tmp = temp_dir();
        let (script, args_file) = fake_make(tmp.path(), 0);
        fs::create_dir(tmp.path().join("out")).unwrap();
        write_project_config(
            tmp.path(),
            &format!("[build]\njobs = 8\n\n[toolchain]\nmake = '{}'\n", script.display()),
        );

        knet_build(tmp.path())
            .current_dir(tmp.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Finished Release build"));

        assert_eq!(recorded_args(&args_file), ["-C", "out", "-j8"]);
    }

    #[test]
    fn test_debug_flag_accepted_on_linux() {
        let tmp = temp_dir();
        let (script, args_file) = fake_make(tmp.path(), 0);
        write_project_config(
            tmp.path(),
            &format!("[build]\njobs = 2\n\n[toolchain]\nmake = '{}'\n", script.display()),
        );

        knet_build(tmp.path())
            .args(["--debug", "--debug"])
            .current_dir(tmp.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Debug"));

        assert_eq!(recorded_args(&args_file), ["-C", "out", "-j2"]);
    }

    #[test]
    fn test_backend_exit_code_propagates() {
        let tmp = temp_dir();
        let (script, _) = fake_make(tmp.path(), 2);
        write_project_config(
            tmp.path(),
            &format!("[toolchain]\nmake = '{}'\n", script.display()),
        );

        knet_build(tmp.path())
            .current_dir(tmp.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("exit code 2"));
    }

    #[test]
    fn test_missing_make_fails_to_start() {
        let tmp = temp_dir();
        write_project_config(
            tmp.path(),
            "[toolchain]\nmake = '/nonexistent/knet-build/make'\n",
        );

        knet_build(tmp.path())
            .current_dir(tmp.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "failed to start `/nonexistent/knet-build/make`",
            ));
    }

    #[test]
    fn test_global_config_is_merged_under_project_config() {
        let tmp = temp_dir();
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        fs::create_dir_all(home.join(".knet")).unwrap();
        fs::create_dir_all(&project).unwrap();

        let (script, args_file) = fake_make(tmp.path(), 0);
        fs::write(
            home.join(".knet").join("build.toml"),
            "[build]\njobs = 3\noutput_dir = \"global-out\"\n",
        )
        .unwrap();
        write_project_config(
            &project,
            &format!(
                "[build]\noutput_dir = \"build/linux\"\n\n[toolchain]\nmake = '{}'\n",
                script.display()
            ),
        );

        knet_build(&home)
            .current_dir(&project)
            .assert()
            .success();

        assert_eq!(recorded_args(&args_file), ["-C", "build/linux", "-j3"]);
    }
}

// ============================================================================
// Unsupported hosts
// ============================================================================

#[cfg(not(any(windows, target_os = "linux")))]
#[test]
fn test_unsupported_host_fails() {
    let tmp = temp_dir();

    knet_build(tmp.path())
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported platform"));
}
