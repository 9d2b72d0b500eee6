//! Subprocess execution utilities.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Builder for subprocess execution.
///
/// Children inherit the caller's environment, working directory and
/// standard streams.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run the command with inherited stdio and wait for it to exit.
    ///
    /// Fails only if the process could not be started or waited on.
    pub fn status(&self) -> io::Result<ExitStatus> {
        self.build_command().status()
    }

    /// Display the command for logs and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("make").args(["-C", "out", "-j4"]);

        assert_eq!(pb.display_command(), "make -C out -j4");
        assert_eq!(pb.get_program(), Path::new("make"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_reaches_child() {
        use std::os::unix::ffi::OsStrExt;

        // The hex dump matches only if the bytes arrive unchanged
        let raw = OsStr::from_bytes(b"out\xff");
        let status = ProcessBuilder::new("sh")
            .arg("-c")
            .arg(r#"[ "$(printf '%s' "$1" | od -An -tx1 | tr -d ' \n')" = "6f7574ff" ]"#)
            .arg("sh")
            .arg(raw)
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_status_missing_program() {
        let err = ProcessBuilder::new("knet-build-definitely-not-a-real-program")
            .status()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_status_reports_exit_code() {
        let status = ProcessBuilder::new("sh")
            .arg("-c")
            .arg("exit 3")
            .status()
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }
}
