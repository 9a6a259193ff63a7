//! External checker invocation.
//!
//! The [`Checker`] trait is the only thing a tool adapter knows about the
//! type checker: hand it an argument list, get its report back. The real
//! implementation, [`ProcessChecker`], runs the checker as a subprocess;
//! tests substitute a fake.

use crate::error::{AdapterError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default program used to run mypy.
pub const DEFAULT_PROGRAM: &str = "mypy";

/// Exit code mypy uses for crashes and usage errors.
const FATAL_EXIT_CODE: i32 = 2;

/// Output of a single checker invocation.
#[derive(Debug, Clone, Default)]
pub struct CheckerOutput {
    /// The report (what the checker prints on stdout).
    pub report: String,

    /// Anything printed on stderr.
    pub errors: String,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl CheckerOutput {
    /// Create an output carrying only a report.
    pub fn from_report(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
            exit_code: Some(0),
            ..Default::default()
        }
    }
}

/// Something that can run the type checker.
pub trait Checker {
    /// Run the checker with the given arguments and collect its output.
    ///
    /// A checker that reports problems is not an error. Failing to run at
    /// all is, and so is a fatal exit with no report.
    fn run(&self, args: &[String]) -> Result<CheckerOutput>;
}

/// Runs the checker as a child process.
#[derive(Debug, Clone)]
pub struct ProcessChecker {
    program: String,
    cwd: Option<PathBuf>,
}

impl ProcessChecker {
    /// Create a checker that runs `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            cwd: None,
        }
    }

    /// Run the checker from the given working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Program this checker runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessChecker {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Checker for ProcessChecker {
    fn run(&self, args: &[String]) -> Result<CheckerOutput> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running {} {}", self.program, args.join(" "));

        let output = cmd
            .output()
            .map_err(|source| AdapterError::CheckerUnavailable {
                program: self.program.clone(),
                source,
            })?;

        let result = CheckerOutput {
            report: String::from_utf8_lossy(&output.stdout).to_string(),
            errors: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            duration: start.elapsed(),
        };

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            self.program,
            result.exit_code,
            result.duration
        );

        let fatal = result.exit_code == Some(FATAL_EXIT_CODE);
        if fatal && result.report.trim().is_empty() {
            return Err(AdapterError::CheckerFailed {
                program: self.program.clone(),
                code: FATAL_EXIT_CODE,
                stderr: result.errors.trim().to_string(),
            });
        }

        if !result.errors.trim().is_empty() {
            if fatal {
                tracing::warn!("{} reported: {}", self.program, result.errors.trim());
            } else {
                tracing::debug!("{} stderr: {}", self.program, result.errors.trim());
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_is_mypy() {
        assert_eq!(ProcessChecker::default().program(), "mypy");
    }

    #[test]
    fn from_report_is_clean_exit() {
        let output = CheckerOutput::from_report("a.py:1: error: x\n");
        assert_eq!(output.exit_code, Some(0));
        assert!(output.errors.is_empty());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let checker = ProcessChecker::new("definitely-not-a-real-checker-binary");
        let err = checker.run(&["a.py".to_string()]).unwrap_err();

        match err {
            AdapterError::CheckerUnavailable { program, .. } => {
                assert_eq!(program, "definitely-not-a-real-checker-binary")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let checker = ProcessChecker::new("sh");
        let args = vec![
            "-c".to_string(),
            "echo 'a.py:1: error: x'; echo oops >&2; exit 1".to_string(),
        ];

        let output = checker.run(&args).unwrap();

        assert_eq!(output.report, "a.py:1: error: x\n");
        assert_eq!(output.errors, "oops\n");
        assert_eq!(output.exit_code, Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn fatal_exit_without_report_is_failure() {
        let checker = ProcessChecker::new("sh");
        let args = vec![
            "-c".to_string(),
            "echo 'unrecognized arguments: --py2' >&2; exit 2".to_string(),
        ];

        let err = checker.run(&args).unwrap_err();

        match err {
            AdapterError::CheckerFailed { code, stderr, .. } => {
                assert_eq!(code, 2);
                assert_eq!(stderr, "unrecognized arguments: --py2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn fatal_exit_with_report_keeps_report() {
        let checker = ProcessChecker::new("sh");
        let args = vec![
            "-c".to_string(),
            "echo 'a.py:1: error: x'; echo crashed >&2; exit 2".to_string(),
        ];

        let output = checker.run(&args).unwrap();

        assert_eq!(output.report, "a.py:1: error: x\n");
        assert_eq!(output.exit_code, Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let checker = ProcessChecker::new("pwd").with_cwd(temp.path());

        let output = checker.run(&[]).unwrap();

        let reported = std::path::PathBuf::from(output.report.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }
}
