//! External build-and-run invocation.
//!
//! The build command is split with shell quoting rules, run from the project
//! root with inherited environment and stdio, and its exit status reported
//! back. Whether a non-zero exit fails the run is decided by the caller.

use crate::error::{LabError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of running the build command.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// The command that was executed (for logging).
    pub command: String,
    /// Exit code of the process (None if killed by a signal).
    pub exit_code: Option<i32>,
    /// Wall-clock duration of the build.
    pub duration: Duration,
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `command` from `root` and wait for it to finish.
///
/// `root` is made absolute first, so a relative program such as
/// `./build_and_run.sh` resolves to the same file whatever the caller's
/// working directory.
///
/// Fails only when the command cannot be parsed or started. A non-zero exit
/// is returned in the outcome.
pub fn run_build(command: &str, root: &Path) -> Result<BuildOutcome> {
    let command = command.trim();
    let args = shell_words::split(command).map_err(|e| LabError::BuildInvocation {
        command: command.to_string(),
        message: format!(
            "failed to parse command: {}\nFix: check for unmatched quotes or invalid escape sequences.",
            e
        ),
    })?;

    let Some((program, cmd_args)) = args.split_first() else {
        return Err(LabError::BuildInvocation {
            command: command.to_string(),
            message: "command is empty after parsing".to_string(),
        });
    };

    let root = std::path::absolute(root).map_err(|e| LabError::BuildInvocation {
        command: command.to_string(),
        message: format!("failed to resolve build root '{}': {}", root.display(), e),
    })?;
    let program_path = resolve_program(program, &root);
    info!(command, root = %root.display(), "running build command");

    let start = Instant::now();
    let status = Command::new(&program_path)
        .args(cmd_args)
        .current_dir(&root)
        .status()
        .map_err(|e| LabError::BuildInvocation {
            command: command.to_string(),
            message: format!(
                "{}\nFix: ensure '{}' exists and is executable.",
                e,
                program_path.display()
            ),
        })?;

    Ok(BuildOutcome {
        command: command.to_string(),
        exit_code: status.code(),
        duration: start.elapsed(),
    })
}

/// Apply the exit-status policy to a finished build.
///
/// A failed build is a warning unless `strict` is set.
pub fn check_outcome(outcome: &BuildOutcome, strict: bool) -> Result<()> {
    if outcome.is_success() {
        info!(
            command = %outcome.command,
            elapsed_ms = outcome.duration.as_millis() as u64,
            "build command finished"
        );
        return Ok(());
    }

    if strict {
        return Err(LabError::BuildFailed {
            command: outcome.command.clone(),
            code: outcome.exit_code,
        });
    }

    warn!(
        command = %outcome.command,
        exit_code = ?outcome.exit_code,
        "build command did not succeed"
    );
    Ok(())
}

/// Relative programs with a path separator resolve against the build root;
/// bare names are left for `PATH` lookup.
fn resolve_program(program: &str, root: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn outcome(exit_code: Option<i32>) -> BuildOutcome {
        BuildOutcome {
            command: "./build_and_run.sh".to_string(),
            exit_code,
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_resolve_program() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_program("./build_and_run.sh", root),
            PathBuf::from("/project/./build_and_run.sh")
        );
        assert_eq!(
            resolve_program("scripts/build.sh", root),
            PathBuf::from("/project/scripts/build.sh")
        );
        assert_eq!(resolve_program("make", root), PathBuf::from("make"));
        assert_eq!(
            resolve_program("/usr/bin/make", root),
            PathBuf::from("/usr/bin/make")
        );
    }

    #[test]
    fn test_check_outcome_success() {
        assert!(check_outcome(&outcome(Some(0)), true).is_ok());
        assert!(check_outcome(&outcome(Some(0)), false).is_ok());
    }

    #[test]
    fn test_check_outcome_failure_is_warning_by_default() {
        assert!(check_outcome(&outcome(Some(1)), false).is_ok());
        assert!(check_outcome(&outcome(None), false).is_ok());
    }

    #[test]
    fn test_check_outcome_failure_is_error_when_strict() {
        let err = check_outcome(&outcome(Some(7)), true).unwrap_err();
        match err {
            LabError::BuildFailed { code, .. } => assert_eq!(code, Some(7)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_command_is_invocation_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_build("   ", temp_dir.path()).unwrap_err();
        assert!(matches!(err, LabError::BuildInvocation { .. }));
    }

    #[test]
    fn test_unbalanced_quotes_is_invocation_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_build("./build.sh \"unterminated", temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse command"));
    }

    #[test]
    #[serial]
    fn test_missing_script_is_invocation_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_build("./build_and_run.sh", temp_dir.path()).unwrap_err();
        match err {
            LabError::BuildInvocation { command, .. } => {
                assert_eq!(command, "./build_and_run.sh");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_runs_script_in_root_and_reports_exit_code() {
        use crate::test_support::write_script;

        let temp_dir = TempDir::new().unwrap();
        write_script(temp_dir.path(), "build_and_run.sh", "pwd > ran.txt\nexit 3\n");

        let outcome = run_build("./build_and_run.sh", temp_dir.path()).unwrap();
        assert_eq!(outcome.exit_code, Some(3));
        assert!(!outcome.is_success());

        let ran = std::fs::read_to_string(temp_dir.path().join("ran.txt")).unwrap();
        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(Path::new(ran.trim()).canonicalize().unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_relative_root_runs_script() {
        use crate::test_support::write_script;

        let temp_dir = tempfile::Builder::new().tempdir_in(".").unwrap();
        write_script(temp_dir.path(), "build_and_run.sh", "pwd > ran.txt\n");
        let relative_root = Path::new(temp_dir.path().file_name().unwrap());
        assert!(relative_root.is_relative());

        let outcome = run_build("./build_and_run.sh", relative_root).unwrap();
        assert!(outcome.is_success());

        let ran = std::fs::read_to_string(temp_dir.path().join("ran.txt")).unwrap();
        assert_eq!(
            Path::new(ran.trim()).canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_successful_script() {
        use crate::test_support::write_script;

        let temp_dir = TempDir::new().unwrap();
        write_script(temp_dir.path(), "build_and_run.sh", "exit 0\n");

        let outcome = run_build("./build_and_run.sh", temp_dir.path()).unwrap();
        assert!(outcome.is_success());
    }
}
