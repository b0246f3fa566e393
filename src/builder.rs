//! Runs the external site build inside the assembled project.

use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};

/// Run `command` (program followed by arguments) in `dir` and return its
/// combined stdout and stderr. Each output line of a successful run is
/// logged at info level. A non-zero exit status, or a command that
/// cannot be started, is an [`Error::BuildCommand`] carrying the output.
pub fn run(command: &[String], dir: &Path) -> Result<String> {
    let display = command.join(" ");
    let (program, args) = command.split_first().ok_or_else(|| Error::BuildCommand {
        command: display.clone(),
        output: "empty build command".to_string(),
    })?;

    info!("Running `{}` in {}", display, dir.display());
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::BuildCommand {
            command: display.clone(),
            output: e.to_string(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(Error::BuildCommand {
            command: display,
            output: combined,
        });
    }

    for line in combined.lines().filter(|l| !l.trim().is_empty()) {
        info!("{}", line);
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn test_run_captures_output_in_dir() {
        let temp = TempDir::new().unwrap();
        let out = run(
            &cmd(&["sh", "-c", "mkdir build && echo built; echo warn 1>&2"]),
            temp.path(),
        )
        .unwrap();
        assert!(out.contains("built"));
        assert!(out.contains("warn"));
        assert!(temp.path().join("build").is_dir());
    }

    #[test]
    #[cfg(unix)]
    fn test_run_logs_output_at_info() {
        testing_logger::setup();
        let temp = TempDir::new().unwrap();
        run(&cmd(&["sh", "-c", "echo '== Build complete'"]), temp.path()).unwrap();

        testing_logger::validate(|logs| {
            assert!(logs
                .iter()
                .any(|l| l.level == log::Level::Info && l.body == "== Build complete"));
        });
    }

    #[test]
    #[cfg(unix)]
    fn test_run_non_zero_status_fails_with_output() {
        let temp = TempDir::new().unwrap();
        let err = run(&cmd(&["sh", "-c", "echo broken gem; exit 3"]), temp.path()).unwrap_err();
        match err {
            Error::BuildCommand { command, output } => {
                assert!(command.starts_with("sh -c"));
                assert!(output.contains("broken gem"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_missing_program() {
        let temp = TempDir::new().unwrap();
        let err = run(&cmd(&["definitely-not-a-real-program-xyz"]), temp.path()).unwrap_err();
        assert!(matches!(err, Error::BuildCommand { .. }));
    }

    #[test]
    fn test_run_empty_command() {
        let temp = TempDir::new().unwrap();
        assert!(run(&[], temp.path()).is_err());
    }
}
