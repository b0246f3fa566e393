use std::fs;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::Error;

/// Clone `url` into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
pub fn clone(url: &str, target_dir: &Path) -> Result<(), Error> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("Cloning repository {} into {}", url, target_dir.display());
    let output = Command::new("git")
        .args(["clone", url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the template repository.\n\
                Error: {}",
                stderr
            )
        } else {
            stderr.to_string()
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message,
        });
    }

    Ok(())
}

/// Update an existing checkout with `git pull`.
pub fn pull(repo_dir: &Path) -> Result<(), Error> {
    debug!("Updating repository in {}", repo_dir.display());
    let output = Command::new("git")
        .arg("pull")
        .current_dir(repo_dir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: "pull".to_string(),
            dir: repo_dir.display().to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: "pull".to_string(),
            dir: repo_dir.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Whether `dir` looks like a git checkout.
pub fn is_checkout(dir: &Path) -> bool {
    dir.join(".git").exists()
}
