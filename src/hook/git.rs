//! Git repository initialization for the generated project

use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, error, info};

/// Error from running a git command
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

/// Create the initial git history: an empty root commit followed by a
/// commit holding the full project skeleton.
pub fn initialize_repository(project_root: &Path) -> Result<(), GitError> {
    run_git(project_root, &["init"])?;
    run_git(
        project_root,
        &[
            "commit",
            "--allow-empty",
            "-m",
            "chore: initial empty root-commit",
        ],
    )?;
    run_git(project_root, &["add", "."])?;
    run_git(
        project_root,
        &["commit", "-m", "chore: add project skeleton"],
    )?;

    info!("Initialized git repository with the project skeleton");
    Ok(())
}

fn run_git(project_root: &Path, args: &[&str]) -> Result<(), GitError> {
    let command = format!("git {}", args.join(" "));
    debug!("Running {}", command);

    let output = Command::new("git")
        .args(args)
        .current_dir(project_root)
        .output()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        error!(
            "{} failed with {}\nstdout: {}\nstderr: {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        return Err(GitError::CommandFailed {
            command,
            status: output.status,
        });
    }

    Ok(())
}
