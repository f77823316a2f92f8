use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the top-level directory of the current repository.
pub fn repo_root() -> Result<PathBuf> {
    let dir = git_output(&["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(dir.trim()))
}

/// Get the path to the Git directory (e.g. .git)
pub fn git_dir() -> Result<PathBuf> {
    let dir = git_output(&["rev-parse", "--git-dir"])?;
    Ok(PathBuf::from(dir.trim()))
}

/// Get the current branch name. Empty when HEAD is detached.
pub fn current_branch() -> Result<String> {
    let name = git_output(&["branch", "--show-current"])?.trim().to_string();
    Ok(name)
}

/// Get the configured `user.name`.
pub fn user_name() -> Result<String> {
    let name = git_output(&["config", "user.name"])?.trim().to_string();
    Ok(name)
}

/// Create a commit with `message`, letting git's own output reach the terminal.
pub fn commit(message: &str) -> Result<()> {
    let status = GitCommand::new("git")
        .args(["commit", "-m", message])
        .status()
        .context("failed to run git commit")?;

    if !status.success() {
        return Err(anyhow!("git commit exited with status {:?}", status.code()));
    }
    Ok(())
}

/// Write the commit message into .git/COMMIT_EDITMSG so the next `git commit`
/// will use it as the default message in the editor.
pub fn write_commit_editmsg(message: &str) -> Result<()> {
    let dir = git_dir()?;
    let path = dir.join("COMMIT_EDITMSG");
    fs::write(&path, message)
        .with_context(|| format!("failed to write commit message to {:?}", path))?;
    Ok(())
}
