use crate::git;
use anyhow::Result;

/// Receives the finished commit message. Called at most once per run.
pub trait CommitSink {
    fn deliver(&self, message: &str) -> Result<()>;
}

/// Commit straight away with `git commit -m`.
///
/// This is the caller-side commit step: czjira only builds the message and
/// hands it to git, which performs the commit.
pub struct GitCommitSink;

impl CommitSink for GitCommitSink {
    fn deliver(&self, message: &str) -> Result<()> {
        log::info!("Committing");
        git::commit(message)
    }
}

/// Leave the message in .git/COMMIT_EDITMSG for a later `git commit`.
pub struct EditMsgSink;

impl CommitSink for EditMsgSink {
    fn deliver(&self, message: &str) -> Result<()> {
        git::write_commit_editmsg(message)?;
        println!("Commit message written to .git/COMMIT_EDITMSG");
        Ok(())
    }
}

/// Print the message to stdout; used for `--print` and `compose`.
pub struct StdoutSink;

impl CommitSink for StdoutSink {
    fn deliver(&self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}
