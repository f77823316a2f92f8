use log::debug;
use crate::branch::extract_issue_reference;
use crate::cli_args::Cli;
use crate::git;
use crate::sink::{CommitSink, EditMsgSink, GitCommitSink, StdoutSink};
use crate::wizard::PromptDefaults;

/// Pick where the finished message goes based on the CLI flags.
pub fn build_sink(cli: &Cli) -> Box<dyn CommitSink> {
    if cli.print {
        debug!("Delivering to stdout");
        Box::new(StdoutSink)
    } else if cli.apply {
        debug!("Delivering to .git/COMMIT_EDITMSG");
        Box::new(EditMsgSink)
    } else {
        debug!("Delivering to git commit");
        Box::new(GitCommitSink)
    }
}

/// Issue reference from the branch name and the git user name, both
/// falling back to empty when git has nothing to say.
pub fn prompt_defaults() -> PromptDefaults {
    let issue = match git::current_branch() {
        Ok(branch) => {
            let issue = extract_issue_reference(&branch).unwrap_or_default();
            debug!("Branch {branch:?} suggests issue {issue:?}");
            issue
        }
        Err(err) => {
            debug!("No branch name: {err:#}");
            String::new()
        }
    };

    let pic = match git::user_name() {
        Ok(name) => name.to_uppercase(),
        Err(err) => {
            debug!("No git user name: {err:#}");
            String::new()
        }
    };

    PromptDefaults { issue, pic }
}
