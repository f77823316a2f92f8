use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "czjira",
    version,
    about = "Interactive conventional commit builder with issue and PIC tags"
)]
#[command(group(
    ArgGroup::new("sink_group")
        .args(["apply", "print"])
        .multiple(false)
))]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this TOML file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Issue key prefix (e.g. RAYA); overrides configuration files
    #[arg(long, env = "CZJIRA_JIRA_PREFIX", global = true)]
    pub jira_prefix: Option<String>,

    /// Write the message into .git/COMMIT_EDITMSG instead of committing
    #[arg(long)]
    pub apply: bool,

    /// Skip the preview and confirmation and print the message to stdout
    #[arg(long)]
    pub print: bool,

    /// Subcommand (e.g. 'compose')
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands, e.g. `czjira compose --subject "add retry"`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a message from flags, without prompting, and print it
    Compose(ComposeArgs),

    /// Print the issue reference found in a branch name (the current branch by default)
    Branch {
        /// Branch name to inspect
        name: Option<String>,
    },
}

/// Answers for `czjira compose`.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Change type key (e.g. feat)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Issue reference (e.g. RAYA-123); defaults to the one in the branch name
    #[arg(long)]
    pub jira: Option<String>,

    /// Person in charge; defaults to the upcased git user name
    #[arg(long)]
    pub pic: Option<String>,

    /// Short, imperative description of the change
    #[arg(long)]
    pub subject: String,

    /// Longer description
    #[arg(long)]
    pub body: Option<String>,

    /// Breaking change description
    #[arg(long)]
    pub breaking: Option<String>,

    /// Issue references (e.g. "fix #123")
    #[arg(long)]
    pub issues: Option<String>,
}
