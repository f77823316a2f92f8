mod answers;
mod branch;
mod cli_args;
mod config;
mod decorate;
mod git;
mod logging;
mod message;
mod preview;
mod prompt;
mod setup;
mod sink;
mod types;
mod validate;
mod wizard;

use anyhow::{bail, Result};
use clap::Parser;
use std::process::ExitCode;

use crate::answers::Answers;
use crate::cli_args::{Cli, Command, ComposeArgs};
use crate::config::Config;
use crate::decorate::{decorate_issue, decorate_pic};
use crate::message::{compose_message, header_label};
use crate::prompt::{Interrupted, TerminalPrompter};
use crate::sink::{CommitSink, StdoutSink};
use crate::validate::{subject_ceiling, AnswerRules};
use crate::wizard::{Outcome, PromptDefaults, Wizard};

/// Interactive mode: ask the questions, preview, confirm, deliver.
fn run_wizard(cli: &Cli, config: &Config) -> Result<()> {
    let wizard = Wizard::new(config, setup::prompt_defaults())?;
    let sink = setup::build_sink(cli);
    let mut prompter = TerminalPrompter::new();

    match wizard.run(&mut prompter, sink.as_ref(), cli.print)? {
        Outcome::Delivered(message) => {
            log::info!("Delivered {} line message", message.lines().count());
        }
        Outcome::Discarded => {}
    }
    Ok(())
}

/// Non-interactive mode: the same filters and validators, answers from flags.
fn run_compose(config: &Config, args: &ComposeArgs) -> Result<()> {
    let rules = AnswerRules::new(config)?;

    let kind = args.kind.clone().unwrap_or_default();
    if !kind.is_empty() && !config.types.iter().any(|t| t.key == kind) {
        bail!("unknown change type '{kind}'");
    }

    let defaults = if args.jira.is_none() || args.pic.is_none() {
        setup::prompt_defaults()
    } else {
        PromptDefaults::default()
    };
    let jira = rules.issue(args.jira.as_deref().unwrap_or(&defaults.issue))?;
    let pic = rules.pic(args.pic.as_deref().unwrap_or(&defaults.pic))?;

    let label = header_label(
        &kind,
        &decorate_issue(config, &jira),
        &decorate_pic(config, &pic),
    );
    let subject = rules.subject(&args.subject, subject_ceiling(config, &label))?;

    let answers = Answers {
        kind,
        jira,
        pic,
        subject,
        body: args.body.as_deref().unwrap_or_default().trim().to_string(),
        is_breaking: args.breaking.is_some(),
        breaking: args.breaking.clone().unwrap_or_default(),
        is_issue_affected: args.issues.is_some(),
        issues_body: String::new(),
        issues: args.issues.clone().unwrap_or_default(),
    };

    StdoutSink.deliver(&compose_message(&answers, config))
}

/// Print the issue reference guessed from a branch name.
fn run_branch(name: Option<&str>) -> Result<()> {
    let branch = match name {
        Some(name) => name.to_string(),
        None => git::current_branch()?,
    };
    if let Some(issue) = branch::extract_issue_reference(&branch) {
        println!("{issue}");
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_sources(cli)?;
    log::debug!("Resolved config: {config:?}");

    match &cli.command {
        Some(Command::Compose(args)) => run_compose(&config, args),
        Some(Command::Branch { name }) => run_branch(name.as_deref()),
        None => run_wizard(cli, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<Interrupted>() => ExitCode::from(130),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
