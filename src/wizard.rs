use crate::answers::Answers;
use crate::config::Config;
use crate::decorate::{decorate_issue, decorate_pic};
use crate::message::{compose_message, header_label};
use crate::preview;
use crate::prompt::Prompter;
use crate::sink::CommitSink;
use crate::types;
use crate::validate::{subject_ceiling, AnswerRules, ValidationError};
use anyhow::Result;

/// One question of the wizard, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Type,
    Jira,
    Pic,
    Subject,
    Body,
    IsBreaking,
    ConfirmBreaking,
    Breaking,
    IsIssueAffected,
    IssuesBody,
    Issues,
}

impl Step {
    pub const ALL: [Step; 11] = [
        Step::Type,
        Step::Jira,
        Step::Pic,
        Step::Subject,
        Step::Body,
        Step::IsBreaking,
        Step::ConfirmBreaking,
        Step::Breaking,
        Step::IsIssueAffected,
        Step::IssuesBody,
        Step::Issues,
    ];

    /// Whether this step is asked, given the answers collected so far.
    pub fn is_visible(self, answers: &Answers, config: &Config) -> bool {
        match self {
            Step::Type | Step::Jira | Step::Pic | Step::Subject => true,
            Step::Body => !config.skip_description,
            Step::IsBreaking => !config.skip_breaking,
            Step::ConfirmBreaking | Step::Breaking => answers.is_breaking,
            // jira mode always appends the issue reference instead
            Step::IsIssueAffected => !config.jira_mode,
            Step::IssuesBody => answers.is_issue_affected && answers.body.is_empty(),
            Step::Issues => answers.is_issue_affected,
        }
    }
}

/// Values pre-filled from the repository.
#[derive(Debug, Clone, Default)]
pub struct PromptDefaults {
    /// Issue reference guessed from the branch name.
    pub issue: String,
    /// Upcased git user name.
    pub pic: String,
}

/// What happened to the composed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Delivered(String),
    Discarded,
}

/// Asks the questions and assembles the message.
pub struct Wizard<'a> {
    config: &'a Config,
    rules: AnswerRules,
    defaults: PromptDefaults,
}

impl<'a> Wizard<'a> {
    pub fn new(config: &'a Config, defaults: PromptDefaults) -> Result<Self> {
        Ok(Wizard {
            config,
            rules: AnswerRules::new(config)?,
            defaults,
        })
    }

    /// Ask every visible step in order and return the answers.
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<Answers> {
        let mut answers = Answers::default();
        for step in Step::ALL {
            if step.is_visible(&answers, self.config) {
                self.ask(step, prompter, &mut answers)?;
            } else {
                log::trace!("Skipping {step:?}");
            }
        }
        Ok(answers)
    }

    /// Collect answers, then hand the message to `sink`.
    ///
    /// With `skip_confirm` the message goes straight to the sink. Otherwise a
    /// preview is printed and the user has to confirm; declining discards it.
    pub fn run(
        &self,
        prompter: &mut dyn Prompter,
        sink: &dyn CommitSink,
        skip_confirm: bool,
    ) -> Result<Outcome> {
        let answers = self.collect(prompter)?;
        let message = compose_message(&answers, self.config);

        if !skip_confirm {
            println!();
            println!("{}", preview::render_preview(&message));
            if !prompter.confirm("Are you sure that you want to commit?", true)? {
                log::info!("Commit message discarded");
                return Ok(Outcome::Discarded);
            }
        }

        sink.deliver(&message)?;
        Ok(Outcome::Delivered(message))
    }

    fn ask(&self, step: Step, prompter: &mut dyn Prompter, answers: &mut Answers) -> Result<()> {
        let config = self.config;
        match step {
            Step::Type => {
                let items = types::choices(&config.types);
                let index = prompter.select(
                    "Select the type of change that you're committing:",
                    &items,
                    0,
                )?;
                answers.kind = config
                    .types
                    .get(index)
                    .map(|t| t.key.clone())
                    .unwrap_or_default();
            }
            Step::Jira => {
                let optional = if config.jira_optional { " (optional)" } else { "" };
                let message = format!(
                    "Enter JIRA issue ({}-12345){optional}:",
                    config.jira_prefix
                );
                answers.jira = ask_until_valid(
                    prompter,
                    |p| p.input(&message, &self.defaults.issue),
                    |raw| self.rules.issue(raw),
                )?;
            }
            Step::Pic => {
                answers.pic = ask_until_valid(
                    prompter,
                    |p| p.input("Enter PIC name of this changes:", &self.defaults.pic),
                    |raw| self.rules.pic(raw),
                )?;
            }
            Step::Subject => {
                let label = header_label(
                    &answers.kind,
                    &decorate_issue(config, &answers.jira),
                    &decorate_pic(config, &answers.pic),
                );
                let ceiling = subject_ceiling(config, &label);
                answers.subject = ask_until_valid(
                    prompter,
                    |p| {
                        p.limited_input(
                            "Write a short, imperative tense description of the change:",
                            &label,
                            ceiling,
                        )
                    },
                    |raw| self.rules.subject(raw, ceiling),
                )?;
            }
            Step::Body => {
                answers.body = prompter
                    .input(
                        "Provide a longer description of the change: (press enter to skip)",
                        &config.default_body,
                    )?
                    .trim()
                    .to_string();
            }
            Step::IsBreaking => {
                answers.is_breaking = prompter.confirm("Are there any breaking changes?", false)?;
            }
            Step::ConfirmBreaking => {
                answers.is_breaking = prompter.confirm(
                    "You do know that this will bump the major version, are you sure?",
                    false,
                )?;
            }
            Step::Breaking => {
                answers.breaking = prompter.input("Describe the breaking changes:", "")?;
            }
            Step::IsIssueAffected => {
                answers.is_issue_affected = prompter.confirm(
                    "Does this change affect any open issues?",
                    !config.default_issues.is_empty(),
                )?;
            }
            Step::IssuesBody => {
                answers.issues_body = prompter.input(
                    "If issues are closed, the commit requires a body. Please enter a longer description of the commit itself:",
                    "-",
                )?;
            }
            Step::Issues => {
                answers.issues = prompter.input(
                    "Add issue references (e.g. \"fix #123\", \"re #123\".):",
                    &config.default_issues,
                )?;
            }
        }
        Ok(())
    }
}

/// Ask with `ask` until `check` accepts the answer, warning on each rejection.
fn ask_until_valid<A, C>(prompter: &mut dyn Prompter, mut ask: A, check: C) -> Result<String>
where
    A: FnMut(&mut dyn Prompter) -> Result<String>,
    C: Fn(&str) -> Result<String, ValidationError>,
{
    loop {
        let raw = ask(&mut *prompter)?;
        match check(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("Rejected answer {raw:?}: {err}");
                prompter.warn(&err.to_string());
            }
        }
    }
}
