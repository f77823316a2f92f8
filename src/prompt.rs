use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, queue};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::io::{self, Write};
use thiserror::Error;

/// The user pressed Ctrl+C (or Esc in the limited prompt).
#[derive(Debug, Error)]
#[error("prompt interrupted")]
pub struct Interrupted;

/// The question kinds the wizard needs from a prompt engine.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize>;

    /// Free text. An empty answer yields `default`.
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Free text that can never grow past `max_len` characters, shown after
    /// `label`.
    fn limited_input(&mut self, message: &str, label: &str, max_len: usize) -> Result<String>;

    /// Tell the user why the last answer was rejected.
    fn warn(&mut self, message: &str);
}

/// Interactive prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn from_dialoguer(err: dialoguer::Error) -> anyhow::Error {
    match &err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            Interrupted.into()
        }
        _ => err.into(),
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(from_dialoguer)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(from_dialoguer)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(from_dialoguer)
    }

    fn limited_input(&mut self, message: &str, label: &str, max_len: usize) -> Result<String> {
        // stdout may be the message sink (`--print`), so draw on stderr like dialoguer
        let mut out = io::stderr();
        writeln!(out, "{} {}", "?".yellow().bold(), message.bold())?;

        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        let line = read_limited(&mut out, label, max_len, event::read);
        let restored = terminal::disable_raw_mode().context("failed to restore terminal mode");
        writeln!(out)?;

        let line = line?;
        restored?;
        Ok(line)
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{} {}", ">>".red().bold(), message.red());
    }
}

/// Read one line from `next_event`, dropping keystrokes past `max_len`.
fn read_limited<W, E>(out: &mut W, label: &str, max_len: usize, mut next_event: E) -> Result<String>
where
    W: Write,
    E: FnMut() -> io::Result<Event>,
{
    let mut line = String::new();

    loop {
        render_limited(out, label, &line, max_len)?;

        let Event::Key(key) = next_event().context("failed to read key")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => return Ok(line),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(Interrupted.into());
            }
            KeyCode::Esc => return Err(Interrupted.into()),
            KeyCode::Backspace => {
                line.pop();
            }
            KeyCode::Char(c) if line.chars().count() < max_len => line.push(c),
            _ => {}
        }
    }
}

fn render_limited<W: Write>(out: &mut W, label: &str, line: &str, max_len: usize) -> Result<()> {
    let left = max_len.saturating_sub(line.chars().count());
    let counter = format!("({left} chars left)");
    let counter = if left <= 5 {
        counter.red()
    } else {
        counter.dimmed()
    };

    let text = if label.is_empty() {
        format!("{counter} {line}")
    } else {
        format!("{counter} {} {line}", label.cyan())
    };

    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(text)
    )?;
    out.flush()?;
    Ok(())
}
