use crate::answers::Answers;
use crate::config::Config;
use crate::decorate::{decorate_issue, decorate_pic};

const BREAKING_PREFIX: &str = "BREAKING CHANGE: ";

/// The header text in front of the subject: `type: ` followed by the
/// decorated issue and PIC, without the trailing separator.
pub fn header_label(kind: &str, issue: &str, pic: &str) -> String {
    let mut label = String::new();
    if !kind.is_empty() {
        label.push_str(kind);
        label.push_str(": ");
    }
    label.push_str(issue);
    label.push_str(pic);
    label.trim_end().to_string()
}

/// Build the first line of the message. `issue` and `pic` are already
/// decorated (or empty). The header is never wrapped.
pub fn compose_header(kind: &str, issue: &str, pic: &str, subject: &str) -> String {
    let label = header_label(kind, issue, pic);
    match (label.is_empty(), subject.is_empty()) {
        (true, _) => subject.to_string(),
        (false, true) => label,
        (false, false) => format!("{label} {subject}"),
    }
}

/// Trim a breaking change note and make sure it carries exactly one
/// `BREAKING CHANGE: ` prefix. Empty notes yield `None`.
pub fn normalize_breaking(raw: &str) -> Option<String> {
    let note = raw.trim();
    if note.is_empty() {
        return None;
    }
    let note = note.strip_prefix(BREAKING_PREFIX).unwrap_or(note);
    Some(format!("{BREAKING_PREFIX}{note}"))
}

/// Raw message parts, before wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sections<'a> {
    pub header: &'a str,
    pub body: &'a str,
    /// Decorated issue reference appended to the body in jira mode.
    pub jira_footer: Option<&'a str>,
    pub breaking: &'a str,
    pub issues: &'a str,
}

/// Join header, body, breaking footer and issue footer with blank lines,
/// leaving out every section that ends up empty.
pub fn assemble(sections: &Sections<'_>, width: usize) -> String {
    let mut body = if sections.body.is_empty() {
        String::new()
    } else {
        wrap(sections.body, width)
    };

    if let Some(tag) = sections.jira_footer.map(str::trim).filter(|t| !t.is_empty()) {
        if !body.is_empty() {
            body.push_str("\n\n");
        }
        body.push_str(tag);
    }

    let breaking = normalize_breaking(sections.breaking)
        .map(|note| wrap(&note, width))
        .unwrap_or_default();

    let issues = if sections.issues.is_empty() {
        String::new()
    } else {
        wrap(sections.issues, width)
    };

    [sections.header.to_string(), body, breaking, issues]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Turn a full set of answers into the final commit message.
pub fn compose_message(answers: &Answers, config: &Config) -> String {
    let issue = decorate_issue(config, &answers.jira);
    let pic = decorate_pic(config, &answers.pic);
    let header = compose_header(
        &answers.header_type(config.exclamation_mark),
        &issue,
        &pic,
        &answers.subject,
    );

    let sections = Sections {
        header: &header,
        body: &answers.body,
        jira_footer: config.jira_mode.then_some(issue.as_str()),
        breaking: &answers.breaking,
        issues: &answers.issues,
    };
    assemble(&sections, config.max_line_width)
}

/// Greedy word wrap at `width` characters.
///
/// Existing newlines are kept, words longer than `width` are never cut and
/// trailing blanks are stripped from every line.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = Vec::new();

    let mut pos = 0;
    while pos < chars.len() {
        match next_chunk(&chars, pos, width) {
            Some(end) => {
                let mut line: String = chars[pos..end].iter().collect();
                if line.ends_with('\n') {
                    line.pop();
                }
                lines.push(line);
                pos = end;
            }
            // a bare line break between chunks is dropped
            None => pos += 1,
        }
    }

    lines
        .join("\n")
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_break(c: char) -> bool {
    c.is_whitespace() || c == '\u{200B}'
}

fn is_line_char(c: char) -> bool {
    !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn skip_breaks(chars: &[char], from: usize) -> usize {
    from + chars[from..].iter().take_while(|c| is_break(**c)).count()
}

/// End index of the chunk starting at `start`: the longest run of at most
/// `width` characters that stops at whitespace or the end of the text, plus
/// the whitespace that follows it. Falls back to one whole word.
fn next_chunk(chars: &[char], start: usize, width: usize) -> Option<usize> {
    let available = chars[start..]
        .iter()
        .take(width)
        .take_while(|c| is_line_char(**c))
        .count();

    for len in (1..=available).rev() {
        let end = start + len;
        if end == chars.len() {
            return Some(end);
        }
        if is_break(chars[end]) {
            return Some(skip_breaks(chars, end));
        }
    }

    let word = chars[start..].iter().take_while(|c| !is_break(**c)).count();
    (word > 0).then(|| skip_breaks(chars, start + word))
}
