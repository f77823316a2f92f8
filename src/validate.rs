use crate::config::Config;
use regex::Regex;
use thiserror::Error;

/// A rejected answer. The wizard shows the message and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid issue reference, expected {prefix}-<1 to 6 digits>")]
    IssueReference { prefix: String },

    #[error("PIC name can not be empty")]
    EmptyPic,

    #[error("the subject must have at least {min} characters")]
    SubjectTooShort { min: usize },

    #[error("the subject can not be longer than {max} characters")]
    SubjectTooLong { max: usize },
}

/// Trim the subject and drop every trailing period.
pub fn filter_subject(subject: &str) -> String {
    subject.trim().trim_end_matches('.').to_string()
}

/// Longest subject that still fits the header after `label` (type plus
/// decorations) and the optional `!` marker.
pub fn subject_ceiling(config: &Config, label: &str) -> usize {
    let reserved = usize::from(config.exclamation_mark);
    let leading = if label.is_empty() {
        0
    } else {
        label.chars().count() + 1
    };
    config.max_header_width.saturating_sub(reserved + leading)
}

/// Per-field filters and validators, built once per run from the config.
#[derive(Debug, Clone)]
pub struct AnswerRules {
    issue_pattern: Regex,
    prefix: String,
    issue_optional: bool,
    min_subject: usize,
}

impl AnswerRules {
    pub fn new(config: &Config) -> Result<Self, regex::Error> {
        let pattern = format!("^(?:{})-[0-9]{{1,6}}$", regex::escape(&config.jira_prefix));
        Ok(AnswerRules {
            issue_pattern: Regex::new(&pattern)?,
            prefix: config.jira_prefix.clone(),
            issue_optional: config.jira_optional,
            min_subject: config.min_header_width,
        })
    }

    /// Check an already-filtered issue reference against `^<prefix>-\d{1,6}$`.
    pub fn validate_issue(&self, issue: &str) -> Result<(), ValidationError> {
        if self.issue_pattern.is_match(issue) {
            Ok(())
        } else {
            Err(ValidationError::IssueReference {
                prefix: self.prefix.clone(),
            })
        }
    }

    /// Upcase then validate an issue reference. An empty answer passes only
    /// when the reference is optional.
    pub fn issue(&self, raw: &str) -> Result<String, ValidationError> {
        let issue = raw.trim().to_uppercase();
        if issue.is_empty() && self.issue_optional {
            return Ok(issue);
        }
        self.validate_issue(&issue)?;
        Ok(issue)
    }

    pub fn pic(&self, raw: &str) -> Result<String, ValidationError> {
        let pic = raw.trim();
        if pic.is_empty() {
            return Err(ValidationError::EmptyPic);
        }
        Ok(pic.to_string())
    }

    /// Reject input past `ceiling` characters, then filter the subject and
    /// enforce the minimum length.
    pub fn subject(&self, raw: &str, ceiling: usize) -> Result<String, ValidationError> {
        if raw.chars().count() > ceiling {
            return Err(ValidationError::SubjectTooLong { max: ceiling });
        }
        let subject = filter_subject(raw);
        if subject.chars().count() < self.min_subject {
            return Err(ValidationError::SubjectTooShort {
                min: self.min_subject,
            });
        }
        Ok(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_for(prefix: &str) -> AnswerRules {
        let config = Config {
            jira_prefix: prefix.to_string(),
            ..Config::default()
        };
        AnswerRules::new(&config).unwrap()
    }

    #[test]
    fn accepts_prefix_with_one_to_six_digits() {
        let rules = rules_for("RAYA");
        for ok in ["RAYA-1", "RAYA-12", "RAYA-123456"] {
            assert_eq!(rules.validate_issue(ok), Ok(()), "{ok}");
        }
    }

    #[test]
    fn rejects_other_shapes() {
        let rules = rules_for("RAYA");
        for bad in [
            "RAYA-1234567",
            "RAYA-",
            "RAYA123",
            "ABC-123",
            "XRAYA-12",
            "RAYA-12 ",
            "RAYA-12a",
            "",
        ] {
            assert!(rules.validate_issue(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn prefix_metacharacters_are_literal() {
        let rules = rules_for("A.B+");
        assert!(rules.validate_issue("A.B+-42").is_ok());
        assert!(rules.validate_issue("AxBB-42").is_err());
    }

    #[test]
    fn issue_is_upcased_before_validation() {
        let rules = rules_for("RAYA");
        assert_eq!(rules.issue("raya-4521").as_deref(), Ok("RAYA-4521"));
    }

    #[test]
    fn empty_issue_depends_on_optional_flag() {
        let required = rules_for("RAYA");
        assert_eq!(
            required.issue(""),
            Err(ValidationError::IssueReference {
                prefix: "RAYA".into()
            })
        );

        let config = Config {
            jira_optional: true,
            ..Config::default()
        };
        let optional = AnswerRules::new(&config).unwrap();
        assert_eq!(optional.issue("  ").as_deref(), Ok(""));
        assert!(optional.issue("nope").is_err());
    }

    #[test]
    fn pic_must_not_be_blank() {
        let rules = rules_for("RAYA");
        assert_eq!(rules.pic("   "), Err(ValidationError::EmptyPic));
        assert_eq!(rules.pic(" JDOE ").as_deref(), Ok("JDOE"));
    }

    #[test]
    fn subject_trailing_periods_are_stripped() {
        assert_eq!(filter_subject("fix bug.."), "fix bug");
        assert_eq!(filter_subject("  v1.2 release. "), "v1.2 release");
        assert_eq!(filter_subject("..."), "");
    }

    #[test]
    fn subject_minimum_is_checked_after_filtering() {
        let config = Config {
            min_header_width: 3,
            ..Config::default()
        };
        let rules = AnswerRules::new(&config).unwrap();
        assert_eq!(
            rules.subject("ab...", 72),
            Err(ValidationError::SubjectTooShort { min: 3 })
        );
        assert_eq!(rules.subject("abc.", 72).as_deref(), Ok("abc"));
        assert_eq!(
            ValidationError::SubjectTooShort { min: 3 }.to_string(),
            "the subject must have at least 3 characters"
        );
    }

    #[test]
    fn subject_ceiling_is_checked_before_minimum() {
        let rules = rules_for("RAYA");
        assert_eq!(rules.subject("abcd", 4).as_deref(), Ok("abcd"));
        assert_eq!(
            rules.subject("abcdef", 4),
            Err(ValidationError::SubjectTooLong { max: 4 })
        );
        assert_eq!(
            rules.subject("a", 0),
            Err(ValidationError::SubjectTooLong { max: 0 })
        );
    }

    #[test]
    fn ceiling_accounts_for_label_and_marker() {
        let mut config = Config::default();
        assert_eq!(subject_ceiling(&config, ""), 72);
        // "feat: [RAYA-1] [JDOE]" is 21 chars, plus the separating space
        assert_eq!(subject_ceiling(&config, "feat: [RAYA-1] [JDOE]"), 50);
        config.exclamation_mark = true;
        assert_eq!(subject_ceiling(&config, "feat: [RAYA-1] [JDOE]"), 49);
    }
}
