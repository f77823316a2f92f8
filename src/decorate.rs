use crate::config::Config;

/// Wrap `value` in its decoration and add the trailing separator space.
///
/// An empty value renders as an empty string, never as a bare pair of
/// decorations.
pub fn decorate(value: &str, prepend: &str, append: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prepend}{value}{append} ")
    }
}

/// Decorate an issue reference with the configured `jira_prepend`/`jira_append`.
pub fn decorate_issue(config: &Config, issue: &str) -> String {
    decorate(issue, &config.jira_prepend, &config.jira_append)
}

/// Decorate a person-in-charge tag with the configured `pic_prepend`/`pic_append`.
pub fn decorate_pic(config: &Config, pic: &str) -> String {
    decorate(pic, &config.pic_prepend, &config.pic_append)
}
