use serde::Deserialize;

/// One selectable kind of change (`feat`, `fix`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeType {
    pub key: String,
    pub description: String,
    #[serde(default)]
    pub title: String,
}

impl ChangeType {
    fn new(key: &str, description: &str, title: &str) -> Self {
        ChangeType {
            key: key.to_string(),
            description: description.to_string(),
            title: title.to_string(),
        }
    }
}

/// The conventional commit catalog used when no `types` are configured.
pub fn default_types() -> Vec<ChangeType> {
    vec![
        ChangeType::new("feat", "A new feature", "Features"),
        ChangeType::new("fix", "A bug fix", "Bug Fixes"),
        ChangeType::new("docs", "Documentation only changes", "Documentation"),
        ChangeType::new(
            "style",
            "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
            "Styles",
        ),
        ChangeType::new(
            "refactor",
            "A code change that neither fixes a bug nor adds a feature",
            "Code Refactoring",
        ),
        ChangeType::new(
            "perf",
            "A code change that improves performance",
            "Performance Improvements",
        ),
        ChangeType::new(
            "test",
            "Adding missing tests or correcting existing tests",
            "Tests",
        ),
        ChangeType::new(
            "build",
            "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
            "Builds",
        ),
        ChangeType::new(
            "ci",
            "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
            "Continuous Integrations",
        ),
        ChangeType::new(
            "chore",
            "Other changes that don't modify src or test files",
            "Chores",
        ),
        ChangeType::new("revert", "Reverts a previous commit", "Reverts"),
    ]
}

/// Render the selection list, keys right-padded so descriptions line up.
///
/// `feat:` in a catalog whose longest key is `refactor` becomes
/// `"feat:     A new feature"`.
pub fn choices(types: &[ChangeType]) -> Vec<String> {
    let width = types
        .iter()
        .map(|t| t.key.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    types
        .iter()
        .map(|t| {
            let label = format!("{}:", t.key);
            format!("{label:<width$} {}", t.description)
        })
        .collect()
}
