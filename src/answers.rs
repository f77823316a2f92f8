/// Everything collected from the user during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub kind: String,
    pub jira: String,
    pub pic: String,
    pub subject: String,
    pub body: String,
    pub is_breaking: bool,
    pub breaking: String,
    pub is_issue_affected: bool,
    pub issues_body: String,
    pub issues: String,
}

impl Answers {
    /// The type as it appears in the header, with the `!` marker when the
    /// change is breaking and the marker is enabled.
    pub fn header_type(&self, exclamation_mark: bool) -> String {
        if exclamation_mark && self.is_breaking && !self.kind.is_empty() {
            format!("{}!", self.kind)
        } else {
            self.kind.clone()
        }
    }
}
