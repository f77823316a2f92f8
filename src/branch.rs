/// Guess an issue reference (`ABC-123`) from a branch name.
///
/// Returns the first `<alphanumerics>-<digits>` token whose start is not
/// glued to a preceding alphanumeric run (optionally followed by a hyphen),
/// so `feature/abc-123-fix` yields `abc-123` rather than `123-fix`.
/// Case is preserved; the issue prompt upcases it.
pub fn extract_issue_reference(branch: &str) -> Option<String> {
    let chars: Vec<char> = branch.chars().collect();

    (0..chars.len())
        .filter(|&start| !glued_to_previous_token(&chars, start))
        .find_map(|start| match_token_at(&chars, start))
        .map(|token| token.into_iter().collect())
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// True when the text before `start` ends in an alphanumeric, or in an
/// alphanumeric followed by a single hyphen.
fn glued_to_previous_token(chars: &[char], start: usize) -> bool {
    match start.checked_sub(1).map(|i| chars[i]) {
        None => false,
        Some(c) if is_token_char(c) => true,
        Some('-') => start >= 2 && is_token_char(chars[start - 2]),
        Some(_) => false,
    }
}

/// Match `[a-zA-Z0-9]+-[0-9]+` anchored at `start`.
fn match_token_at(chars: &[char], start: usize) -> Option<Vec<char>> {
    let run = chars[start..].iter().take_while(|c| is_token_char(**c)).count();
    if run == 0 {
        return None;
    }

    let hyphen = start + run;
    if chars.get(hyphen) != Some(&'-') {
        return None;
    }
    let digits = chars[hyphen + 1..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();

    (digits > 0).then(|| chars[start..hyphen + 1 + digits].to_vec())
}
