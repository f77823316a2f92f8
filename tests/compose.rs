use assert_cmd::{cargo, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run czjira inside an empty directory with an isolated home.
fn czjira(dir: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("CZJIRA_JIRA_PREFIX");
    cmd
}

/// Write `contents` as the config file and return `--config <path>` args.
fn with_config(dir: &TempDir, contents: &str) -> Vec<String> {
    let path = dir.path().join("czjira.toml");
    fs::write(&path, contents).unwrap();
    vec!["--config".to_string(), path.display().to_string()]
}

#[test]
fn jira_mode_message_from_flags() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "");

    czjira(&dir)
        .args(&config)
        .args([
            "compose",
            "--type",
            "feat",
            "--jira",
            "raya-123",
            "--pic",
            "JDOE",
            "--subject",
            "add retry logic",
        ])
        .assert()
        .success()
        .stdout("feat: [RAYA-123] [JDOE] add retry logic\n\n[RAYA-123]\n");
}

#[test]
fn all_sections_without_jira_mode() {
    let dir = TempDir::new().unwrap();
    let config = with_config(
        &dir,
        r#"
jira_mode = false
jira_prepend = "("
jira_append = ")"
"#,
    );

    czjira(&dir)
        .args(&config)
        .args([
            "compose",
            "--type",
            "fix",
            "--jira",
            "RAYA-7",
            "--pic",
            "ann",
            "--subject",
            "stop crash",
            "--body",
            "Parser no longer panics on empty input.",
            "--breaking",
            "BREAKING CHANGE: empty input now errors",
            "--issues",
            "fix #12",
        ])
        .assert()
        .success()
        .stdout(
            "fix: (RAYA-7) [ann] stop crash\n\n\
             Parser no longer panics on empty input.\n\n\
             BREAKING CHANGE: empty input now errors\n\n\
             fix #12\n",
        );
}

#[test]
fn blank_body_is_left_out() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "jira_mode = false");

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--type", "fix", "--jira", "RAYA-1", "--pic", "ANN", "--subject",
            "stop crash", "--body", "   ", "--issues", "fix #12",
        ])
        .assert()
        .success()
        .stdout("fix: [RAYA-1] [ANN] stop crash\n\nfix #12\n");
}

#[test]
fn subject_periods_are_stripped() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "jira_mode = false");

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--type", "fix", "--jira", "RAYA-1", "--pic", "ANN", "--subject",
            "fix bug..",
        ])
        .assert()
        .success()
        .stdout("fix: [RAYA-1] [ANN] fix bug\n");
}

#[test]
fn exclamation_mark_for_breaking_change() {
    let dir = TempDir::new().unwrap();
    let config = with_config(
        &dir,
        r#"
exclamation_mark = true
jira_optional = true
"#,
    );

    czjira(&dir)
        .args(&config)
        .args([
            "compose",
            "--type",
            "feat",
            "--jira",
            "",
            "--pic",
            "ANN",
            "--subject",
            "remove v1 api",
            "--breaking",
            "drop v1",
        ])
        .assert()
        .success()
        .stdout("feat!: [ANN] remove v1 api\n\nBREAKING CHANGE: drop v1\n");
}

#[test]
fn invalid_issue_reference_fails() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "");

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--jira", "RAYA-1234567", "--pic", "ANN", "--subject", "whatever",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid issue reference"));
}

#[test]
fn empty_pic_fails() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "");

    czjira(&dir)
        .args(&config)
        .args(["compose", "--jira", "RAYA-1", "--pic", "  ", "--subject", "whatever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PIC name can not be empty"));
}

#[test]
fn subject_over_header_width_fails() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "max_header_width = 20");

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--type", "feat", "--jira", "RAYA-1", "--pic", "A", "--subject", "ab",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can not be longer than 1 characters"));
}

#[test]
fn unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "");

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--type", "wip", "--jira", "RAYA-1", "--pic", "A", "--subject", "ab",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown change type 'wip'"));
}

#[test]
fn custom_types_from_config() {
    let dir = TempDir::new().unwrap();
    let config = with_config(
        &dir,
        r#"
jira_mode = false

[[types]]
key = "wip"
description = "Work in progress"
title = "WIP"
"#,
    );

    czjira(&dir)
        .args(&config)
        .args([
            "compose", "--type", "wip", "--jira", "RAYA-1", "--pic", "A", "--subject", "ab",
        ])
        .assert()
        .success()
        .stdout("wip: [RAYA-1] [A] ab\n");
}

#[test]
fn jira_prefix_flag_and_env_override_config() {
    let dir = TempDir::new().unwrap();
    let config = with_config(&dir, "jira_prefix = \"XYZ\"\njira_mode = false");

    czjira(&dir)
        .args(&config)
        .args(["--jira-prefix", "ABC"])
        .args(["compose", "--jira", "abc-9", "--pic", "A", "--subject", "ab"])
        .assert()
        .success()
        .stdout("[ABC-9] [A] ab\n");

    czjira(&dir)
        .args(&config)
        .env("CZJIRA_JIRA_PREFIX", "ENV")
        .args(["compose", "--jira", "ENV-10", "--pic", "A", "--subject", "ab"])
        .assert()
        .success()
        .stdout("[ENV-10] [A] ab\n");
}

#[test]
fn user_config_in_home_is_read() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".config")).unwrap();
    fs::write(
        dir.path().join(".config").join("czjira.toml"),
        "jira_prefix = \"HOME\"\njira_mode = false\n",
    )
    .unwrap();

    czjira(&dir)
        .args(["compose", "--jira", "home-1", "--pic", "A", "--subject", "ab"])
        .assert()
        .success()
        .stdout("[HOME-1] [A] ab\n");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    czjira(&dir)
        .args(["--config", "does-not-exist.toml", "branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn branch_reference_is_extracted() {
    let dir = TempDir::new().unwrap();

    czjira(&dir)
        .args(["branch", "feature/raya-4521-retry"])
        .assert()
        .success()
        .stdout("raya-4521\n");

    czjira(&dir)
        .args(["branch", "main"])
        .assert()
        .success()
        .stdout("");
}
