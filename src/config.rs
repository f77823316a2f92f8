use crate::cli_args::Cli;
use crate::git;
use crate::types::{self, ChangeType};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "czjira.toml";
const REPO_FILE_NAME: &str = ".czjira.toml";

/// Final resolved configuration for czjira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub types: Vec<ChangeType>,
    /// Always append the decorated issue reference to the body and skip the
    /// "does this affect open issues" question.
    pub jira_mode: bool,
    pub max_header_width: usize,
    pub min_header_width: usize,
    pub max_line_width: usize,
    pub jira_prefix: String,
    pub jira_optional: bool,
    pub jira_prepend: String,
    pub jira_append: String,
    pub pic_prepend: String,
    pub pic_append: String,
    pub skip_description: bool,
    pub skip_breaking: bool,
    /// Reserve one header character for the `!` breaking marker.
    pub exclamation_mark: bool,
    pub default_body: String,
    pub default_issues: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::fill_defaults(FileConfig::default())
    }
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML files, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flag `--jira-prefix` / env `CZJIRA_JIRA_PREFIX`
    ///   2. `--config <path>` if given, otherwise:
    ///      a. `<repo root>/.czjira.toml`
    ///      b. `~/.config/czjira.toml`
    ///   3. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let repo_cfg = match repo_config_path() {
                    Some(path) => FileConfig::load_if_exists(&path)?,
                    None => FileConfig::default(),
                };
                let user_cfg = match user_config_path() {
                    Some(path) => FileConfig::load_if_exists(&path)?,
                    None => FileConfig::default(),
                };
                repo_cfg.or(user_cfg)
            }
        };

        let cli_cfg = FileConfig {
            jira_prefix: cli.jira_prefix.clone(),
            ..FileConfig::default()
        };

        Config::resolve(cli_cfg.or(file_cfg))
    }

    /// Fill every unset option with its built-in default and check the catalog.
    pub fn resolve(file: FileConfig) -> Result<Self> {
        let cfg = Config::fill_defaults(file);
        if cfg.types.is_empty() {
            bail!("no change types configured");
        }
        let mut seen = HashSet::new();
        for t in &cfg.types {
            if !seen.insert(t.key.as_str()) {
                bail!("duplicate change type key '{}'", t.key);
            }
        }
        Ok(cfg)
    }

    fn fill_defaults(file: FileConfig) -> Self {
        Config {
            types: file.types.unwrap_or_else(types::default_types),
            jira_mode: file.jira_mode.unwrap_or(true),
            max_header_width: file.max_header_width.unwrap_or(72),
            min_header_width: file.min_header_width.unwrap_or(2),
            max_line_width: file.max_line_width.unwrap_or(100),
            jira_prefix: file.jira_prefix.unwrap_or_else(|| "RAYA".to_string()),
            jira_optional: file.jira_optional.unwrap_or(false),
            jira_prepend: file.jira_prepend.unwrap_or_else(|| "[".to_string()),
            jira_append: file.jira_append.unwrap_or_else(|| "]".to_string()),
            pic_prepend: file.pic_prepend.unwrap_or_else(|| "[".to_string()),
            pic_append: file.pic_append.unwrap_or_else(|| "]".to_string()),
            skip_description: file.skip_description.unwrap_or(false),
            skip_breaking: file.skip_breaking.unwrap_or(false),
            exclamation_mark: file.exclamation_mark.unwrap_or(false),
            default_body: file.default_body.unwrap_or_default(),
            default_issues: file.default_issues.unwrap_or_default(),
        }
    }
}

/// One layer of configuration as written in a TOML file. Unset keys stay `None`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub types: Option<Vec<ChangeType>>,
    pub jira_mode: Option<bool>,
    pub max_header_width: Option<usize>,
    pub min_header_width: Option<usize>,
    pub max_line_width: Option<usize>,
    pub jira_prefix: Option<String>,
    pub jira_optional: Option<bool>,
    pub jira_prepend: Option<String>,
    pub jira_append: Option<String>,
    pub pic_prepend: Option<String>,
    pub pic_append: Option<String>,
    pub skip_description: Option<bool>,
    pub skip_breaking: Option<bool>,
    pub exclamation_mark: Option<bool>,
    pub default_body: Option<String>,
    pub default_issues: Option<String>,
}

impl FileConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg = toml::from_str::<FileConfig>(&data)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    fn load_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::trace!("No config at {}", path.display());
            return Ok(FileConfig::default());
        }
        FileConfig::load(path)
    }

    /// Shallow per-key merge: keys set in `self` win, whole values are replaced.
    pub fn or(self, lower: FileConfig) -> FileConfig {
        FileConfig {
            types: self.types.or(lower.types),
            jira_mode: self.jira_mode.or(lower.jira_mode),
            max_header_width: self.max_header_width.or(lower.max_header_width),
            min_header_width: self.min_header_width.or(lower.min_header_width),
            max_line_width: self.max_line_width.or(lower.max_line_width),
            jira_prefix: self.jira_prefix.or(lower.jira_prefix),
            jira_optional: self.jira_optional.or(lower.jira_optional),
            jira_prepend: self.jira_prepend.or(lower.jira_prepend),
            jira_append: self.jira_append.or(lower.jira_append),
            pic_prepend: self.pic_prepend.or(lower.pic_prepend),
            pic_append: self.pic_append.or(lower.pic_append),
            skip_description: self.skip_description.or(lower.skip_description),
            skip_breaking: self.skip_breaking.or(lower.skip_breaking),
            exclamation_mark: self.exclamation_mark.or(lower.exclamation_mark),
            default_body: self.default_body.or(lower.default_body),
            default_issues: self.default_issues.or(lower.default_issues),
        }
    }
}

/// Return `~/.config/czjira.toml`
fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join(FILE_NAME))
}

/// Return `<repo root>/.czjira.toml` when run inside a repository.
fn repo_config_path() -> Option<PathBuf> {
    git::repo_root().ok().map(|root| root.join(REPO_FILE_NAME))
}
