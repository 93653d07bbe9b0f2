use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CourseBuddyError, CourseBuddyResult};

pub const CONFIG_FILE_NAME: &str = "coursebuddy.toml";
pub const DEFAULT_FEEDBACK_FILE: &str = "feedback.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file for the feedback store, relative to the working directory.
    #[serde(default = "default_feedback_file")]
    pub feedback_file: PathBuf,
    /// What to do when the backing file exists but cannot be parsed.
    #[serde(default)]
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            feedback_file: default_feedback_file(),
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

fn default_feedback_file() -> PathBuf {
    PathBuf::from(DEFAULT_FEEDBACK_FILE)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    /// Warn and continue with an empty store.
    #[default]
    Recover,
    /// Report the error and stop without touching the file.
    Abort,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Reject feedback for codes missing from the catalog.
    #[serde(default)]
    pub require_catalog_course: bool,
}

/// Replaces the built-in course table when `courses` is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub credits: Option<u8>,
    #[serde(default)]
    pub prereqs: Vec<String>,
}

/// Resolution order: explicit path, working directory, user config dir.
fn resolve_config_path(explicit: Option<&Path>) -> CourseBuddyResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CourseBuddyError::Config(format!(
                "{} not found",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(Some(candidate));
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("coursebuddy").join("config.toml");
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in user config directory");
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Load the configuration, falling back to defaults when no file is found.
/// An explicit path that does not exist is an error.
pub fn load_config(explicit: Option<&Path>) -> CourseBuddyResult<AppConfig> {
    let Some(path) = resolve_config_path(explicit)? else {
        tracing::debug!("no config file found; using defaults");
        return Ok(AppConfig::default());
    };
    let config = load_config_from(&path)?;
    tracing::info!(
        path = %path.display(),
        feedback_file = %config.storage.feedback_file.display(),
        "config loaded"
    );
    Ok(config)
}

pub fn load_config_from(path: &Path) -> CourseBuddyResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn render_config(config: &AppConfig) -> CourseBuddyResult<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.feedback_file, PathBuf::from("feedback.json"));
        assert_eq!(config.storage.on_parse_error, ParseErrorPolicy::Recover);
        assert!(!config.feedback.require_catalog_course);
        assert!(config.catalog.courses.is_empty());
    }

    #[test]
    fn test_parses_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[storage]
feedback_file = "data/fb.json"
on_parse_error = "abort"

[feedback]
require_catalog_course = true

[[catalog.courses]]
code = "MAT320"
title = "Discrete Mathematics for Computing"
credits = 3
prereqs = ["MAT181"]
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.storage.feedback_file, PathBuf::from("data/fb.json"));
        assert_eq!(config.storage.on_parse_error, ParseErrorPolicy::Abort);
        assert!(config.feedback.require_catalog_course);
        assert_eq!(config.catalog.courses.len(), 1);
        assert_eq!(config.catalog.courses[0].credits, Some(3));
        assert_eq!(config.catalog.courses[0].prereqs, vec!["MAT181".to_string()]);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(CourseBuddyError::Config(_))));
    }

    #[test]
    fn test_rendered_config_parses_back() {
        let rendered = render_config(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.storage.feedback_file, PathBuf::from("feedback.json"));
    }
}
