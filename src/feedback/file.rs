use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::CourseBuddyResult;
use crate::feedback::store::FeedbackStore;

/// Result of reading the backing file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// File parsed, or absent (empty store).
    Loaded(FeedbackStore),
    /// File exists but is not a valid feedback document.
    ParseError { path: PathBuf, details: String },
}

/// JSON file holding the whole feedback store. Rewritten on every save.
#[derive(Debug, Clone)]
pub struct FeedbackFile {
    path: PathBuf,
}

impl FeedbackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> CourseBuddyResult<LoadOutcome> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no feedback file; starting empty");
                return Ok(LoadOutcome::Loaded(FeedbackStore::new()));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<FeedbackStore>(&content) {
            Ok(store) => {
                tracing::info!(
                    path = %self.path.display(),
                    entries = store.len(),
                    "feedback loaded"
                );
                Ok(LoadOutcome::Loaded(store))
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "feedback file is malformed");
                Ok(LoadOutcome::ParseError {
                    path: self.path.clone(),
                    details: e.to_string(),
                })
            }
        }
    }

    /// Overwrite the file with the full store, pretty-printed with 4-space indent.
    pub fn save(&self, store: &FeedbackStore) -> CourseBuddyResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        store.serialize(&mut serializer)?;
        std::fs::write(&self.path, buf)?;
        tracing::info!(path = %self.path.display(), entries = store.len(), "feedback saved");
        Ok(())
    }
}
