use crate::catalog::{CourseCatalog, CourseCode};
use crate::config::FeedbackConfig;
use crate::errors::CourseBuddyResult;
use crate::feedback::{FeedbackEntry, FeedbackFile, FeedbackStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Appended and written to disk.
    Saved { code: CourseCode, total: usize },
    /// Code not in the catalog while `require_catalog_course` is set.
    Rejected(CourseCode),
}

/// Append `entry` under `code` and rewrite the backing file.
///
/// On a save error the entry stays in `store` but is not persisted.
pub fn submit_feedback(
    catalog: &CourseCatalog,
    store: &mut FeedbackStore,
    file: &FeedbackFile,
    policy: &FeedbackConfig,
    code: CourseCode,
    entry: FeedbackEntry,
) -> CourseBuddyResult<Submission> {
    if policy.require_catalog_course && !catalog.contains(&code) {
        tracing::info!(code = %code, "feedback rejected for unknown course");
        return Ok(Submission::Rejected(code));
    }
    if !catalog.contains(&code) {
        tracing::debug!(code = %code, "recording feedback for a course outside the catalog");
    }

    store.append(code.clone(), entry);
    file.save(store)?;

    let total = store.entries_for(&code).len();
    Ok(Submission::Saved { code, total })
}
