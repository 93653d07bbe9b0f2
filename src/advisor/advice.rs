use crate::catalog::{Course, CourseCatalog, CourseCode};
use crate::feedback::{FeedbackEntry, FeedbackStore};

/// Answer to an advice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice<'a> {
    UnknownCourse(CourseCode),
    NoFeedback(&'a Course),
    Feedback {
        course: &'a Course,
        entries: &'a [FeedbackEntry],
    },
}

/// Look up prior feedback for a catalog course.
///
/// Codes outside the catalog are rejected before the store is consulted.
pub fn advise<'a>(
    catalog: &'a CourseCatalog,
    store: &'a FeedbackStore,
    code: &CourseCode,
) -> Advice<'a> {
    let Some(course) = catalog.lookup(code) else {
        tracing::info!(code = %code, "advice requested for unknown course");
        return Advice::UnknownCourse(code.clone());
    };

    let entries = store.entries_for(code);
    tracing::debug!(code = %code, entries = entries.len(), "advice resolved");
    if entries.is_empty() {
        Advice::NoFeedback(course)
    } else {
        Advice::Feedback { course, entries }
    }
}
