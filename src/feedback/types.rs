use serde::{Deserialize, Serialize};

/// One student's report on a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Problems with exams and assignments.
    pub problems: String,
    /// Course(s) the student recommends taking first.
    pub recommended_prereq: String,
}

impl FeedbackEntry {
    pub fn new(problems: impl Into<String>, recommended_prereq: impl Into<String>) -> Self {
        Self {
            problems: problems.into(),
            recommended_prereq: recommended_prereq.into(),
        }
    }
}
