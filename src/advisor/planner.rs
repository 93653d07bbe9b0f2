use std::collections::BTreeSet;

use crate::catalog::{Course, CourseCatalog, CourseCode};

/// One not-yet-taken course and whether it can be taken next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub course: &'a Course,
    /// Prerequisites absent from the taken set, in catalog order.
    pub missing: Vec<CourseCode>,
}

impl Recommendation<'_> {
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Walk the catalog in code order, skipping courses already taken.
pub fn plan<'a>(catalog: &'a CourseCatalog, taken: &[CourseCode]) -> Vec<Recommendation<'a>> {
    let taken: BTreeSet<&CourseCode> = taken.iter().collect();
    let recommendations: Vec<_> = catalog
        .iter()
        .filter(|course| !taken.contains(&course.code))
        .map(|course| Recommendation {
            course,
            missing: course
                .prereqs
                .iter()
                .filter(|p| !taken.contains(p))
                .cloned()
                .collect(),
        })
        .collect();
    tracing::debug!(
        taken = taken.len(),
        ready = recommendations.iter().filter(|r| r.is_ready()).count(),
        "schedule planned"
    );
    recommendations
}

/// Parse a comma-separated code list such as `cps210, CPS310`.
pub fn parse_taken(raw: &str) -> Vec<CourseCode> {
    raw.split(',')
        .map(CourseCode::new)
        .filter(|c| !c.is_empty())
        .collect()
}
