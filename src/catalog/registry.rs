use std::collections::BTreeMap;

use crate::catalog::course::{Course, CourseCode};
use crate::config::CatalogConfig;
use crate::errors::{CourseBuddyError, CourseBuddyResult};

/// Read-only table of known courses, keyed by normalized code.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: BTreeMap<CourseCode, Course>,
}

impl CourseCatalog {
    /// The default eight-course table.
    pub fn builtin() -> Self {
        let courses = [
            Course::new("CPS210", "Computer Science I").with_credits(4),
            Course::new("CPS310", "Computer Science II")
                .with_credits(4)
                .with_prereqs(&["CPS210"]),
            Course::new("CPS315", "Computer Organization")
                .with_credits(4)
                .with_prereqs(&["CPS310"]),
            Course::new("CPS330", "Assembly Programming")
                .with_credits(4)
                .with_prereqs(&["CPS310"]),
            Course::new("CPS352", "Data Structures")
                .with_credits(3)
                .with_prereqs(&["CPS310"]),
            Course::new("CPS353", "Operating Systems")
                .with_credits(3)
                .with_prereqs(&["CPS310"]),
            Course::new("CPS430", "Database Systems"),
            Course::new("CPS493", "Computer Science Seminar").with_credits(3),
        ];
        Self {
            courses: courses.into_iter().map(|c| (c.code.clone(), c)).collect(),
        }
    }

    /// Build from config; an empty course list keeps the built-in table.
    pub fn from_config(config: &CatalogConfig) -> CourseBuddyResult<Self> {
        if config.courses.is_empty() {
            return Ok(Self::builtin());
        }

        let mut courses = BTreeMap::new();
        for entry in &config.courses {
            let code = CourseCode::new(&entry.code);
            if code.is_empty() {
                return Err(CourseBuddyError::Catalog(format!(
                    "Course '{}' has an empty code",
                    entry.title
                )));
            }
            let course = Course {
                code: code.clone(),
                title: entry.title.clone(),
                credits: entry.credits,
                prereqs: entry.prereqs.iter().map(|p| CourseCode::new(p)).collect(),
            };
            if courses.insert(code.clone(), course).is_some() {
                return Err(CourseBuddyError::Catalog(format!(
                    "Course code '{code}' is listed more than once"
                )));
            }
        }
        tracing::debug!(count = courses.len(), "catalog loaded from config");
        Ok(Self { courses })
    }

    pub fn lookup(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.contains_key(code)
    }

    /// Courses in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
