use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::CourseCode;
use crate::feedback::types::FeedbackEntry;

/// Feedback history per course, in submission order.
///
/// Keys exist only for courses that received at least one entry. Codes are
/// not checked against the catalog here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackStore {
    courses: BTreeMap<CourseCode, Vec<FeedbackEntry>>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for `code`, oldest first. Empty when nothing was recorded.
    pub fn entries_for(&self, code: &CourseCode) -> &[FeedbackEntry] {
        self.courses.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn append(&mut self, code: CourseCode, entry: FeedbackEntry) {
        let entries = self.courses.entry(code).or_default();
        entries.push(entry);
        tracing::debug!(count = entries.len(), "feedback entry appended");
    }

    /// Codes with at least one entry.
    pub fn courses(&self) -> impl Iterator<Item = &CourseCode> {
        self.courses.keys()
    }

    /// Total number of entries across all courses.
    pub fn len(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keys that normalize to the same code are merged in file order; empty
/// lists are dropped.
impl<'de> Deserialize<'de> for FeedbackStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = FeedbackStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of course codes to feedback entry lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut courses: BTreeMap<CourseCode, Vec<FeedbackEntry>> = BTreeMap::new();
        while let Some((raw, entries)) = map.next_entry::<String, Vec<FeedbackEntry>>()? {
            if entries.is_empty() {
                continue;
            }
            let code = CourseCode::new(&raw);
            let existing = courses.entry(code).or_default();
            if !existing.is_empty() {
                tracing::warn!(key = %raw, "merging feedback stored under a duplicate course key");
            }
            existing.extend(entries);
        }
        Ok(FeedbackStore { courses })
    }
}
