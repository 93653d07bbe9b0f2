use std::fmt;

use serde::{Deserialize, Serialize};

/// A course code such as `CPS352`, trimmed and upper-cased on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CourseCode {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for CourseCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    pub title: String,
    /// Unknown for some catalog entries.
    pub credits: Option<u8>,
    pub prereqs: Vec<CourseCode>,
}

impl Course {
    pub fn new(code: &str, title: &str) -> Self {
        Self {
            code: CourseCode::new(code),
            title: title.to_string(),
            credits: None,
            prereqs: Vec::new(),
        }
    }

    pub fn with_credits(mut self, credits: u8) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn with_prereqs(mut self, prereqs: &[&str]) -> Self {
        self.prereqs = prereqs.iter().map(|p| CourseCode::new(p)).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_trimmed_and_uppercased() {
        assert_eq!(CourseCode::new("  cps352\n").as_str(), "CPS352");
        assert_eq!(CourseCode::from("Cps210"), CourseCode::new("CPS210"));
    }

    #[test]
    fn test_code_deserializes_normalized() {
        let code: CourseCode = serde_json::from_str("\"cps310 \"").unwrap();
        assert_eq!(code.as_str(), "CPS310");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CPS310\"");
    }
}
