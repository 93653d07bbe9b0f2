use std::io::{self, Write};

use crate::advisor::{Advice, Recommendation, Submission};
use crate::catalog::{Course, CourseCatalog, CourseCode};

pub const UNKNOWN_COURSE: &str =
    "This course is not recognized. Make sure you entered it correctly.";
pub const NO_FEEDBACK: &str =
    "No prior student feedback available yet. Proceed with standard preparation.";
pub const SAVED: &str = "✅ Your feedback has been saved. Thank you!";

fn join_codes(codes: &[CourseCode]) -> String {
    codes
        .iter()
        .map(CourseCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_course_header(out: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(out, "\nCourse Selected: {} - {}", course.code, course.title)?;
    if let Some(credits) = course.credits {
        writeln!(out, "Credits: {credits}")?;
    }
    if course.prereqs.is_empty() {
        writeln!(out, "Prerequisites: None")?;
    } else {
        writeln!(out, "Prerequisites: {}", join_codes(&course.prereqs))?;
    }
    Ok(())
}

pub fn write_advice(out: &mut impl Write, advice: &Advice<'_>) -> io::Result<()> {
    match advice {
        Advice::UnknownCourse(_) => writeln!(out, "{UNKNOWN_COURSE}"),
        Advice::NoFeedback(course) => {
            write_course_header(out, course)?;
            writeln!(out, "{NO_FEEDBACK}")
        }
        Advice::Feedback { course, entries } => {
            write_course_header(out, course)?;
            writeln!(out, "\n--- Student Feedback Summary ---")?;
            for entry in entries.iter() {
                writeln!(out, "• Reported Assignment/Exam Issues: {}", entry.problems)?;
                writeln!(out, "• Recommended Prerequisite(s): {}\n", entry.recommended_prereq)?;
            }
            Ok(())
        }
    }
}

pub fn write_submission(out: &mut impl Write, submission: &Submission) -> io::Result<()> {
    match submission {
        Submission::Saved { .. } => writeln!(out, "\n{SAVED}\n"),
        Submission::Rejected(_) => writeln!(out, "{UNKNOWN_COURSE}"),
    }
}

pub fn write_courses(out: &mut impl Write, catalog: &CourseCatalog) -> io::Result<()> {
    for course in catalog.iter() {
        let credits = course
            .credits
            .map(|c| format!("{c} cr"))
            .unwrap_or_else(|| "? cr".to_string());
        write!(out, "{:<8} {:<32} {:>5}", course.code, course.title, credits)?;
        if course.prereqs.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "  (requires {})", join_codes(&course.prereqs))?;
        }
    }
    Ok(())
}

pub fn write_plan(out: &mut impl Write, recommendations: &[Recommendation<'_>]) -> io::Result<()> {
    if recommendations.is_empty() {
        return writeln!(out, "Every catalog course has already been taken.");
    }
    for rec in recommendations {
        writeln!(out, "{} - {}", rec.course.code, rec.course.title)?;
        if rec.is_ready() {
            writeln!(out, "  Prerequisites satisfied. Natural next course in your program.")?;
        } else {
            writeln!(out, "  Missing prerequisites: {}.", join_codes(&rec.missing))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackEntry;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_feedback_lists_every_entry() {
        let course = Course::new("CPS352", "Data Structures").with_prereqs(&["CPS310"]);
        let entries = vec![
            FeedbackEntry::new("too many projects", "CPS210"),
            FeedbackEntry::new("fast pace", "CPS310"),
        ];
        let text = render(|out| {
            write_advice(out, &Advice::Feedback { course: &course, entries: &entries })
        });
        assert!(text.contains("Course Selected: CPS352 - Data Structures"));
        assert!(text.contains("Prerequisites: CPS310"));
        let first = text.find("too many projects").unwrap();
        let second = text.find("fast pace").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_course_without_prereqs_says_none() {
        let course = Course::new("CPS210", "Computer Science I").with_credits(4);
        let text = render(|out| write_advice(out, &Advice::NoFeedback(&course)));
        assert!(text.contains("Credits: 4\nPrerequisites: None\n"));
        assert!(text.contains(NO_FEEDBACK));
    }

    #[test]
    fn test_unknown_course_prints_rejection_only() {
        let text = render(|out| {
            write_advice(out, &Advice::UnknownCourse(CourseCode::new("CPS999")))
        });
        assert_eq!(text.trim(), UNKNOWN_COURSE);
    }

    #[test]
    fn test_courses_listing_has_one_line_per_course() {
        let catalog = CourseCatalog::builtin();
        let text = render(|out| write_courses(out, &catalog));
        assert_eq!(text.lines().count(), catalog.len());
        assert!(text.contains("(requires CPS210)"));
    }
}
