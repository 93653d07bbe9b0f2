use std::io::{BufRead, Write};

use crate::advisor::{advise, submit_feedback};
use crate::catalog::{CourseCatalog, CourseCode};
use crate::cli::render;
use crate::config::FeedbackConfig;
use crate::errors::CourseBuddyResult;
use crate::feedback::{FeedbackEntry, FeedbackFile, FeedbackStore};

pub const BANNER: &str = "Welcome to the Computer Science Course Advisor & Feedback System";
pub const CHOICE_PROMPT: &str = "Do you want advice (A) or give feedback (F)? ";
pub const ADVICE_PROMPT: &str = "Enter the course number you want advice on (e.g., CPS352): ";
pub const FEEDBACK_PROMPT: &str =
    "Enter the course number you are giving feedback for (e.g., CPS352): ";
pub const PROBLEMS_PROMPT: &str = "What were the problems with exams and assignments? ";
pub const PREREQ_PROMPT: &str = "Recommended course(s) you should take before this one: ";
pub const INVALID_OPTION: &str = "Invalid option. Please restart the program.";

/// One interactive run: a single menu choice, then exit.
pub struct Session<'a, R, W> {
    catalog: &'a CourseCatalog,
    store: &'a mut FeedbackStore,
    file: &'a FeedbackFile,
    policy: &'a FeedbackConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        catalog: &'a CourseCatalog,
        store: &'a mut FeedbackStore,
        file: &'a FeedbackFile,
        policy: &'a FeedbackConfig,
        input: R,
        output: W,
    ) -> Self {
        Self { catalog, store, file, policy, input, output }
    }

    pub fn run(&mut self) -> CourseBuddyResult<()> {
        writeln!(self.output, "{BANNER}\n")?;
        let choice = self.prompt(CHOICE_PROMPT)?.trim().to_uppercase();
        tracing::debug!(choice = %choice, "menu choice read");

        match choice.as_str() {
            "A" => self.give_advice(),
            "F" => self.collect_feedback(),
            _ => {
                writeln!(self.output, "{INVALID_OPTION}")?;
                Ok(())
            }
        }
    }

    fn give_advice(&mut self) -> CourseBuddyResult<()> {
        let code = CourseCode::new(&self.prompt(ADVICE_PROMPT)?);
        let advice = advise(self.catalog, self.store, &code);
        render::write_advice(&mut self.output, &advice)?;
        Ok(())
    }

    fn collect_feedback(&mut self) -> CourseBuddyResult<()> {
        let code = CourseCode::new(&self.prompt(FEEDBACK_PROMPT)?);
        let problems = self.prompt(PROBLEMS_PROMPT)?;
        let recommended_prereq = self.prompt(PREREQ_PROMPT)?;

        let result = submit_feedback(
            self.catalog,
            self.store,
            self.file,
            self.policy,
            code,
            FeedbackEntry::new(problems, recommended_prereq),
        );
        match result {
            Ok(submission) => render::write_submission(&mut self.output, &submission)?,
            Err(e) => {
                // Not fatal: the run still ends normally.
                tracing::error!(path = %self.file.path().display(), error = %e, "failed to save feedback");
                writeln!(self.output, "\nCould not save your feedback: {e}")?;
            }
        }
        Ok(())
    }

    /// Print `text`, then read one line without its terminator. EOF reads as empty.
    fn prompt(&mut self, text: &str) -> CourseBuddyResult<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
