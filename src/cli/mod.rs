pub mod render;
pub mod session;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::advisor::{advise, parse_taken, plan, submit_feedback, Advice};
use crate::catalog::{CourseCatalog, CourseCode};
use crate::config::{render_config, AppConfig, ParseErrorPolicy};
use crate::errors::{CourseBuddyError, CourseBuddyResult};
use crate::feedback::{FeedbackEntry, FeedbackFile, FeedbackStore, LoadOutcome};

use self::session::Session;

#[derive(Parser, Debug)]
#[clap(
    name = "coursebuddy",
    author,
    version,
    about = "Course advisor & feedback system"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(
        long,
        short,
        global = true,
        help = "Configuration file (defaults to ./coursebuddy.toml, then the user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[clap(long, global = true, help = "Feedback file, overriding the configured one")]
    pub feedback_file: Option<PathBuf>,

    #[clap(long, short, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show prior feedback for a course
    Advice { code: String },
    /// Record feedback for a course
    Feedback {
        code: String,
        #[clap(long, help = "Problems with exams and assignments")]
        problems: String,
        #[clap(long, help = "Course(s) to take before this one")]
        prereq: String,
    },
    /// List the course catalog
    Courses,
    /// Suggest next courses from the ones already taken
    Plan {
        #[clap(long, default_value = "", help = "Comma-separated course codes, e.g. CPS210,CPS310")]
        taken: String,
    },
    /// Print the effective configuration
    Config,
}

/// Load the store and apply the configured parse-error policy.
///
/// Diagnostics for a recovered store go to `diag`.
pub fn open_store(
    config: &AppConfig,
    diag: &mut impl Write,
) -> CourseBuddyResult<(FeedbackFile, FeedbackStore)> {
    let file = FeedbackFile::new(&config.storage.feedback_file);
    let store = match file.load()? {
        LoadOutcome::Loaded(store) => store,
        LoadOutcome::ParseError { path, details } => match config.storage.on_parse_error {
            ParseErrorPolicy::Recover => {
                writeln!(
                    diag,
                    "Warning: could not read {} ({details}); starting with no prior feedback.",
                    path.display()
                )?;
                FeedbackStore::new()
            }
            ParseErrorPolicy::Abort => {
                return Err(CourseBuddyError::MalformedFeedback {
                    path: path.display().to_string(),
                    details,
                });
            }
        },
    };
    Ok((file, store))
}

/// Dispatch one invocation. `None` runs the interactive session.
pub fn execute<R: BufRead, W: Write, D: Write>(
    command: Option<Commands>,
    config: &AppConfig,
    input: R,
    mut out: W,
    diag: &mut D,
) -> CourseBuddyResult<()> {
    let catalog = CourseCatalog::from_config(&config.catalog)?;

    match command {
        None => {
            let (file, mut store) = open_store(config, diag)?;
            let mut session = Session::new(&catalog, &mut store, &file, &config.feedback, input, out);
            session.run()
        }
        Some(Commands::Advice { code }) => {
            let code = CourseCode::new(&code);
            // Unknown codes never touch the feedback file.
            if !catalog.contains(&code) {
                render::write_advice(&mut out, &Advice::UnknownCourse(code))?;
                return Ok(());
            }
            let (_, store) = open_store(config, diag)?;
            let advice = advise(&catalog, &store, &code);
            render::write_advice(&mut out, &advice)?;
            Ok(())
        }
        Some(Commands::Feedback { code, problems, prereq }) => {
            let (file, mut store) = open_store(config, diag)?;
            let submission = submit_feedback(
                &catalog,
                &mut store,
                &file,
                &config.feedback,
                CourseCode::new(&code),
                FeedbackEntry::new(problems, prereq),
            )?;
            render::write_submission(&mut out, &submission)?;
            Ok(())
        }
        Some(Commands::Courses) => {
            render::write_courses(&mut out, &catalog)?;
            Ok(())
        }
        Some(Commands::Plan { taken }) => {
            let taken = parse_taken(&taken);
            render::write_plan(&mut out, &plan(&catalog, &taken))?;
            Ok(())
        }
        Some(Commands::Config) => {
            write!(out, "{}", render_config(config)?)?;
            Ok(())
        }
    }
}
