use coursebuddy_lib::catalog::CourseCode;
use coursebuddy_lib::cli::{execute, Commands};
use coursebuddy_lib::config::{AppConfig, CourseEntry};
use coursebuddy_lib::feedback::{FeedbackEntry, FeedbackFile, LoadOutcome};

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.feedback_file = dir.path().join("feedback.json");
    config
}

fn run(config: &AppConfig, command: Option<Commands>, input: &str) -> String {
    let mut out = Vec::<u8>::new();
    let mut diag = Vec::<u8>::new();
    execute(command, config, input.as_bytes(), &mut out, &mut diag).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_feedback_is_persisted_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    run(
        &config,
        Some(Commands::Feedback {
            code: "CPS352".into(),
            problems: "too many projects".into(),
            prereq: "CPS210".into(),
        }),
        "",
    );

    let file = FeedbackFile::new(&config.storage.feedback_file);
    let LoadOutcome::Loaded(store) = file.load().unwrap() else {
        panic!("feedback file should parse");
    };
    assert_eq!(
        store.entries_for(&CourseCode::new("CPS352")),
        &[FeedbackEntry::new("too many projects", "CPS210")]
    );

    let out = run(&config, Some(Commands::Advice { code: "cps352".into() }), "");
    assert!(out.contains("Reported Assignment/Exam Issues: too many projects"));
}

#[test]
fn test_advice_for_unknown_code_reads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let out = run(&config, Some(Commands::Advice { code: "CPS999".into() }), "");
    assert!(out.contains("not recognized"));
    assert!(!out.contains("Feedback Summary"));
    assert!(!config.storage.feedback_file.exists());
}

#[test]
fn test_interactive_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let out = run(&config, None, "F\ncps310\nlong labs\nCPS210\n");
    assert!(out.contains("Your feedback has been saved"));

    let out = run(&config, None, "a\nCPS310\n");
    assert!(out.contains("Course Selected: CPS310 - Computer Science II"));
    assert!(out.contains("Recommended Prerequisite(s): CPS210"));
}

#[test]
fn test_strict_config_rejects_unknown_feedback() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.feedback.require_catalog_course = true;

    let out = run(&config, None, "F\nCPS999\nx\ny\n");
    assert!(out.contains("not recognized"));
    assert!(!config.storage.feedback_file.exists());
}

#[test]
fn test_plan_uses_configured_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.catalog.courses = vec![
        CourseEntry {
            code: "CPS440".into(),
            title: "Database Principles".into(),
            credits: Some(3),
            prereqs: vec!["CPS310".into()],
        },
        CourseEntry {
            code: "CPS441".into(),
            title: "Database Projects".into(),
            credits: Some(4),
            prereqs: vec!["CPS440".into()],
        },
    ];

    let out = run(&config, Some(Commands::Plan { taken: "cps310".into() }), "");
    assert!(out.contains("CPS440 - Database Principles\n  Prerequisites satisfied"));
    assert!(out.contains("Missing prerequisites: CPS440."));
}

#[test]
fn test_config_command_prints_toml() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let out = run(&config, Some(Commands::Config), "");
    assert!(out.contains("[storage]"));
    assert!(out.contains("on_parse_error = \"recover\""));
}
