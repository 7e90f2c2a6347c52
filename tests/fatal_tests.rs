//! Process-level behavior: fatal exits and default-logger output
//!
//! Each test re-runs this test binary filtered to itself with a marker
//! environment variable set. The child takes the fatal path or logs through
//! the default logger; the parent checks the exit status and the written lines.

use leveled_log::prelude::*;
use leveled_log::core::location_field;
use leveled_log::{fatalf, infof, FATAL_EXIT_CODE};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const CHILD_ENV: &str = "LEVELED_LOG_FATAL_CHILD";
const PATH_ENV: &str = "LEVELED_LOG_FATAL_PATH";

fn is_child(test_name: &str) -> bool {
    std::env::var(CHILD_ENV).as_deref() == Ok(test_name)
}

fn run_child(test_name: &str, envs: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("Failed to locate test binary");
    let mut command = Command::new(exe);
    command
        .args([test_name, "--exact", "--nocapture", "--quiet", "--test-threads=1"])
        .env(CHILD_ENV, test_name);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to spawn child")
}

#[test]
fn test_fatalf_writes_then_exits() {
    const NAME: &str = "test_fatalf_writes_then_exits";
    if is_child(NAME) {
        let path = std::env::var(PATH_ENV).expect("log path for child");
        let logger = Logger::builder()
            .timestamps(false)
            .build(FileSink::new(path).expect("Failed to create sink"));
        logger.fatalf(format_args!("cannot bind port {}", 80));
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let output = run_child(NAME, &[(PATH_ENV, log_file.to_str().unwrap())]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with("F "), "got {:?}", content);
    assert!(content.contains("tests.rs:"), "got {:?}", content);
    assert!(content.ends_with(" cannot bind port 80\n"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_fatal_exits_even_when_threshold_is_lowest() {
    const NAME: &str = "test_fatal_exits_even_when_threshold_is_lowest";
    if is_child(NAME) {
        let path = std::env::var(PATH_ENV).expect("log path for child");
        let logger = Logger::builder()
            .level(Level::FATAL)
            .timestamps(false)
            .build(FileSink::new(path).expect("Failed to create sink"));
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        logger.fatal(err);
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let output = run_child(NAME, &[(PATH_ENV, log_file.to_str().unwrap())]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.starts_with("F "));
    assert!(content.ends_with(" Error: config.toml\n"));
}

#[test]
fn test_default_logger_fatal_goes_to_stderr() {
    const NAME: &str = "test_default_logger_fatal_goes_to_stderr";
    if is_child(NAME) {
        fatalf!("shutting down: {}", "disk full");
    }

    let output = run_child(NAME, &[]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.ends_with(" shutting down: disk full"))
        .unwrap_or_else(|| panic!("fatal line missing from stderr: {:?}", stderr));

    // Default logger stamps lines: `YYYY/MM/DD HH:MM:SS F <location> <body>`
    assert_eq!(&line[4..5], "/");
    assert_eq!(&line[20..22], "F ");
    assert!(line[22..].contains("tests.rs:"));
}

#[test]
fn test_fatal_skips_remaining_code() {
    const NAME: &str = "test_fatal_skips_remaining_code";
    if is_child(NAME) {
        leveled_log::fatal("unrecoverable");
    }

    let output = run_child(NAME, &[]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("test result: ok"), "child reached the harness: {:?}", stdout);
}

#[test]
fn test_free_functions_report_call_site() {
    const NAME: &str = "test_free_functions_report_call_site";
    if is_child(NAME) {
        let logger = default_logger();
        logger.set_level(Level::DEBUG);
        logger.set_timestamps(false);

        let base = line!();
        leveled_log::debugf(format_args!("debug site"));
        leveled_log::infof(format_args!("info site"));
        let _ = leveled_log::errorf(format_args!("errorf site"));
        let _ = leveled_log::error("error site");
        infof!("macro site");
        println!("base={}", base);
        return;
    }

    let output = run_child(NAME, &[]);
    assert!(output.status.success(), "child failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let base: u32 = stdout
        .lines()
        .find_map(|line| line.strip_prefix("base="))
        .and_then(|n| n.trim().parse().ok())
        .unwrap_or_else(|| panic!("base line missing from stdout: {:?}", stdout));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = [
        (".", base + 1, "debug site"),
        ("_", base + 2, "info site"),
        ("E", base + 3, "errorf site"),
        ("E", base + 4, "Error: error site"),
        ("_", base + 5, "macro site"),
    ];
    for (marker, line, body) in expected {
        let location = CallerLocation::new(file!(), line);
        let want = format!("{} {} {}", marker, location_field(Some(&location)), body);
        assert!(
            stderr.lines().any(|got| got == want),
            "expected {:?} in stderr: {:?}",
            want,
            stderr
        );
    }
}
