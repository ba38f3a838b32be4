//! Check command handler.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use color_eyre::Result;

use crate::config;
use crate::error::AppError;
use crate::render::{Renderer, TextRenderer};
use crate::report::{Report, TestOutcome};

use super::{read_lines, App};

impl App {
    /// Check each file and print the report.
    ///
    /// `format` overrides the configured output format; an unknown name
    /// prints the list of supported formats instead of a report.
    pub fn run_check(&self, files: &[PathBuf], format: Option<&str>) -> Result<()> {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        let report = check_files(files, format, &mut out, &mut err)?;

        if report.is_success() {
            Ok(())
        } else {
            Err(color_eyre::eyre::eyre!(
                "{} of {} checks failed",
                report.failed,
                report.tests.len()
            ))
        }
    }
}

/// Checks every file and writes the report to `out` and `err`.
pub fn check_files(
    files: &[PathBuf],
    format: Option<&str>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Report> {
    let settings = config::settings();
    let outcomes: Vec<TestOutcome> = files
        .iter()
        .map(|file| check_file(file, &settings.main.prefix))
        .collect();
    let report = Report::from_outcomes(outcomes);

    match format {
        Some(mode) => report.write_mode(mode, out, err)?,
        None => report.write(settings.main.output_format, out, err)?,
    }
    Ok(report)
}

/// Parses one category file as a named, timed test.
///
/// The test is named after the path; on failure the reason lists every
/// diagnostic, one per line.
pub fn check_file(path: &Path, prefix: &str) -> TestOutcome {
    let started = Instant::now();
    let result = read_lines(path).and_then(|lines| {
        TextRenderer
            .parse_categories(&lines, prefix)
            .map_err(AppError::from)
    });
    let elapsed = started.elapsed().as_secs_f64();

    let name = path.display().to_string();
    let outcome = match result {
        Ok(categories) => {
            tracing::debug!(file = %name, count = categories.len(), "check passed");
            TestOutcome::new(name, true, None)
        }
        Err(AppError::Parse(diagnostics)) => {
            TestOutcome::new(name, false, Some(diagnostics.to_string()))
        }
        Err(e) => TestOutcome::new(name, false, Some(e.to_string())),
    };
    outcome.with_running_time(elapsed)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::report::UNKNOWN_FORMAT_MESSAGE;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_valid_file() {
        let file = write_temp(
            "Category: entity; scheme=\"http://schemas.ogf.org/occi/core#\"; class=\"kind\"; location=\"/entity/\"\n",
        );
        let outcome = check_file(file.path(), "");
        assert!(outcome.status);
        assert_eq!(outcome.reason, None);
        assert!(outcome.running_time.is_some());
    }

    #[test]
    fn test_check_duplicate_fails() {
        let file = write_temp(
            "Category: entity; scheme=\"http://x#\"; class=\"kind\"\n\
             Category: entity; scheme=\"http://x#\"; class=\"kind\"\n",
        );
        let outcome = check_file(file.path(), "dup: ");
        assert!(!outcome.status);
        assert_eq!(
            outcome.reason.as_deref(),
            Some("dup: category not unique (term \"entity\", scheme \"http://x#\")")
        );
    }

    #[test]
    fn test_check_missing_file_fails() {
        let outcome = check_file(Path::new("/nonexistent/categories.txt"), "");
        assert!(!outcome.status);
        assert!(outcome.reason.unwrap().starts_with("Failed to read"));
    }

    const ENTITY: &str = "Category: entity; scheme=\"http://schemas.ogf.org/occi/core#\"; class=\"kind\"\n";

    fn check_app(file: &Path) -> App {
        App::try_parse_from(["occi-text", "check", file.to_str().unwrap()]).unwrap()
    }

    #[test]
    fn test_check_files_unknown_format() {
        let file = write_temp(ENTITY);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let report = check_files(&[file.path().to_path_buf()], Some("xml"), &mut out, &mut err)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", UNKNOWN_FORMAT_MESSAGE)
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_check_files_plain_report() {
        let good = write_temp(ENTITY);
        let bad = write_temp("Category: x; scheme=\"s\"\n");
        let files = [good.path().to_path_buf(), bad.path().to_path_buf()];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let report = check_files(&files, Some("plain"), &mut out, &mut err).unwrap();

        assert_eq!((report.passed, report.failed), (1, 1));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(&format!("{}  OK\n", good.path().display())));
        assert!(out.contains(&format!("{}  FAIL\n", bad.path().display())));
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("category not valid, missing class"));
    }

    #[test]
    fn test_run_check_fails_on_bad_file() {
        let file = write_temp("not a category\n");
        let app = check_app(file.path());
        let err = app.run_check(&[file.path().to_path_buf()], Some("json")).unwrap_err();
        assert_eq!(err.to_string(), "1 of 1 checks failed");
    }

    #[test]
    fn test_run_check_passes() {
        let file = write_temp(ENTITY);
        let app = check_app(file.path());
        assert!(app.run_check(&[file.path().to_path_buf()], Some("plain")).is_ok());
    }
}
