//! Test result reporting.
//!
//! Collects named pass/fail outcomes into a [`Report`] with pass and fail
//! counts and writes it either as plain lines or as JSON.
//!
//! # Example
//!
//! ```
//! use occi_text::report::{OutputFormat, Report, TestOutcome};
//!
//! let report = Report::from_outcomes(vec![
//!     TestOutcome::new("categories", true, None),
//!     TestOutcome::new("locations", false, Some("bad URL".into())),
//! ]);
//! assert_eq!((report.passed, report.failed), (1, 1));
//!
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! report.write(OutputFormat::Plain, &mut out, &mut err).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "categories  OK\nlocations  FAIL\n");
//! assert_eq!(String::from_utf8(err).unwrap(), "bad URL\n");
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Printed when an output mode is not one of [`OutputFormat`].
pub const UNKNOWN_FORMAT_MESSAGE: &str = r#"Only "plain", "json" output types are possible"#;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `<name>  <OK|FAIL>` line per test, reasons on stderr (default).
    #[default]
    Plain,
    /// The whole report as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UNKNOWN_FORMAT_MESSAGE.to_string()),
        }
    }
}

/// The result of one named check.
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    pub name: String,
    pub status: bool,
    pub reason: Option<String>,
    /// Seconds the check took.
    pub running_time: Option<f64>,
}

impl TestOutcome {
    /// Creates an outcome; an empty reason is treated as no reason.
    pub fn new(name: impl Into<String>, status: bool, reason: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            reason: reason.filter(|r| !r.is_empty()),
            running_time: None,
        }
    }

    pub fn with_running_time(mut self, seconds: f64) -> Self {
        self.running_time = Some(seconds);
        self
    }
}

/// Rendered status of a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAIL")]
    Fail,
}

impl From<bool> for Status {
    fn from(passed: bool) -> Self {
        if passed {
            Status::Ok
        } else {
            Status::Fail
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => f.write_str("OK"),
            Status::Fail => f.write_str("FAIL"),
        }
    }
}

/// One test as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Seconds, rounded to three decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_time: Option<f64>,
}

impl From<TestOutcome> for TestRecord {
    fn from(outcome: TestOutcome) -> Self {
        Self {
            name: outcome.name,
            status: outcome.status.into(),
            reason: outcome.reason,
            running_time: outcome.running_time.map(round_millis),
        }
    }
}

/// Aggregated test results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub tests: Vec<TestRecord>,
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    /// Builds a report, counting passes and failures.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = TestOutcome>) -> Self {
        let tests: Vec<TestRecord> = outcomes.into_iter().map(TestRecord::from).collect();
        let passed = tests.iter().filter(|t| t.status == Status::Ok).count();
        let failed = tests.len() - passed;
        Self {
            tests,
            passed,
            failed,
        }
    }

    /// Returns true if no test failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Serializes the report with sorted keys and four-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        // Value maps are ordered by key
        let value = serde_json::to_value(self)?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the report in the given format.
    ///
    /// Plain output goes to `out`, with failure reasons on `err`. JSON output
    /// goes entirely to `out`.
    pub fn write(
        &self,
        format: OutputFormat,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        match format {
            OutputFormat::Plain => {
                for test in &self.tests {
                    writeln!(out, "{}  {}", test.name, test.status)?;
                    if let Some(reason) = &test.reason {
                        writeln!(err, "{}", reason)?;
                    }
                }
            }
            OutputFormat::Json => {
                let json = self.to_json().map_err(io::Error::other)?;
                writeln!(out, "{}", json)?;
            }
        }
        Ok(())
    }

    /// Writes the report in the format named by `mode`.
    ///
    /// An unknown mode writes [`UNKNOWN_FORMAT_MESSAGE`] to `out` instead.
    pub fn write_mode(
        &self,
        mode: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        match mode.parse::<OutputFormat>() {
            Ok(format) => self.write(format, out, err),
            Err(message) => writeln!(out, "{}", message),
        }
    }
}

fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
