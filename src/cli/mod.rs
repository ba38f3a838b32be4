//! CLI module for occi-text.
//!
//! Subcommands:
//! - `render`: Parse a category file and print it back in canonical form
//! - `check`: Check category files and report each one as a test
//! - `url`: Check the shape of a URL

mod check;
mod render;
mod url;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::error::AppError;

pub use check::{check_file, check_files};
pub use url::UrlCommand;

/// occi-text - OCCI Category text codec
#[derive(Parser)]
#[command(name = "occi-text")]
#[command(about = "Render and parse OCCI Category headers")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a file of category lines and print them in canonical form
    Render {
        /// File with one `Category:` line per line
        file: PathBuf,

        /// Print the parsed categories as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Check category files and report each as a pass/fail test
    Check {
        /// Files with one `Category:` line per line
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format: plain or json (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check that a URL has the required components
    Url(UrlCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<ExitCode> {
        match self.command {
            Command::Render { ref file, json } => self.run_render(file, json)?,
            Command::Check {
                ref files,
                ref format,
            } => self.run_check(files, format.as_deref())?,
            Command::Url(ref cmd) => return Ok(cmd.run()),
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Reads the category lines of a file.
///
/// Line terminators (`\n` or `\r\n`) are dropped and blank lines skipped.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_lines_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Category: a; scheme=\"s\"; class=\"kind\"\r\n\r\n  \nCategory: b; scheme=\"s\"; class=\"kind\"\n"
        )
        .unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Category: a; scheme=\"s\"; class=\"kind\"",
                "Category: b; scheme=\"s\"; class=\"kind\"",
            ]
        );
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines(Path::new("/nonexistent/categories.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_parse_check_args() {
        let app = App::try_parse_from(["occi-text", "check", "a.txt", "b.txt", "--format", "json"])
            .unwrap();
        match app.command {
            Command::Check { files, format } => {
                assert_eq!(files.len(), 2);
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_requires_files() {
        assert!(App::try_parse_from(["occi-text", "check"]).is_err());
    }
}
