//! URL shape check command.

use std::process::ExitCode;

use clap::Parser;

use crate::render::{check_url, UrlRequire};

/// Check that a URL has the required components.
#[derive(Parser)]
pub struct UrlCommand {
    /// URL to check.
    pub value: String,

    /// Require a scheme.
    #[arg(long)]
    pub scheme: bool,

    /// Require a host.
    #[arg(long)]
    pub host: bool,

    /// Require a path.
    #[arg(long)]
    pub path: bool,
}

impl UrlCommand {
    /// Components the flags ask for.
    pub fn require(&self) -> UrlRequire {
        UrlRequire {
            scheme: self.scheme,
            host: self.host,
            path: self.path,
        }
    }

    /// Whether the value has the required shape.
    pub fn is_valid(&self) -> bool {
        check_url(&self.value, self.require())
    }

    /// Print `valid` or `invalid`; an invalid URL exits with failure.
    pub fn run(&self) -> ExitCode {
        if self.is_valid() {
            println!("valid");
            ExitCode::SUCCESS
        } else {
            tracing::debug!(value = %self.value, require = ?self.require(), "URL rejected");
            println!("invalid");
            ExitCode::FAILURE
        }
    }
}
