//! Render command handler.

use std::path::Path;

use color_eyre::Result;

use crate::config;
use crate::render::{Renderer, TextRenderer};

use super::{read_lines, App};

impl App {
    /// Parse a category file and print it back, or as JSON.
    pub fn run_render(&self, file: &Path, json: bool) -> Result<()> {
        let prefix = &config::settings().main.prefix;
        let lines = read_lines(file)?;
        let renderer = TextRenderer;

        let categories = match renderer.parse_categories(&lines, prefix) {
            Ok(categories) => categories,
            Err(diagnostics) => {
                for diagnostic in diagnostics.iter() {
                    eprintln!("{}", diagnostic);
                }
                return Err(color_eyre::eyre::eyre!(
                    "Failed to parse {} ({} problems)",
                    file.display(),
                    diagnostics.len()
                ));
            }
        };
        tracing::info!(
            "Parsed {} categories from {}",
            categories.len(),
            file.display()
        );

        if json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            print!("{}", renderer.render_categories(&categories));
        }
        Ok(())
    }
}
