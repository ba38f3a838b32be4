//! Category collections, one category per line.

use std::collections::HashSet;

use crate::models::Category;
use crate::render::diagnostics::{DiagnosticKind, Diagnostics};

use super::category::{parse_category, render_category};

/// Renders categories as consecutive terminated lines.
pub fn render_categories(categories: &[Category]) -> String {
    categories.iter().map(render_category).collect()
}

/// Parses a collection of category lines.
///
/// Parsing stops at the first line that fails or the first repeated
/// `(term, scheme)` pair, and nothing parsed so far is returned.
pub fn parse_categories<I, S>(lines: I, prefix: &str) -> Result<Vec<Category>, Diagnostics>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories = Vec::new();
    let mut seen = HashSet::new();

    for line in lines {
        let line = line.as_ref();
        let category = match parse_category(line, prefix) {
            Ok(category) => category,
            Err(mut diagnostics) => {
                diagnostics.push(prefix, DiagnosticKind::LineFailed(line.to_string()));
                return Err(diagnostics);
            }
        };

        if !seen.insert((category.term.clone(), category.scheme.clone())) {
            return Err(Diagnostics::single(
                prefix,
                DiagnosticKind::NotUnique {
                    term: category.term,
                    scheme: category.scheme,
                },
            ));
        }
        categories.push(category);
    }

    tracing::debug!(count = categories.len(), "parsed category collection");
    Ok(categories)
}
