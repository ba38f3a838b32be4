//! Rendering and parsing of OCCI descriptors.
//!
//! # Architecture
//!
//! - [`Renderer`] - the seam every rendering implements
//! - [`text::TextRenderer`] - the line-oriented `Category:` grammar
//! - [`Diagnostics`] - what a failed parse returns instead of a value
//! - [`check_url`] - the URL shape check used for category locations
//!
//! # Usage
//!
//! ```
//! use occi_text::render::{Renderer, TextRenderer};
//!
//! let renderer = TextRenderer;
//! let category = renderer
//!     .parse_category(r#"Category: entity; scheme="http://schemas.ogf.org/occi/core#"; class="kind""#, "")
//!     .unwrap();
//! assert_eq!(category.term, "entity");
//! assert!(renderer.render_category(&category).starts_with("Category: entity;"));
//! ```

mod diagnostics;
mod url;

pub mod text;

pub use diagnostics::{Diagnostic, DiagnosticClass, DiagnosticKind, Diagnostics};
pub use text::TextRenderer;
pub use url::{check_url, UrlParts, UrlRequire};

use crate::models::{Action, AttributeDefinition, Category};

/// Renders descriptors to a wire representation and parses them back.
///
/// Parse methods take a `prefix` that is prepended to every diagnostic they
/// produce, so callers can tell which document or line a message belongs to.
pub trait Renderer {
    /// Renders one category, including its line terminator.
    fn render_category(&self, category: &Category) -> String;

    /// Renders categories in order.
    fn render_categories(&self, categories: &[Category]) -> String {
        categories
            .iter()
            .map(|category| self.render_category(category))
            .collect()
    }

    /// Parses an attribute definition list.
    fn parse_attribute_defs(
        &self,
        body: &str,
        prefix: &str,
    ) -> Result<Vec<AttributeDefinition>, Diagnostics>;

    /// Parses an action list.
    fn parse_actions(&self, body: &str, prefix: &str) -> Result<Vec<Action>, Diagnostics>;

    /// Parses one category.
    fn parse_category(&self, body: &str, prefix: &str) -> Result<Category, Diagnostics>;

    /// Parses a collection of categories, one per line.
    ///
    /// `(term, scheme)` must be unique across the collection.
    fn parse_categories<I, S>(&self, lines: I, prefix: &str) -> Result<Vec<Category>, Diagnostics>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}
