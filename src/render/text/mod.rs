//! Plain-text rendering of OCCI categories.
//!
//! The grammar is line oriented, one category per line:
//!
//! ```text
//! Category: <term>; scheme="<uri>"; class="<kind|mixin|action|...>"
//!   [; title="<text>"] [; rel="<uri>"] [; location="<path-url>"]
//!   [; attributes="<attr-def> ..."] [; actions="..."]
//! ```

mod actions;
mod attributes;
mod category;
mod collection;
mod scanner;

pub use actions::{parse_actions, render_actions};
pub use attributes::{parse_attribute_defs, render_attribute_def, render_attribute_defs};
pub use category::{parse_category, render_category, EOL};
pub use collection::{parse_categories, render_categories};

use crate::models::{Action, AttributeDefinition, Category};

use super::{Diagnostics, Renderer};

/// Renderer for the plain-text grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_category(&self, category: &Category) -> String {
        render_category(category)
    }

    fn parse_attribute_defs(
        &self,
        body: &str,
        prefix: &str,
    ) -> Result<Vec<AttributeDefinition>, Diagnostics> {
        parse_attribute_defs(body, prefix)
    }

    fn parse_actions(&self, body: &str, prefix: &str) -> Result<Vec<Action>, Diagnostics> {
        parse_actions(body, prefix)
    }

    fn parse_category(&self, body: &str, prefix: &str) -> Result<Category, Diagnostics> {
        parse_category(body, prefix)
    }

    fn parse_categories<I, S>(&self, lines: I, prefix: &str) -> Result<Vec<Category>, Diagnostics>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_categories(lines, prefix)
    }
}
