//! Action lists.
//!
//! The action grammar is not defined yet. Parsing accepts any text and yields
//! no actions; rendering yields an empty string. Both must stay that way until
//! the grammar is settled.

use crate::models::Action;
use crate::render::diagnostics::Diagnostics;

pub fn render_actions(_actions: &[Action]) -> String {
    String::new()
}

pub fn parse_actions(body: &str, _prefix: &str) -> Result<Vec<Action>, Diagnostics> {
    tracing::trace!(body, "action list ignored");
    Ok(Vec::new())
}
