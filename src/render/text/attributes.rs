//! Attribute definition lists.
//!
//! ```text
//! occi.core.id{immutable required} occi.core.title occi.core.source{required}
//! ```
//!
//! A name runs up to the next space or `{`. An optional `{...}` group holds
//! whitespace-separated flags; `required` and `immutable` are recognized and
//! any other word is ignored.

use crate::models::AttributeDefinition;
use crate::render::diagnostics::{DiagnosticKind, Diagnostics};

/// Renders one definition as `name` with its flag group, if any.
pub fn render_attribute_def(def: &AttributeDefinition) -> String {
    let flags = match (def.immutable, def.required) {
        (true, true) => "{immutable required}",
        (true, false) => "{immutable}",
        (false, true) => "{required}",
        (false, false) => "",
    };
    format!("{}{}", def.name, flags)
}

/// Renders definitions separated by single spaces, in the given order.
pub fn render_attribute_defs(defs: &[AttributeDefinition]) -> String {
    defs.iter()
        .map(render_attribute_def)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a definition list.
///
/// Fails without a partial result if any text cannot be consumed as a
/// definition.
pub fn parse_attribute_defs(
    body: &str,
    prefix: &str,
) -> Result<Vec<AttributeDefinition>, Diagnostics> {
    let mut defs = Vec::new();
    let mut rest = body;

    loop {
        let name_end = rest.find([' ', '{']).unwrap_or(rest.len());
        if name_end == 0 {
            break;
        }
        let mut def = AttributeDefinition::new(&rest[..name_end]);
        rest = &rest[name_end..];

        if let Some((flags, after)) = rest
            .strip_prefix('{')
            .and_then(|inner| inner.split_once('}'))
        {
            for flag in flags.split_whitespace() {
                match flag {
                    "required" => def.required = true,
                    "immutable" => def.immutable = true,
                    _ => {}
                }
            }
            rest = after;
        }

        rest = rest.trim_start();
        defs.push(def);
    }

    if !rest.is_empty() {
        return Err(Diagnostics::single(
            prefix,
            DiagnosticKind::AttributeDefinitions {
                leftover: rest.to_string(),
            },
        ));
    }

    Ok(defs)
}
