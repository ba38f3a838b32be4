//! Category lines.
//!
//! ```text
//! Category: entity; scheme="http://schemas.ogf.org/occi/core#"; class="kind"; title="entity"; location="/entity/"; attributes="occi.core.id{immutable required} occi.core.title"
//! ```
//!
//! Every value is double-quoted except `class`, where quotes are optional.
//! Parsing keeps going after a bad chunk so that one call reports every
//! problem on the line; any diagnostic still makes the whole line fail.

use std::fmt;

use crate::models::Category;
use crate::render::diagnostics::{DiagnosticKind, Diagnostics};
use crate::render::url::{check_url, UrlRequire};

use super::actions::{parse_actions, render_actions};
use super::attributes::{parse_attribute_defs, render_attribute_defs};
use super::scanner::{split_chunks, split_key_value, unquote, QuoteError};

/// Line terminator appended by [`render_category`].
pub const EOL: &str = "\r\n";

const CATEGORY_PREFIX: &str = "Category:";

/// Formats the category as one unterminated line.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}; scheme=\"{}\"; class=\"{}\"",
            CATEGORY_PREFIX, self.term, self.scheme, self.class
        )?;

        for (key, value) in [
            ("title", &self.title),
            ("rel", &self.rel),
            ("location", &self.location),
        ] {
            if let Some(value) = value {
                write!(f, "; {}=\"{}\"", key, value)?;
            }
        }

        if let Some(attributes) = &self.attributes {
            write!(f, "; attributes=\"{}\"", render_attribute_defs(attributes))?;
        }
        if let Some(actions) = &self.actions {
            write!(f, "; actions=\"{}\"", render_actions(actions))?;
        }
        Ok(())
    }
}

/// Renders a category as one line terminated by [`EOL`].
///
/// The category is expected to be valid; rendering itself never fails.
pub fn render_category(category: &Category) -> String {
    format!("{}{}", category, EOL)
}

/// Parses one category line.
///
/// `prefix` is prepended to every diagnostic. A trailing line terminator is
/// ignored.
pub fn parse_category(line: &str, prefix: &str) -> Result<Category, Diagnostics> {
    let line = line.trim_end_matches(['\r', '\n']);
    let chunks = split_chunks(line);

    let Some(term) = chunks[0].strip_prefix(CATEGORY_PREFIX) else {
        return Err(Diagnostics::single(prefix, DiagnosticKind::CategoryExpected));
    };
    let term = term.trim();
    if term.is_empty() {
        return Err(Diagnostics::single(prefix, DiagnosticKind::TermExpected));
    }

    let mut diagnostics = Diagnostics::new();
    let mut category = Category::new(term, "", "");

    for chunk in &chunks[1..] {
        if chunk.trim().is_empty() {
            continue;
        }
        let Some((key, raw)) = split_key_value(chunk) else {
            diagnostics.push(
                prefix,
                DiagnosticKind::MissingEquals {
                    chunk: chunk.to_string(),
                },
            );
            continue;
        };

        let value = match unquote(raw, key == "class") {
            Ok(value) => value,
            Err(QuoteError::Missing) => {
                diagnostics.push(
                    prefix,
                    DiagnosticKind::Unquoted {
                        key: key.to_string(),
                        value: raw.to_string(),
                    },
                );
                continue;
            }
            Err(QuoteError::Stray) => {
                diagnostics.push(
                    prefix,
                    DiagnosticKind::UnexpectedQuotes {
                        key: key.to_string(),
                    },
                );
                continue;
            }
        };
        tracing::trace!(key, value, "category chunk");

        match key {
            "scheme" => category.scheme = value.to_string(),
            "class" => category.class = value.into(),
            "title" => category.title = Some(value.to_string()),
            "rel" => category.rel = Some(value.to_string()),
            "location" => {
                if !check_url(value, UrlRequire::PATH) {
                    diagnostics.push(prefix, DiagnosticKind::InvalidLocation(value.to_string()));
                }
                category.location = Some(value.to_string());
            }
            "attributes" => match parse_attribute_defs(value, prefix) {
                Ok(defs) => category.attributes = Some(defs),
                Err(errors) => diagnostics.append(errors),
            },
            "actions" => match parse_actions(value, prefix) {
                Ok(actions) => category.actions = Some(actions),
                Err(errors) => diagnostics.append(errors),
            },
            other => diagnostics.push(prefix, DiagnosticKind::UnknownKey(other.to_string())),
        }
    }

    let missing = category.missing_fields();
    if !missing.is_empty() {
        diagnostics.push(prefix, DiagnosticKind::InvalidCategory { missing });
    }

    let category = diagnostics.into_result(category)?;
    tracing::debug!(term = %category.term, scheme = %category.scheme, "parsed category");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttributeDefinition, CategoryClass};

    const CORE: &str = "http://schemas.ogf.org/occi/core#";

    #[test]
    fn test_parse_full_line() {
        let line = r#"Category: entity;scheme="http://schemas.ogf.org/occi/core#";class="kind";title="entity";location="/entity/";attributes="occi.core.id{immutable required} occi.core.title""#;
        let category = parse_category(line, "").unwrap();

        assert_eq!(category.term, "entity");
        assert_eq!(category.scheme, CORE);
        assert_eq!(category.class, CategoryClass::Kind);
        assert_eq!(category.title.as_deref(), Some("entity"));
        assert_eq!(category.location.as_deref(), Some("/entity/"));
        assert_eq!(
            category.attributes,
            Some(vec![
                AttributeDefinition::new("occi.core.id").immutable().required(),
                AttributeDefinition::new("occi.core.title"),
            ])
        );
        assert_eq!(category.actions, None);
    }

    #[test]
    fn test_class_quotes_optional() {
        let category = parse_category(r#"Category: link; scheme="http://x#"; class=kind"#, "").unwrap();
        assert_eq!(category.class, CategoryClass::Kind);
    }

    #[test]
    fn test_not_a_category() {
        let err = parse_category("not a category line", "").unwrap_err();
        assert_eq!(err.messages(), vec!["`Category` expected"]);
    }

    #[test]
    fn test_empty_term() {
        let err = parse_category(r#"Category: ; scheme="s"; class="k""#, "").unwrap_err();
        assert_eq!(
            err.kinds().collect::<Vec<_>>(),
            vec![&DiagnosticKind::TermExpected]
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let err = parse_category(r#"Category: entity; title="x""#, "p: ").unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["p: category not valid, missing scheme, class"]
        );
    }

    #[test]
    fn test_unknown_key_fails() {
        let err =
            parse_category(r#"Category: a; scheme="s"; class="kind"; color="red""#, "").unwrap_err();
        assert_eq!(err.messages(), vec!["unknown key `color` in category"]);
    }

    #[test]
    fn test_unquoted_value_fails() {
        let err = parse_category(r#"Category: a; scheme=s; class="kind""#, "").unwrap_err();
        assert!(err.any(|k| matches!(k, DiagnosticKind::Unquoted { key, .. } if key == "scheme")));
        // the scheme was never stored, so validation fails as well
        assert!(err.any(|k| matches!(k, DiagnosticKind::InvalidCategory { .. })));
    }

    #[test]
    fn test_stray_quotes_fail() {
        let err =
            parse_category(r#"Category: a; scheme="s"; class="kind"; title=""x"""#, "").unwrap_err();
        assert_eq!(
            err.kinds().collect::<Vec<_>>(),
            vec![&DiagnosticKind::UnexpectedQuotes {
                key: "title".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_location_accumulates() {
        let err = parse_category(
            r#"Category: a; scheme="s"; class="kind"; location="http://host"; color="red""#,
            "",
        )
        .unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "URL is not valid in category location: http://host",
                "unknown key `color` in category",
            ]
        );
    }

    #[test]
    fn test_bad_attributes_use_prefix() {
        let err = parse_category(
            r#"Category: a; scheme="s"; class="kind"; attributes="x{required""#,
            "line 3: ",
        )
        .unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["line 3: error parsing attribute definitions (unexpected `{required`)"]
        );
    }

    #[test]
    fn test_chunk_without_equals() {
        let err = parse_category(r#"Category: a; scheme="s"; class="kind"; junk"#, "").unwrap_err();
        assert!(err.any(|k| matches!(k, DiagnosticKind::MissingEquals { chunk } if chunk == "junk")));
    }

    #[test]
    fn test_actions_parse_empty() {
        let category = parse_category(
            r#"Category: compute; scheme="s"; class="kind"; actions="http://x/action#start""#,
            "",
        )
        .unwrap();
        assert_eq!(category.actions, Some(vec![]));
    }

    #[test]
    fn test_trailing_separator_and_eol() {
        let category = parse_category("Category: a; scheme=\"s\"; class=\"kind\";\r\n", "").unwrap();
        assert_eq!(category, Category::new("a", "s", "kind"));
    }

    #[test]
    fn test_semicolon_inside_quotes() {
        let category =
            parse_category(r#"Category: a; scheme="s"; class="kind"; title="one; two""#, "").unwrap();
        assert_eq!(category.title.as_deref(), Some("one; two"));
    }

    #[test]
    fn test_render_location_only() {
        let category = Category::new("entity", CORE, "kind").with_location("/entity/");
        assert_eq!(
            render_category(&category),
            format!(
                "Category: entity; scheme=\"{}\"; class=\"kind\"; location=\"/entity/\"{}",
                CORE, EOL
            )
        );
    }

    #[test]
    fn test_render_field_order() {
        let category = Category::new("resource", CORE, "kind")
            .with_location("/resource/")
            .with_rel("http://schemas.ogf.org/occi/core#entity")
            .with_title("Resource")
            .with_attributes(vec![AttributeDefinition::new("occi.core.summary")])
            .with_actions(vec![]);
        assert_eq!(
            category.to_string(),
            "Category: resource; scheme=\"http://schemas.ogf.org/occi/core#\"; class=\"kind\"; \
             title=\"Resource\"; rel=\"http://schemas.ogf.org/occi/core#entity\"; \
             location=\"/resource/\"; attributes=\"occi.core.summary\"; actions=\"\""
        );
    }

    #[test]
    fn test_roundtrip() {
        let category = Category::new("link", CORE, "kind")
            .with_title("link")
            .with_rel("http://schemas.ogf.org/occi/core#entity")
            .with_location("/link/")
            .with_attributes(vec![
                AttributeDefinition::new("occi.core.source").required(),
                AttributeDefinition::new("occi.core.target").immutable().required(),
            ]);
        let parsed = parse_category(&render_category(&category), "").unwrap();
        assert_eq!(parsed, category);
    }
}
