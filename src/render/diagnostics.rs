//! Diagnostics produced while parsing the text grammar.
//!
//! Every parse operation returns its own [`Diagnostics`] in the error arm of
//! its `Result`, so a missing value and a non-empty diagnostic list always go
//! together. Each [`Diagnostic`] keeps the caller-supplied prefix, which lets a
//! nested failure be traced back to the chunk or line that caused it.

use std::fmt;

use thiserror::Error;

/// Broad family a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticClass {
    /// Missing `Category:` prefix, empty term, chunk without `=`.
    Structural,
    /// Missing required quotes or stray quotes.
    Quoting,
    /// Missing required field, invalid location, unknown key.
    Validation,
    /// Failure inside the attribute-definition grammar.
    SubGrammar,
    /// Duplicate category or a line that failed inside a collection.
    Collection,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("`Category` expected")]
    CategoryExpected,

    #[error("invalid format, term expected")]
    TermExpected,

    #[error("invalid format, `key=value` expected in `{chunk}`")]
    MissingEquals { chunk: String },

    #[error("value of `{key}` must be quoted: {value}")]
    Unquoted { key: String, value: String },

    #[error("unexpected quotes in category `{key}` value")]
    UnexpectedQuotes { key: String },

    #[error("URL is not valid in category location: {0}")]
    InvalidLocation(String),

    #[error("unknown key `{0}` in category")]
    UnknownKey(String),

    #[error("error parsing attribute definitions (unexpected `{leftover}`)")]
    AttributeDefinitions { leftover: String },

    #[error("category not valid, missing {}", .missing.join(", "))]
    InvalidCategory { missing: Vec<&'static str> },

    #[error("failed to parse category ({0})")]
    LineFailed(String),

    #[error("category not unique (term \"{term}\", scheme \"{scheme}\")")]
    NotUnique { term: String, scheme: String },
}

impl DiagnosticKind {
    /// Returns the family this diagnostic belongs to.
    pub fn class(&self) -> DiagnosticClass {
        match self {
            DiagnosticKind::CategoryExpected
            | DiagnosticKind::TermExpected
            | DiagnosticKind::MissingEquals { .. } => DiagnosticClass::Structural,
            DiagnosticKind::Unquoted { .. } | DiagnosticKind::UnexpectedQuotes { .. } => {
                DiagnosticClass::Quoting
            }
            DiagnosticKind::InvalidLocation(_)
            | DiagnosticKind::UnknownKey(_)
            | DiagnosticKind::InvalidCategory { .. } => DiagnosticClass::Validation,
            DiagnosticKind::AttributeDefinitions { .. } => DiagnosticClass::SubGrammar,
            DiagnosticKind::LineFailed(_) | DiagnosticKind::NotUnique { .. } => {
                DiagnosticClass::Collection
            }
        }
    }
}

/// A single diagnostic with its context prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub prefix: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.kind)
    }
}

/// An ordered list of diagnostics from one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding one diagnostic.
    pub fn single(prefix: &str, kind: DiagnosticKind) -> Self {
        let mut diagnostics = Self::new();
        diagnostics.push(prefix, kind);
        diagnostics
    }

    pub fn push(&mut self, prefix: &str, kind: DiagnosticKind) {
        self.0.push(Diagnostic {
            prefix: prefix.to_string(),
            kind,
        });
    }

    /// Appends all diagnostics of `other`, keeping their order.
    pub fn append(&mut self, mut other: Diagnostics) {
        self.0.append(&mut other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Returns the kinds in order, without prefixes.
    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticKind> {
        self.0.iter().map(|d| &d.kind)
    }

    /// Returns true if any diagnostic matches the predicate.
    pub fn any(&self, f: impl Fn(&DiagnosticKind) -> bool) -> bool {
        self.kinds().any(f)
    }

    /// Returns every diagnostic rendered with its prefix.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Returns `Ok(value)` when no diagnostic was recorded, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Diagnostics> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
