//! URL shape checking.
//!
//! A purely syntactic check: the input is split into its generic URI
//! components (scheme, authority, path, query, fragment) without any
//! normalization or percent-decoding, and the caller decides which components
//! must be present.

/// Components a URL must carry to pass [`check_url`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlRequire {
    pub scheme: bool,
    pub host: bool,
    pub path: bool,
}

impl UrlRequire {
    /// Nothing required beyond the URL not being empty.
    pub const NONE: UrlRequire = UrlRequire {
        scheme: false,
        host: false,
        path: false,
    };

    /// A local path is required, as for category locations.
    pub const PATH: UrlRequire = UrlRequire {
        scheme: false,
        host: false,
        path: true,
    };

    /// An absolute URL with scheme and host.
    pub const ABSOLUTE: UrlRequire = UrlRequire {
        scheme: true,
        host: true,
        path: false,
    };
}

/// Borrowed components of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    /// Text after `//` up to the path, if the URL has an authority.
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Splits `body` into its components.
    ///
    /// Returns `None` if the body cannot be split, which only happens for an
    /// authority with unbalanced IPv6 brackets.
    pub fn parse(body: &'a str) -> Option<Self> {
        let (rest, fragment) = match body.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (body, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (scheme, rest) = split_scheme(rest);

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        if let Some(authority) = authority {
            if authority.contains('[') != authority.contains(']') {
                return None;
            }
        }

        Some(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// Returns true if the authority names a host.
    pub fn has_host(&self) -> bool {
        self.authority.is_some_and(|a| !a.is_empty())
    }
}

/// Splits a leading `scheme:` off `s`.
///
/// A scheme starts with a letter and continues with letters, digits, `+`, `-`
/// or `.`. A candidate followed only by digits is a `host:port` pair without
/// a scheme and stays in the path.
fn split_scheme(s: &str) -> (Option<&str>, &str) {
    let Some(colon) = s.find(':') else {
        return (None, s);
    };
    let (candidate, rest) = (&s[..colon], &s[colon + 1..]);

    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        return (None, s);
    }

    if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
        return (None, s);
    }

    (Some(candidate), rest)
}

/// Checks that `body` looks like a URL carrying the required components.
///
/// An empty or unsplittable body is never valid, and neither is one without
/// any scheme, authority or path, whatever `require` says.
pub fn check_url(body: &str, require: UrlRequire) -> bool {
    if body.is_empty() {
        return false;
    }
    let Some(url) = UrlParts::parse(body) else {
        return false;
    };

    let has_scheme = url.scheme.is_some_and(|s| !s.is_empty());
    let has_host = url.has_host();
    let has_path = !url.path.is_empty();

    if require.scheme && !has_scheme {
        return false;
    }
    if require.host && !has_host {
        return false;
    }
    if require.path && !has_path {
        return false;
    }

    has_scheme || has_host || has_path
}
