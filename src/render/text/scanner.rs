//! Quote-aware scanning of category lines.

/// Quoting problem found by [`unquote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    /// The value must be wrapped in double quotes and is not.
    Missing,
    /// A double quote remains after removing the wrapping pair.
    Stray,
}

/// Splits a line into chunks at `;` separators outside double quotes.
///
/// Whitespace following a separator is not part of the next chunk. A quote
/// that is never closed keeps the remainder of the line in one chunk.
pub fn split_chunks(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                chunks.push(&line[start..i]);
                start = i + 1;
                while let Some(&(j, w)) = chars.peek() {
                    if !w.is_whitespace() {
                        break;
                    }
                    start = j + w.len_utf8();
                    chars.next();
                }
            }
            _ => {}
        }
    }

    chunks.push(&line[start..]);
    chunks
}

/// Splits a chunk at its first `=` into a trimmed key and value.
pub fn split_key_value(chunk: &str) -> Option<(&str, &str)> {
    chunk
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Removes exactly one pair of wrapping double quotes.
///
/// With `optional` set an unwrapped value is accepted as is.
pub fn unquote(value: &str, optional: bool) -> Result<&str, QuoteError> {
    let inner = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else if optional {
        value
    } else {
        return Err(QuoteError::Missing);
    };

    if inner.contains('"') {
        return Err(QuoteError::Stray);
    }
    Ok(inner)
}
