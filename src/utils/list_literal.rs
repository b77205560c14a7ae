//! Scanner for string-encoded list literals in the mapping table
//!
//! The mapping CSV stores its `Degrees` and `Notes` columns as repr-style
//! list literals (`[1, 0, 0, 1]`, `['C', 'E', 'G']`). Both are parsed once
//! at load time into native values. This is a strict scanner over that one
//! source format, not an expression evaluator.

use thiserror::Error;

/// List-literal parse errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    /// Input does not start with `[`
    #[error("expected '[' at start of list literal")]
    MissingOpenBracket,

    /// Input ends before the closing `]`
    #[error("unterminated list literal")]
    Unterminated,

    /// An element that is not a plain integer
    #[error("invalid integer element '{0}'")]
    InvalidInteger(String),

    /// Non-whitespace content after the closing `]`
    #[error("unexpected content after closing ']'")]
    TrailingContent,

    /// A character that cannot start an element
    #[error("unexpected character '{0}' in list literal")]
    UnexpectedChar(char),
}

/// Parse a bracketed, comma-separated integer list, e.g. `[1, 0, 0, 1]`
pub fn parse_int_list(input: &str) -> Result<Vec<i64>, LiteralError> {
    let inner = bracket_contents(input)?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|piece| {
            let atom = piece.trim();
            atom.parse::<i64>()
                .map_err(|_| LiteralError::InvalidInteger(atom.to_string()))
        })
        .collect()
}

/// Parse a bracketed, comma-separated list of quoted strings, e.g.
/// `['C', 'E', 'G']`
///
/// Accepts single or double quotes per element, with backslash escapes
/// inside the quotes.
pub fn parse_string_list(input: &str) -> Result<Vec<String>, LiteralError> {
    let mut chars = input.trim().chars().peekable();

    match chars.next() {
        Some('[') => {}
        _ => return Err(LiteralError::MissingOpenBracket),
    }

    let mut items = Vec::new();
    let mut expect_element = false;

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        match chars.next() {
            Some(']') if !expect_element => break,
            Some(quote @ ('\'' | '"')) => {
                items.push(parse_quoted(&mut chars, quote)?);

                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                match chars.next() {
                    Some(',') => expect_element = true,
                    Some(']') => break,
                    Some(c) => return Err(LiteralError::UnexpectedChar(c)),
                    None => return Err(LiteralError::Unterminated),
                }
            }
            Some(c) => return Err(LiteralError::UnexpectedChar(c)),
            None => return Err(LiteralError::Unterminated),
        }
    }

    for c in chars {
        if !c.is_whitespace() {
            return Err(LiteralError::TrailingContent);
        }
    }

    Ok(items)
}

/// Consume characters up to the closing quote, honoring backslash escapes
fn parse_quoted(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    quote: char,
) -> Result<String, LiteralError> {
    let mut out = String::new();

    loop {
        match chars.next() {
            Some(c) if c == quote => return Ok(out),
            Some('\\') => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(LiteralError::Unterminated),
            },
            Some(c) => out.push(c),
            None => return Err(LiteralError::Unterminated),
        }
    }
}

/// Strip the surrounding brackets, rejecting trailing content
fn bracket_contents(input: &str) -> Result<&str, LiteralError> {
    let trimmed = input.trim();
    let rest = trimmed
        .strip_prefix('[')
        .ok_or(LiteralError::MissingOpenBracket)?;

    match rest.find(']') {
        None => Err(LiteralError::Unterminated),
        Some(pos) => {
            if rest[pos + 1..].trim().is_empty() {
                Ok(&rest[..pos])
            } else {
                Err(LiteralError::TrailingContent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binary_degree_list() {
        assert_eq!(
            parse_int_list("[1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0]").unwrap(),
            vec![1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn parses_empty_and_spaced_int_lists() {
        assert_eq!(parse_int_list("[]").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_int_list("  [1,0 , 1]  ").unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn rejects_malformed_int_lists() {
        assert_eq!(
            parse_int_list("1, 0, 1"),
            Err(LiteralError::MissingOpenBracket)
        );
        assert_eq!(parse_int_list("[1, 0"), Err(LiteralError::Unterminated));
        assert_eq!(
            parse_int_list("[1, 0] extra"),
            Err(LiteralError::TrailingContent)
        );
        assert_eq!(
            parse_int_list("[1, x]"),
            Err(LiteralError::InvalidInteger("x".to_string()))
        );
        assert_eq!(
            parse_int_list("[1, ]"),
            Err(LiteralError::InvalidInteger(String::new()))
        );
    }

    #[test]
    fn parses_single_quoted_note_names() {
        assert_eq!(
            parse_string_list("['C', 'E', 'G']").unwrap(),
            vec!["C", "E", "G"]
        );
    }

    #[test]
    fn parses_double_quotes_and_escapes() {
        assert_eq!(
            parse_string_list(r#"["C#", 'E\'s']"#).unwrap(),
            vec!["C#", "E's"]
        );
    }

    #[test]
    fn parses_empty_string_list() {
        assert_eq!(parse_string_list("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn rejects_malformed_string_lists() {
        assert_eq!(
            parse_string_list("'C', 'E'"),
            Err(LiteralError::MissingOpenBracket)
        );
        assert_eq!(
            parse_string_list("['C', 'E'"),
            Err(LiteralError::Unterminated)
        );
        assert_eq!(
            parse_string_list("['C'] x"),
            Err(LiteralError::TrailingContent)
        );
        assert_eq!(
            parse_string_list("[C]"),
            Err(LiteralError::UnexpectedChar('C'))
        );
        assert_eq!(
            parse_string_list("['C', ]"),
            Err(LiteralError::UnexpectedChar(']'))
        );
    }
}
