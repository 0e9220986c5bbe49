//! Turns string literal tokens (doc comments, attribute values) back into
//! the strings they denote.

use core::fmt;

/// Errors that can occur while unescaping a string literal
#[derive(Debug, PartialEq, Eq)]
pub enum UnescapeError {
    /// The token is not a string literal
    NotAString {
        /// The literal as written
        literal: String,
    },
    /// An illegal character was found following a backslash (e.g., `\a`)
    IllegalEscape {
        /// Index of the backslash in the literal body
        character_index: usize,
        /// The character found after the backslash
        found: char,
    },
    /// Invalid `\xNN` or `\u{...}` escape
    InvalidCodeEscape {
        /// Index of the backslash in the literal body
        character_index: usize,
    },
}

impl fmt::Display for UnescapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnescapeError::NotAString { literal } => {
                write!(f, "expected a string literal, found {literal}")
            }
            UnescapeError::IllegalEscape {
                character_index,
                found,
            } => write!(
                f,
                "illegal character '{found}' following a backslash at index {character_index}"
            ),
            UnescapeError::InvalidCodeEscape { character_index } => {
                write!(f, "invalid escape at index {character_index}")
            }
        }
    }
}

/// Unescapes a string literal as produced by `Literal::to_string`, e.g.
/// `"a\"b"` or `r#"raw"#`.
pub fn unescape(literal: &str) -> Result<String, UnescapeError> {
    let not_a_string = || UnescapeError::NotAString {
        literal: literal.to_string(),
    };

    if let Some(raw) = literal.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let body = raw[hashes..]
            .strip_prefix('"')
            .and_then(|b| b.strip_suffix(&raw[..hashes]))
            .and_then(|b| b.strip_suffix('"'))
            .ok_or_else(not_a_string)?;
        return Ok(body.to_string());
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|b| b.strip_suffix('"'))
        .ok_or_else(not_a_string)?;

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let invalid = UnescapeError::InvalidCodeEscape {
            character_index: idx,
        };
        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 't')) => out.push('\t'),
            Some((_, '0')) => out.push('\0'),
            Some((_, '\\')) => out.push('\\'),
            Some((_, '"')) => out.push('"'),
            Some((_, '\'')) => out.push('\''),
            Some((_, 'x')) => {
                let hex: String = chars.by_ref().take(2).map(|(_, c)| c).collect();
                let code = u8::from_str_radix(&hex, 16).map_err(|_| invalid)?;
                out.push(char::from(code));
            }
            Some((_, 'u')) => {
                if !matches!(chars.next(), Some((_, '{'))) {
                    return Err(invalid);
                }
                let hex: String = chars
                    .by_ref()
                    .map(|(_, c)| c)
                    .take_while(|c| *c != '}')
                    .collect();
                let c = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(invalid)?;
                out.push(c);
            }
            // line continuation: skip the newline and leading whitespace
            Some((_, '\n')) => {
                while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
            }
            Some((_, found)) => {
                return Err(UnescapeError::IllegalEscape {
                    character_index: idx,
                    found,
                });
            }
            None => return Err(invalid),
        }
    }

    Ok(out)
}
