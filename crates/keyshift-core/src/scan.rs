//! Delimiter-balance scanning over source text
//!
//! This is a heuristic, not a parser: it understands enough of a C-family
//! lexical grammar (quoted strings, template literals, line and block
//! comments) to keep delimiters inside them from counting.

/// Find the byte index of the delimiter closing the one at `open`.
///
/// `open` must point at `(`, `[` or `{`. Returns `None` if it does not, or
/// if the text ends (or a mismatched closer appears) before balance is
/// restored.
pub fn find_closing(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    closer_for(*bytes.get(open)?)?;

    let mut stack: Vec<u8> = Vec::new();
    let mut i = open;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'(' | b'[' | b'{' => {
                stack.push(closer_for(b)?);
                i += 1;
            }
            b')' | b']' | b'}' => {
                if stack.pop()? != b {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i);
                }
                i += 1;
            }
            b'\'' | b'"' => i = skip_quoted(bytes, i, b, false)?,
            b'`' => i = skip_quoted(bytes, i, b, true)?,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..]
                    .iter()
                    .position(|&c| c == b'\n')
                    .map_or(bytes.len(), |p| i + p);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = text[i + 2..].find("*/")?;
                i = i + 2 + end + 2;
            }
            _ => i += 1,
        }
    }

    None
}

fn closer_for(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        _ => None,
    }
}

/// Skip a quoted literal starting at `start`; returns the index just past
/// the closing quote. Plain quotes may not span lines.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8, multiline: bool) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if !multiline => return None,
            c if c == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
