//! Run-length codec used by the binary drawing export.
//!
//! A run of one character becomes `<char><count>`, runs are joined with `|`:
//!
//! ```text
//! "aaab"  <->  "a3|b1"
//! ```
//!
//! The delimiter is not escaped, so text containing `|` does not survive a
//! round trip. Callers that need it (the drawing file writer) keep `|` out of
//! the payload before compressing.

use thiserror::Error;

pub const TOKEN_SEPARATOR: char = '|';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RleError {
    #[error("decompressed payload exceeds {limit} characters")]
    TooLarge { limit: usize },
}

/// Compress `text` into `|`-joined `<char><count>` tokens.
pub fn compress(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let Some(mut current) = chars.next() else {
        return out;
    };
    let mut run = 1usize;

    for c in chars {
        if c == current {
            run += 1;
        } else {
            push_token(&mut out, current, run);
            current = c;
            run = 1;
        }
    }
    push_token(&mut out, current, run);

    out
}

fn push_token(out: &mut String, c: char, run: usize) {
    if !out.is_empty() {
        out.push(TOKEN_SEPARATOR);
    }
    out.push(c);
    out.push_str(&run.to_string());
}

/// Expand tokens produced by [`compress`]. Malformed tokens are skipped.
pub fn decompress(rle: &str) -> String {
    let mut out = String::with_capacity(rle.len());
    for (c, count) in tokens(rle) {
        out.extend(std::iter::repeat_n(c, count));
    }
    out
}

/// Like [`decompress`], but refuses to produce more than `max_chars` characters.
pub fn decompress_limited(rle: &str, max_chars: usize) -> Result<String, RleError> {
    let mut out = String::with_capacity(rle.len().min(max_chars));
    let mut produced = 0usize;

    for (c, count) in tokens(rle) {
        produced = produced.saturating_add(count);
        if produced > max_chars {
            return Err(RleError::TooLarge { limit: max_chars });
        }
        out.extend(std::iter::repeat_n(c, count));
    }

    Ok(out)
}

/// Well-formed `(literal, count)` pairs of an encoded string.
fn tokens(rle: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    rle.split(TOKEN_SEPARATOR).filter_map(parse_token)
}

fn parse_token(token: &str) -> Option<(char, usize)> {
    let mut chars = token.chars();
    let literal = chars.next()?;
    let count = chars.as_str();
    if count.is_empty() {
        return None;
    }
    count.parse().ok().map(|count| (literal, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_rejects_garbage() {
        assert_eq!(parse_token("a12"), Some(('a', 12)));
        assert_eq!(parse_token("a"), None);
        assert_eq!(parse_token(""), None);
        assert_eq!(parse_token("ax"), None);
        assert_eq!(parse_token("a-1"), None);
    }

    #[test]
    fn test_digits_as_literals() {
        // The literal is always the first character, even when it is a digit
        assert_eq!(compress("1112"), "13|21");
        assert_eq!(decompress("13|21"), "1112");
    }

    #[test]
    fn test_limit() {
        assert_eq!(decompress_limited("a3|b1", 4), Ok("aaab".to_string()));
        assert_eq!(
            decompress_limited("a3|b1", 3),
            Err(RleError::TooLarge { limit: 3 })
        );
        assert!(decompress_limited("a99999999999999999999", 10).is_ok());
    }
}
