//! Decoding of string literal text into string values.

use crate::token::Quote;

/// Decodes the raw text of a string token into its value.
///
/// Escapes `\n`, `\t` and `\r` produce control characters; any other
/// escaped character stands for itself. A string cut short by a lexical
/// error decodes up to the point where it stopped.
///
/// Block strings (`"""`) additionally drop one line break directly after
/// the opening delimiter, strip `#` comments up to (not including) the end
/// of their line, and treat a backslash before a line break as a line
/// continuation.
#[must_use]
pub fn string_value(text: &str, quote: Quote) -> String {
    let body = text.strip_prefix(quote.delimiter()).unwrap_or(text);
    match quote {
        Quote::Double => decode_line(body, '"'),
        Quote::Single => decode_line(body, '\''),
        Quote::Triple => decode_block(body),
    }
}

fn decode_line(body: &str, close: char) -> String {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    value.push(unescape(escaped));
                }
            }
            c if c == close => break,
            c => value.push(c),
        }
    }
    value
}

fn decode_block(body: &str) -> String {
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    let mut value = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("\"\"\"") {
            break;
        }
        rest = &rest[c.len_utf8()..];
        match c {
            '\\' => {
                if let Some(joined) = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                {
                    rest = joined;
                } else if let Some(escaped) = rest.chars().next() {
                    value.push(unescape(escaped));
                    rest = &rest[escaped.len_utf8()..];
                }
            }
            '#' => {
                let end = rest.find('\n').unwrap_or(rest.len());
                let comment = &rest[..end];
                rest = &rest[end..];
                if comment.ends_with('\r') {
                    value.push('\r');
                }
            }
            c => value.push(c),
        }
    }
    value
}

const fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}
