use crate::{ScalarType, Value};
use alloc::borrow::Cow;
use alloc::string::String;

impl<'input> Value<'input> {
    /// Coerces a plain scalar: `true`/`false` first, then numbers, otherwise a
    /// string with one layer of quotes removed.
    #[must_use]
    pub fn from_scalar(raw: &'input str) -> Value<'input> {
        match raw.as_bytes() {
            b"true" => return Value::Bool(true),
            b"false" => return Value::Bool(false),
            _ => {}
        }
        if let Some(number) = parse_number(raw) {
            return number;
        }
        Value::String(unquote(raw))
    }
}

/// Parses `raw` as a whole number or a finite float.
#[must_use]
pub fn parse_number(raw: &str) -> Option<Value<'static>> {
    if let Ok(integer) = raw.parse::<i64>() {
        return Some(Value::Integer(integer));
    }
    parse_float(raw).map(Value::FloatingPoint)
}

fn parse_float(v: &str) -> Option<f64> {
    // Test that `v` contains a digit so as not to pass in strings like `inf`,
    // which rust will parse as a float.
    if !v.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    v.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Whether a plain `raw` would be read back as something other than a string.
#[must_use]
pub fn would_coerce(raw: &str) -> bool {
    matches!(raw, "true" | "false") || parse_number(raw).is_some()
}

/// Strips one layer of matching quotes. Double quoted content is unescaped.
#[must_use]
pub fn unquote(raw: &str) -> Cow<'_, str> {
    match ScalarType::of(raw) {
        ScalarType::Plain => Cow::Borrowed(raw),
        ScalarType::SingleQuote => Cow::Borrowed(&raw[1..raw.len() - 1]),
        ScalarType::DoubleQuote => unescape(&raw[1..raw.len() - 1]),
    }
}

fn unescape(inner: &str) -> Cow<'_, str> {
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
