//! Raw field annotations in the conventional `key:"value"` layout.
//!
//! A tag string is a space-separated list of `key:"value"` pairs, for
//! example `json:"email,omitempty" reflectz:"nodive"`. Keys are runs of
//! printable characters other than space, `:` and `"`. Values are
//! double-quoted and may contain the usual string escapes (`\n`, `\x41`,
//! `\u00e9`, octal `\101`, ...). Parsing stops at the first malformed pair,
//! so anything after it is invisible to lookups. Values are only decoded
//! on demand: a value with a bad escape hides its own key and nothing else.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Annotations attached to a field declaration, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tags(Cow<'static, str>);

impl Tags {
    /// Wraps a raw tag string without validating it.
    pub const fn new(raw: &'static str) -> Self {
        Self(Cow::Borrowed(raw))
    }

    pub fn from_string(raw: String) -> Self {
        Self(Cow::Owned(raw))
    }

    /// Builds a tag string from key/value pairs, quoting each value.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let raw = pairs
            .into_iter()
            .map(|(key, value)| format!("{key}:{}", quote(value)))
            .collect::<Vec<_>>()
            .join(" ");
        Self(Cow::Owned(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `key`, or `None` when the key is absent.
    ///
    /// A key that is present with an empty value returns `Some("")`.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let (_, quoted) = self.raw_pairs().find(|(k, _)| *k == key)?;
        unquote(quoted)
    }

    /// Like [`lookup`](Self::lookup) but maps a missing key to `""`.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Iterates the well-formed `key:"value"` pairs in order, leaving out
    /// values whose escapes cannot be decoded.
    pub fn iter(&self) -> TagIter<'_> {
        TagIter {
            pairs: self.raw_pairs(),
        }
    }

    fn raw_pairs(&self) -> RawPairs<'_> {
        RawPairs {
            raw: &self.0,
            offset: 0,
        }
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Tags {
    fn from(raw: &'static str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Tags {
    fn from(raw: String) -> Self {
        Self::from_string(raw)
    }
}

pub struct TagIter<'a> {
    pairs: RawPairs<'a>,
}

impl<'a> Iterator for TagIter<'a> {
    type Item = (&'a str, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs
            .by_ref()
            .find_map(|(key, quoted)| unquote(quoted).map(|value| (key, value)))
    }
}

/// Splits a tag string into `(key, quoted value)` pairs without decoding.
struct RawPairs<'a> {
    raw: &'a str,
    offset: usize,
}

impl<'a> Iterator for RawPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.offset;
        let tag = &self.raw.as_bytes()[base..];
        let mut i = 0;
        while i < tag.len() && tag[i] == b' ' {
            i += 1;
        }
        let key_start = i;
        while i < tag.len() && tag[i] > b' ' && tag[i] != b':' && tag[i] != b'"' && tag[i] != 0x7f {
            i += 1;
        }
        let key_end = i;
        if key_end == key_start || i + 1 >= tag.len() || tag[i] != b':' || tag[i + 1] != b'"' {
            self.offset = self.raw.len();
            return None;
        }

        // Opening quote sits at i + 1.
        let quote_start = i + 1;
        let mut j = quote_start + 1;
        while j < tag.len() && tag[j] != b'"' {
            if tag[j] == b'\\' {
                j += 1;
            }
            j += 1;
        }
        if j >= tag.len() {
            self.offset = self.raw.len();
            return None;
        }

        self.offset = base + j + 1;
        Some((
            &self.raw[base + key_start..base + key_end],
            &self.raw[base + quote_start..base + j + 1],
        ))
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Decodes a double-quoted value. Byte escapes (`\x`, octal) may build up
/// multi-byte characters, so the result is only checked as UTF-8 at the end.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let decoded = match chars.next()? {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'x' => {
                out.push(u8::try_from(hex_digits(&mut chars, 2)?).ok()?);
                continue;
            }
            'u' => char::from_u32(hex_digits(&mut chars, 4)?)?,
            'U' => char::from_u32(hex_digits(&mut chars, 8)?)?,
            first @ '0'..='7' => {
                let mut code = first.to_digit(8)?;
                for _ in 0..2 {
                    code = code * 8 + chars.next()?.to_digit(8)?;
                }
                out.push(u8::try_from(code).ok()?);
                continue;
            }
            _ => return None,
        };
        let mut buf = [0; 4];
        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
    }
    String::from_utf8(out).ok()
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..count {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}
