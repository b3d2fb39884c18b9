//! Header container with canonical, case-insensitive names.
//!
//! Names are normalized on write to the conventional `Title-Case` form
//! (`content-type` becomes `Content-Type`), so lookups succeed with any casing.
//! Entries keep their insertion order, which makes serialization deterministic.

use std::fmt;

use bytes::{BufMut, BytesMut};

/// An ordered mapping from canonical header name to a single value.
///
/// Setting a name that is already present replaces its value in place: the
/// entry keeps the position of the first insertion and the previous value is
/// returned. Repeated or list-valued headers are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, returning the value it replaced, if any.
    pub fn set<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) -> Option<String> {
        let name = canonical_name(name.as_ref());
        let value = value.into();

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        let name = canonical_name(name.as_ref());
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn contains<N: AsRef<str>>(&self, name: N) -> bool {
        self.get(name).is_some()
    }

    pub fn remove<N: AsRef<str>>(&mut self, name: N) -> Option<String> {
        let name = canonical_name(name.as_ref());
        let index = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders every entry as a `Name: value\r\n` line.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Writes the serialized form straight into an output buffer.
    pub fn encode(&self, dst: &mut BytesMut) {
        for (name, value) in &self.entries {
            dst.put_slice(name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(b"\r\n");
        }
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

/// Returns the canonical form of a header name.
///
/// The first letter and every letter following a hyphen are upper-cased, all
/// other letters are lower-cased. A name containing a byte that is not a valid
/// token character is returned unchanged.
fn canonical_name(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
            upper = c == '-';
            out
        })
        .collect()
}

// tchar, see https://www.rfc-editor.org/rfc/rfc9110#name-tokens
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
