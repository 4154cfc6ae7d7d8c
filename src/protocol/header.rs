//! Ordered header list and comma-separated value access.
//!
//! This module provides the canonical in-memory representation of a message's
//! header section. Unlike a map keyed by name, [`HeaderList`] keeps fields in
//! the exact order they arrived and allows repeated names, because both
//! matter on the wire:
//!
//! - "a proxy MUST NOT change the order of these field values when forwarding
//!   a message" (RFC 9110 section 5.3), and
//! - repeated names are legal for any header defined as a comma-separated
//!   list.
//!
//! Names keep the exact bytes they arrived with; matching is always
//! case-insensitive.

use bytes::Bytes;

/// A single header field: a `(name, value)` pair of opaque byte sequences.
///
/// The name is stored exactly as received (case preserved); the value is
/// stored with surrounding whitespace already stripped by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    name: Bytes,
    value: Bytes,
}

impl HeaderField {
    pub(crate) fn from_canonical(name: Bytes, value: Bytes) -> Self {
        Self { name, value }
    }

    /// Returns the field name, exact bytes as received.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Returns the field value, surrounding whitespace stripped.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &[u8]) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An ordered sequence of header fields for one message.
///
/// Construct one through [`normalize`](crate::codec::normalize); downstream
/// consumers rely on the invariants that function establishes (at most one
/// Content-Length, digits-only; at most one Transfer-Encoding, `chunked`)
/// without re-checking them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    fields: Vec<HeaderField>,
}

impl HeaderList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { fields: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, field: HeaderField) {
        self.fields.push(field);
    }

    /// Returns the number of fields in the list.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the list holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the fields in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.fields.iter()
    }

    /// Collects the comma-separated tokens of every field named `name`.
    ///
    /// The name match is case-insensitive and spans all occurrences, in wire
    /// order. Each matching value is split on `,`, every piece is
    /// whitespace-trimmed, empty pieces are dropped, and with `fold_case`
    /// each piece is additionally ASCII-lowercased.
    ///
    /// # Caveat
    ///
    /// This is a naive tokenizer: it splits inside quoted strings, so a value
    /// like `foo; options="1,2", chunked` comes back as three broken tokens
    /// instead of two. That is acceptable only for headers whose tokens are
    /// compared whole (Transfer-Encoding is only ever tested for being
    /// exactly `chunked`, Expect for `100-continue`, Connection options are
    /// plain tokens). Do not use it for headers whose grammar puts commas
    /// inside quoted strings.
    pub fn comma_values(&self, name: impl AsRef<[u8]>, fold_case: bool) -> Vec<Bytes> {
        let name = name.as_ref();
        let mut out = Vec::new();
        for field in &self.fields {
            if !field.has_name(name) {
                continue;
            }
            for piece in field.value.split(|b| *b == b',') {
                let piece = piece.trim_ascii();
                if piece.is_empty() {
                    continue;
                }
                if fold_case {
                    out.push(Bytes::from(piece.to_ascii_lowercase()));
                } else {
                    // piece borrows from field.value, so this is zero-copy
                    out.push(field.value.slice_ref(piece));
                }
            }
        }
        out
    }

    /// Replaces every field named `name` with one field per new value.
    ///
    /// All fields whose name case-insensitively matches `name` are removed;
    /// the relative order of the remaining fields is preserved. One field per
    /// element of `values` is then appended at the end of the list, all under
    /// the given name, values taken verbatim.
    ///
    /// # Caveat
    ///
    /// This edit bypasses [`normalize`](crate::codec::normalize) entirely: it
    /// can plant a duplicate Content-Length or a non-chunked
    /// Transfer-Encoding without complaint. Callers that go on to rely on the
    /// normalized invariants must either re-run normalization afterwards or
    /// keep this away from the two reserved names. The rewrite is also a
    /// plain in-place mutation with no rollback; it cannot fail once started,
    /// but no other reader may observe the list mid-edit.
    pub fn set_comma_values<I, V>(&mut self, name: impl AsRef<[u8]>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]>,
    {
        let name = Bytes::copy_from_slice(name.as_ref());
        self.fields.retain(|field| !field.has_name(&name));
        for value in values {
            self.fields.push(HeaderField {
                name: name.clone(),
                value: Bytes::copy_from_slice(value.as_ref()),
            });
        }
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a HeaderField;
    type IntoIter = std::slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
