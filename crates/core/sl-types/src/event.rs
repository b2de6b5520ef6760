//! Pipeline event type.

use indexmap::IndexMap;

/// A single pipeline event.
///
/// An event couples an opaque byte body with a mutable, insertion-ordered
/// map of string headers. The body is fixed at construction time: the only
/// way to observe it is through [`Event::body`], so no stage can resize,
/// truncate, or replace it. Enrichment stages communicate exclusively by
/// adding or overwriting header entries.
#[derive(Clone, PartialEq, Eq)]
pub struct Event {
    /// Opaque payload bytes, immutable after construction.
    body: Vec<u8>,

    /// Header entries, in insertion order.
    headers: IndexMap<String, String>,
}

impl Event {
    /// Creates an event with the given body and no headers.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            headers: IndexMap::new(),
        }
    }

    /// Creates an event with the given body and initial headers.
    pub fn with_headers(
        body: impl Into<Vec<u8>>,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            body: body.into(),
            headers: headers.into_iter().collect(),
        }
    }

    /// Returns the event body.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body length in bytes.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Returns all headers in insertion order.
    #[inline]
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Returns the header value for `key`, if present.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Returns true if a header named `key` exists.
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    /// Sets a header, returning the previous value if the key existed.
    pub fn set_header(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.headers.insert(key.into(), value.into())
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("body_len", &self.body.len())
            .field("headers", &self.headers)
            .finish()
    }
}
