//! Flat dotted-key configuration map.

use std::collections::BTreeMap;

/// A flat string-to-string configuration map with dotted-key scoping.
///
/// Configuration for an enrichment stage arrives as a flat mapping such as:
///
/// ```text
/// name = testName
/// jsonpath = $.published
/// serializers = s1
/// serializers.s1.name = s1
/// serializers.s1.type = millis
/// serializers.s1.pattern = %Y-%m-%dT%H:%M:%S%z
/// ```
///
/// [`Context::sub_properties`] extracts the keys under a prefix with the
/// prefix stripped, so `sub_properties("serializers").sub_properties("s1")`
/// yields the `{name, type, pattern}` scope for serializer `s1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    params: BTreeMap<String, String>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` if absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns a new context containing all keys under `prefix.` with the
    /// prefix stripped.
    pub fn sub_properties(&self, prefix: &str) -> Context {
        let scoped = format!("{prefix}.");
        let params = self
            .params
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&scoped)
                    .map(|stripped| (stripped.to_string(), value.clone()))
            })
            .collect();
        Self { params }
    }

    /// Iterates over all key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Context {
    fn from(params: BTreeMap<String, String>) -> Self {
        Self { params }
    }
}

impl FromIterator<(String, String)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
