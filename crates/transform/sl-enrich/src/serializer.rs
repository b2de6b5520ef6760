//! Serializer trait for extracted values.

use sl_error::{EnrichError, Result};
use sl_types::Context;

/// Trait for value serializers.
///
/// A serializer converts the text form of an extracted scalar into the
/// final text stored in the destination header. Implementations are
/// configured once at construction and hold no mutable state afterwards,
/// so `apply` is a pure function of its input and is safe to call from
/// multiple threads.
///
/// A serializer signals failure by returning an error rather than a
/// sentinel value; the enricher turns that into an abandoned enrichment
/// for the current event.
pub trait Serializer: Send + Sync {
    /// Converts an extracted value into its stored form.
    fn apply(&self, value: &str) -> Result<String>;

    /// Returns the name of this serializer for logging.
    fn name(&self) -> &str {
        "serializer"
    }
}

impl std::fmt::Debug for dyn Serializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Reads a required, non-empty key from a serializer's configuration scope.
pub(crate) fn require_key(context: &Context, key: &str) -> Result<String> {
    match context.get(key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(EnrichError::MissingKey(key.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_key() {
        let mut context = Context::new();
        context.put("pattern", "%Y");
        context.put("empty", "");

        assert_eq!(require_key(&context, "pattern").unwrap(), "%Y");
        assert!(require_key(&context, "empty").is_err());
        assert!(require_key(&context, "absent").is_err());
    }
}
