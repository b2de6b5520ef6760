//! Epoch-millisecond encoder serializer.

use crate::pattern::{parse_datetime, validate_pattern};
use crate::serializer::{require_key, Serializer};
use sl_error::Result;
use sl_types::Context;

/// Parses the extracted value as a date/time and emits epoch milliseconds.
///
/// Requires a `pattern` configuration key. Input without an explicit offset
/// is interpreted as UTC (see [`crate::pattern`]).
#[derive(Debug, Clone)]
pub struct MillisSerializer {
    pattern: String,
}

impl MillisSerializer {
    /// Builds the serializer from its configuration scope.
    ///
    /// # Errors
    ///
    /// Fails if `pattern` is absent, empty, or not a valid strftime pattern.
    pub fn from_context(context: &Context) -> Result<Self> {
        let pattern = require_key(context, "pattern")?;
        validate_pattern(&pattern)?;
        Ok(Self { pattern })
    }
}

impl Serializer for MillisSerializer {
    fn apply(&self, value: &str) -> Result<String> {
        let datetime = parse_datetime(value, &self.pattern)?;
        Ok(datetime.timestamp_millis().to_string())
    }

    fn name(&self) -> &str {
        "millis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis_context(pattern: &str) -> Context {
        let mut context = Context::new();
        context.put("pattern", pattern);
        context
    }

    #[test]
    fn test_encodes_offset_datetime() {
        let serializer =
            MillisSerializer::from_context(&millis_context("%Y-%m-%dT%H:%M:%S%z")).unwrap();
        assert_eq!(
            serializer.apply("2015-04-23T01:37:09+00:00").unwrap(),
            "1429753029000"
        );
    }

    #[test]
    fn test_rejects_mismatched_input() {
        let serializer =
            MillisSerializer::from_context(&millis_context("%Y-%m-%dT%H:%M:%S%z")).unwrap();
        assert!(serializer.apply("2015-04-23").is_err());
    }

    #[test]
    fn test_requires_pattern() {
        assert!(MillisSerializer::from_context(&Context::new()).is_err());
        assert!(MillisSerializer::from_context(&millis_context("")).is_err());
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        assert!(MillisSerializer::from_context(&millis_context("%Q")).is_err());
    }
}
