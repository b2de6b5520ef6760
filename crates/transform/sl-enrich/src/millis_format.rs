//! Epoch-millisecond decoder serializer.

use crate::pattern::{format_millis, validate_pattern};
use crate::serializer::{require_key, Serializer};
use sl_error::{EnrichError, Result};
use sl_types::Context;

/// Parses the extracted value as epoch milliseconds and formats it as a
/// date/time.
///
/// Requires an `outputpattern` configuration key. Output is always
/// formatted in UTC.
#[derive(Debug, Clone)]
pub struct MillisecondFormatSerializer {
    output_pattern: String,
}

impl MillisecondFormatSerializer {
    /// Builds the serializer from its configuration scope.
    ///
    /// # Errors
    ///
    /// Fails if `outputpattern` is absent, empty, or not a valid strftime
    /// pattern.
    pub fn from_context(context: &Context) -> Result<Self> {
        let output_pattern = require_key(context, "outputpattern")?;
        validate_pattern(&output_pattern)?;
        Ok(Self { output_pattern })
    }
}

impl Serializer for MillisecondFormatSerializer {
    fn apply(&self, value: &str) -> Result<String> {
        let millis: i64 = value.parse().map_err(|_| {
            EnrichError::Serialize(format!("'{value}' is not a valid millisecond timestamp"))
        })?;
        format_millis(millis, &self.output_pattern)
    }

    fn name(&self) -> &str {
        "millisecond-format"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_context(pattern: &str) -> Context {
        let mut context = Context::new();
        context.put("outputpattern", pattern);
        context
    }

    #[test]
    fn test_decodes_millis() {
        let serializer =
            MillisecondFormatSerializer::from_context(&format_context("%Y-%m-%d %H:%M:%S"))
                .unwrap();
        assert_eq!(
            serializer.apply("1429753029000").unwrap(),
            "2015-04-23 01:37:09"
        );
    }

    #[test]
    fn test_rejects_non_integer_input() {
        let serializer =
            MillisecondFormatSerializer::from_context(&format_context("%Y-%m-%d")).unwrap();
        assert!(serializer.apply("not-a-number").is_err());
        assert!(serializer.apply("14297.5").is_err());
        assert!(serializer.apply("").is_err());
    }

    #[test]
    fn test_requires_outputpattern() {
        assert!(MillisecondFormatSerializer::from_context(&Context::new()).is_err());
        assert!(MillisecondFormatSerializer::from_context(&format_context("")).is_err());
    }
}
