//! Date/time re-formatting serializer.

use crate::pattern::{parse_datetime, validate_pattern};
use crate::serializer::{require_key, Serializer};
use sl_error::Result;
use sl_types::Context;

/// Parses the extracted value with one pattern and re-emits it with another.
///
/// Requires `inputpattern` and `outputpattern` configuration keys. Output
/// is always formatted in UTC, so an offset-bearing input pattern yields
/// the equivalent UTC wall time.
#[derive(Debug, Clone)]
pub struct DateTimeFormatSerializer {
    input_pattern: String,
    output_pattern: String,
}

impl DateTimeFormatSerializer {
    /// Builds the serializer from its configuration scope.
    ///
    /// # Errors
    ///
    /// Fails if either pattern is absent, empty, or not a valid strftime
    /// pattern.
    pub fn from_context(context: &Context) -> Result<Self> {
        let input_pattern = require_key(context, "inputpattern")?;
        let output_pattern = require_key(context, "outputpattern")?;
        validate_pattern(&input_pattern)?;
        validate_pattern(&output_pattern)?;
        Ok(Self {
            input_pattern,
            output_pattern,
        })
    }
}

impl Serializer for DateTimeFormatSerializer {
    fn apply(&self, value: &str) -> Result<String> {
        let datetime = parse_datetime(value, &self.input_pattern)?;
        Ok(datetime.format(&self.output_pattern).to_string())
    }

    fn name(&self) -> &str {
        "datetime-format"
    }
}
