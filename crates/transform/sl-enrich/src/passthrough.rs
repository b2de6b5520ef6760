//! Pass-through serializer.

use crate::serializer::Serializer;
use sl_error::Result;

/// The default serializer: returns the extracted value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughSerializer;

impl PassThroughSerializer {
    /// Creates a new pass-through serializer.
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for PassThroughSerializer {
    fn apply(&self, value: &str) -> Result<String> {
        Ok(value.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
