//! SerializerRegistry - name-to-factory resolution for serializers.

use crate::datetime_format::DateTimeFormatSerializer;
use crate::millis::MillisSerializer;
use crate::millis_format::MillisecondFormatSerializer;
use crate::passthrough::PassThroughSerializer;
use crate::serializer::Serializer;
use hashbrown::HashMap;
use sl_error::{EnrichError, Result};
use sl_types::Context;

/// Reserved type identifier that always resolves to pass-through.
pub const DEFAULT_SERIALIZER: &str = "DEFAULT";

type SerializerFactory = Box<dyn Fn(&Context) -> Result<Box<dyn Serializer>> + Send + Sync>;

/// Registry of serializer factories, keyed by type identifier.
///
/// Configuration selects a serializer by exact identifier; the factory is
/// invoked once at build time with the serializer's configuration scope.
/// [`DEFAULT_SERIALIZER`] is reserved and resolves to pass-through without
/// consulting the registry, so it cannot be shadowed.
///
/// The default registry carries the built-in variants:
/// - `millis` - [`MillisSerializer`]
/// - `millisecond-format` - [`MillisecondFormatSerializer`]
/// - `datetime-format` - [`DateTimeFormatSerializer`]
///
/// Custom serializers are added through [`SerializerRegistry::register`]
/// before any enricher is built.
pub struct SerializerRegistry {
    factories: HashMap<String, SerializerFactory>,
}

impl SerializerRegistry {
    /// Creates a registry with the built-in serializers registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("millis", |context| {
            Ok(Box::new(MillisSerializer::from_context(context)?) as Box<dyn Serializer>)
        });
        registry.register("millisecond-format", |context| {
            Ok(Box::new(MillisecondFormatSerializer::from_context(context)?)
                as Box<dyn Serializer>)
        });
        registry.register("datetime-format", |context| {
            Ok(Box::new(DateTimeFormatSerializer::from_context(context)?) as Box<dyn Serializer>)
        });
        registry
    }

    /// Creates a registry with no factories registered.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a type identifier.
    ///
    /// Registering an identifier twice replaces the earlier factory.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn(&Context) -> Result<Box<dyn Serializer>> + Send + Sync + 'static,
    {
        self.factories.insert(identifier.into(), Box::new(factory));
    }

    /// Resolves and constructs a serializer.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown or the factory fails
    /// (missing configuration key, invalid pattern).
    pub fn resolve(&self, identifier: &str, context: &Context) -> Result<Box<dyn Serializer>> {
        if identifier == DEFAULT_SERIALIZER {
            return Ok(Box::new(PassThroughSerializer::new()));
        }
        let factory = self
            .factories
            .get(identifier)
            .ok_or_else(|| EnrichError::UnknownSerializer(identifier.to_string()))?;
        factory(context)
    }

    /// Returns true if an identifier is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut identifiers: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        f.debug_struct("SerializerRegistry")
            .field("identifiers", &identifiers)
            .finish_non_exhaustive()
    }
}
