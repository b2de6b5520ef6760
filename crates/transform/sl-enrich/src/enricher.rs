//! JsonEnricher - the enrichment interceptor and its builder.

use crate::config::EnrichConfig;
use crate::passthrough::PassThroughSerializer;
use crate::path::JsonPath;
use crate::registry::SerializerRegistry;
use crate::serializer::Serializer;
use serde_json::Value;
use sl_error::{Result, SlError};
use sl_traits::Interceptor;
use sl_types::{Context, Event};
use tracing::{debug, error, trace, warn};

/// Why an event's enrichment was abandoned.
///
/// Abandonment is not an error: the event passes through unmodified and the
/// reason is recorded in the log only. From the pipeline's perspective an
/// abandoned event is indistinguishable from one with no enrichment
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbandonReason {
    /// The body did not parse as JSON.
    InvalidJson,
    /// The path expression resolved to no node.
    PathNotFound,
    /// The resolved node was an object, array, or null.
    NonScalar,
    /// The serializer rejected the extracted value.
    SerializeFailed(String),
}

impl std::fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "body is not valid JSON"),
            Self::PathNotFound => write!(f, "path not found"),
            Self::NonScalar => write!(f, "resolved value is not a scalar"),
            Self::SerializeFailed(detail) => write!(f, "serializer rejected value: {detail}"),
        }
    }
}

/// Interceptor that extracts one scalar from the event body and writes it
/// into a named header.
///
/// All state is bound at build time and immutable thereafter, so one
/// instance is safe for concurrent use. The event body is never modified;
/// on any per-event failure the event passes through untouched.
pub struct JsonEnricher {
    /// Destination header name.
    header_name: String,

    /// Path expression evaluated against the body.
    path: JsonPath,

    /// Configured value serializer.
    serializer: Box<dyn Serializer>,
}

impl std::fmt::Debug for JsonEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEnricher")
            .field("header_name", &self.header_name)
            .field("path", &self.path.expression())
            .field("serializer", &self.serializer.name())
            .finish()
    }
}

impl JsonEnricher {
    /// Returns a builder for constructing an enricher from configuration.
    pub fn builder() -> JsonEnricherBuilder {
        JsonEnricherBuilder::new()
    }

    /// Returns the destination header name.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Returns the configured path expression.
    pub fn path_expression(&self) -> &str {
        self.path.expression()
    }

    /// Runs extraction and serialization for one event body.
    ///
    /// This is the single decision point of the stage: the result either
    /// carries the header text to store or the reason enrichment was
    /// abandoned.
    fn extract(&self, body: &[u8]) -> std::result::Result<String, AbandonReason> {
        let document: Value =
            serde_json::from_slice(body).map_err(|_| AbandonReason::InvalidJson)?;
        let node = self
            .path
            .evaluate(&document)
            .ok_or(AbandonReason::PathNotFound)?;
        let text = scalar_text(node).ok_or(AbandonReason::NonScalar)?;
        self.serializer
            .apply(&text)
            .map_err(|e| AbandonReason::SerializeFailed(e.to_string()))
    }
}

/// Returns the header text form of a scalar node, or `None` for objects,
/// arrays, and null.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

impl Interceptor for JsonEnricher {
    fn intercept(&self, mut event: Event) -> Event {
        match self.extract(event.body()) {
            Ok(value) => {
                trace!(header = %self.header_name, "Enriched event");
                event.set_header(self.header_name.clone(), value);
            }
            Err(reason) => {
                warn!(
                    path = %self.path.expression(),
                    reason = %reason,
                    "Skipping event enrichment"
                );
            }
        }
        event
    }

    fn name(&self) -> &str {
        "json-enricher"
    }
}

/// Builder for [`JsonEnricher`].
///
/// The builder is the `unconfigured` state of the stage: [`configure`]
/// parses and validates the configuration surface, and [`build`] resolves
/// the path and serializer into an immutable, ready enricher. Every
/// configuration problem surfaces here, before the first event.
///
/// [`configure`]: JsonEnricherBuilder::configure
/// [`build`]: JsonEnricherBuilder::build
pub struct JsonEnricherBuilder {
    config: Option<EnrichConfig>,
    registry: SerializerRegistry,
}

impl JsonEnricherBuilder {
    /// Creates a builder with the default serializer registry.
    pub fn new() -> Self {
        Self {
            config: None,
            registry: SerializerRegistry::new(),
        }
    }

    /// Replaces the serializer registry, e.g. to add custom serializers.
    pub fn with_registry(mut self, registry: SerializerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Supplies an already-parsed configuration.
    pub fn with_config(mut self, config: EnrichConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Parses the flat configuration surface.
    ///
    /// # Errors
    ///
    /// Returns an error if required keys are absent or empty; the builder
    /// stays unconfigured.
    pub fn configure(&mut self, context: &Context) -> Result<()> {
        self.config = Some(EnrichConfig::from_context(context)?);
        Ok(())
    }

    /// Builds the enricher.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder was never configured, the header
    /// name or path expression is empty or malformed, or the serializer
    /// cannot be resolved and constructed.
    pub fn build(self) -> Result<JsonEnricher> {
        let config = self
            .config
            .ok_or_else(|| SlError::Config("Enricher was not configured".to_string()))?;

        if config.name.is_empty() {
            return Err(SlError::Config("Header name was misconfigured".to_string()));
        }
        if config.jsonpath.is_empty() {
            return Err(SlError::Config(
                "Header JSONPath was misconfigured".to_string(),
            ));
        }

        let path = JsonPath::parse(&config.jsonpath)?;

        let mut serializers = config.serializers;
        if serializers.len() > 1 {
            warn!(
                supplied = serializers.len(),
                "Only one serializer is supported; ignoring the rest"
            );
            serializers.truncate(1);
        }

        let serializer = match serializers.into_iter().next() {
            None => Box::new(PassThroughSerializer::new()) as Box<dyn Serializer>,
            Some(serializer_config) => {
                if serializer_config.name.is_empty() {
                    return Err(SlError::Config(
                        "Serializer name cannot be empty".to_string(),
                    ));
                }
                let options = serializer_config.options_context();
                self.registry
                    .resolve(&serializer_config.serializer_type, &options)
                    .map_err(|e| {
                        error!(
                            serializer_type = %serializer_config.serializer_type,
                            error = %e,
                            "Could not construct event serializer"
                        );
                        e
                    })?
            }
        };

        debug!(
            header = %config.name,
            path = %config.jsonpath,
            serializer = %serializer.name(),
            "Built JSON enricher"
        );

        Ok(JsonEnricher {
            header_name: config.name,
            path,
            serializer,
        })
    }
}

impl Default for JsonEnricherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
