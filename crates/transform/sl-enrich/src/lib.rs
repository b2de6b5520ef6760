//! JSON header enrichment for Sluice pipelines.
//!
//! This crate provides [`JsonEnricher`], an [`Interceptor`] that extracts a
//! single scalar value from an event's JSON body and writes it into a named
//! header, optionally reformatting it through a pluggable serializer.
//!
//! # Features
//!
//! - **Path extraction**: A [`JsonPath`] expression bound once at build time
//! - **Pluggable serializers**: Pass-through, epoch-millisecond encoding and
//!   decoding, and date/time reformatting, selected by configuration
//! - **Registry-based extension**: Custom serializers registered by name in
//!   a [`SerializerRegistry`]
//! - **Failure containment**: An event that cannot be enriched is passed
//!   through unmodified; the body is never altered and no event is dropped
//!
//! # Example
//!
//! ```rust,ignore
//! use sl_enrich::JsonEnricher;
//! use sl_traits::Interceptor;
//! use sl_types::{Context, Event};
//!
//! let mut context = Context::new();
//! context.put("name", "published");
//! context.put("jsonpath", "$.published");
//!
//! let mut builder = JsonEnricher::builder();
//! builder.configure(&context)?;
//! let enricher = builder.build()?;
//!
//! let event = enricher.intercept(Event::new(br#"{"published":"x"}"#.to_vec()));
//! assert_eq!(event.header("published"), Some("x"));
//! ```

mod config;
mod datetime_format;
mod enricher;
mod millis;
mod millis_format;
mod passthrough;
mod path;
mod pattern;
mod registry;
mod serializer;

pub use config::{EnrichConfig, SerializerConfig};
pub use datetime_format::DateTimeFormatSerializer;
pub use enricher::{AbandonReason, JsonEnricher, JsonEnricherBuilder};
pub use millis::MillisSerializer;
pub use millis_format::MillisecondFormatSerializer;
pub use passthrough::PassThroughSerializer;
pub use path::{JsonPath, PathStep};
pub use registry::{SerializerRegistry, DEFAULT_SERIALIZER};
pub use serializer::Serializer;

// Re-export the trait so callers can drive the enricher without an extra
// dependency on sl-traits.
pub use sl_traits::Interceptor;
