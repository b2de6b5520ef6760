//! Core types for Sluice.
//!
//! This crate provides the foundational types used throughout the system:
//! - [`Event`] - Pipeline event: opaque byte body plus mutable string headers
//! - [`Context`] - Flat dotted-key configuration map with scoped sub-properties

pub mod context;
pub mod event;

pub use context::*;
pub use event::*;
