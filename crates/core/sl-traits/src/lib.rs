//! Core traits for Sluice.
//!
//! This crate defines the main abstraction for the pipeline:
//! - [`Interceptor`] - Trait for per-event enrichment stages
//! - [`InterceptorChain`] - Sequential composition of interceptors
//! - [`PassthroughInterceptor`] - Identity stage, useful as a placeholder

pub mod interceptor;

pub use interceptor::*;
