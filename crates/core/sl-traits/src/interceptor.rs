//! Interceptor trait for per-event processing.

use sl_types::Event;

/// Trait for per-event enrichment stages.
///
/// Interceptors receive an event, may add or overwrite header entries, and
/// always hand the event back. An interceptor never fails at call time and
/// never drops an event: a stage that cannot enrich a particular event
/// returns it unmodified. Anything that can go wrong must instead fail when
/// the interceptor is constructed, before the pipeline starts.
///
/// # Thread Safety
///
/// Interceptors must be `Send + Sync` as the pipeline may invoke one
/// instance from multiple threads. Implementations keep all state immutable
/// after construction; the only mutation is of the caller-owned event.
pub trait Interceptor: Send + Sync {
    /// Processes a single event.
    ///
    /// The returned event carries the same body bytes as the input, with at
    /// most header entries added or overwritten.
    fn intercept(&self, event: Event) -> Event;

    /// Processes a batch of events independently, in input order.
    ///
    /// The output has the same length and ordering as the input; a failure
    /// to enrich one event never affects the others.
    fn intercept_batch(&self, events: Vec<Event>) -> Vec<Event> {
        events.into_iter().map(|event| self.intercept(event)).collect()
    }

    /// Returns the name of this interceptor for logging.
    fn name(&self) -> &str {
        "interceptor"
    }
}

/// A chain of interceptors applied in sequence.
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
    name: String,
}

impl InterceptorChain {
    /// Creates a new empty chain.
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
            name: "chain".to_string(),
        }
    }

    /// Adds an interceptor to the chain.
    pub fn push(mut self, interceptor: Box<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Sets the name of this chain.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns true if the chain has no interceptors.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Returns the number of interceptors in the chain.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for InterceptorChain {
    fn intercept(&self, mut event: Event) -> Event {
        for interceptor in &self.interceptors {
            event = interceptor.intercept(event);
        }
        event
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An identity interceptor that passes events through unchanged.
///
/// Useful as a default or placeholder.
pub struct PassthroughInterceptor;

impl Interceptor for PassthroughInterceptor {
    fn intercept(&self, event: Event) -> Event {
        event
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
