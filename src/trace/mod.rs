//! Tracepoints: markers placed on data series with floating value labels.
//!
//! A [`TrackedPoint`] pairs one [`Marker`] with one [`Label`] and remembers the
//! series it was placed on. [`TraceManager`] owns the collection and exposes
//! the operations a plot widget calls from its input and resize handlers.

mod corner;
mod label;
mod manager;
mod marker;
mod point;

use std::sync::atomic::{AtomicU64, Ordering};

pub use corner::CornerPosition;
pub use label::{EstimatedTextMeasurer, Label, TextMeasurer, ValueFormatter};
pub use manager::{Toggle, TraceManager};
pub use marker::Marker;
pub use point::TrackedPoint;

static TRACE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a tracepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceId(u64);

impl TraceId {
    fn next() -> Self {
        Self(TRACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// One visual element of a tracepoint, as seen by hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceElement {
    /// The marker glyph.
    Marker(TraceId),
    /// The value label.
    Label(TraceId),
}

impl TraceElement {
    /// The tracepoint this element belongs to.
    pub fn trace_id(self) -> TraceId {
        match self {
            Self::Marker(id) | Self::Label(id) => id,
        }
    }
}
