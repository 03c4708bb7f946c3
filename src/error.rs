//! Error types for tracepoint operations.

use thiserror::Error;

use crate::series::SeriesHandle;
use crate::trace::TraceId;

/// Errors returned by [`TraceManager`](crate::trace::TraceManager).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TraceError {
    /// The id does not name a tracked point.
    #[error("no tracepoint with id {0:?}")]
    UnknownTrace(TraceId),

    /// The point's series was removed from its registry.
    #[error("series {0:?} is no longer registered")]
    StaleSeries(SeriesHandle),

    /// The viewport has zero-sized pixel bounds or an unusable value range.
    #[error("viewport has no usable pixel bounds or value range")]
    DegenerateViewport,

    /// A drag target has no screen position on the current axes.
    #[error("({x}, {y}) cannot be placed on the current axes")]
    Unmappable { x: f64, y: f64 },

    /// Another tracepoint already holds the target value.
    #[error("another tracepoint already sits at ({x}, {y})")]
    Occupied { x: f64, y: f64 },
}
