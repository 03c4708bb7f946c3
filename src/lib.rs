//! gpui_tracepoint adds interactive tracepoints to 2D plots.
//!
//! A tracepoint is a marker sitting on a sampled value of a data series plus a
//! floating two-line label with the X and Y values. The host plot forwards
//! clicks, drags and resizes to a [`TraceManager`], which keeps marker and
//! label geometry in sync with the current [`GraphViewport`].

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod datasource;
pub mod error;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod render;
pub mod series;
pub mod style;
pub mod trace;
pub mod transform;
pub mod view;

pub use axis::AxisScale;
pub use config::TraceConfig;
pub use datasource::{DataError, SampledData, XMode};
pub use error::TraceError;
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use render::{Color, RectStyle, RenderCommand, RenderList, TextStyle, TraceContainer};
pub use series::{DataSeries, Series, SeriesHandle, SeriesRegistry, SnapMode};
pub use style::Theme;
pub use trace::{
    CornerPosition, EstimatedTextMeasurer, Label, Marker, TextMeasurer, Toggle, TraceElement,
    TraceId, TraceManager, TrackedPoint, ValueFormatter,
};
pub use transform::{GraphViewport, Transform, YOrientation};
pub use view::{Range, Viewport};
