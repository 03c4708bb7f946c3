//! GPUI integration for gpui_tracepoint.
//!
//! Markers and labels are collected into a [`RenderList`](crate::render::RenderList)
//! and painted with GPUI quads and shaped text. Input handling stays with the
//! host view, which forwards clicks, drags and resizes to the
//! [`TraceManager`](crate::trace::TraceManager).

mod paint;

pub use paint::{paint_render_list, paint_traces};
