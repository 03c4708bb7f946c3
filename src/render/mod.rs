//! Rendering primitives for tracepoints.
//!
//! These types are backend-agnostic. A [`TraceManager`](crate::trace::TraceManager)
//! hands its markers and labels to a [`TraceContainer`]; [`RenderList`] is the
//! stock container that turns them into draw commands for a backend.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::style::Theme;
use crate::trace::{Label, Marker, TraceId};

/// Extra diameter of the outer marker ring.
const MARKER_RING_OUTER_PAD: f32 = 6.0;
/// Extra diameter of the background gap inside the ring.
const MARKER_RING_INNER_PAD: f32 = 3.0;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a filled circle.
    Circle {
        /// Circle centre.
        center: ScreenPoint,
        /// Diameter in pixels.
        diameter: f32,
        /// Fill color.
        color: Color,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text.
    Text {
        /// Top-left text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Receiver of tracepoint visuals.
///
/// Hosts implement this to put markers and labels into their own component
/// tree. The elements are borrowed for the duration of the call only.
pub trait TraceContainer {
    /// Register a marker for painting.
    fn add_marker(&mut self, id: TraceId, marker: &Marker);
    /// Register a label for painting.
    fn add_label(&mut self, id: TraceId, label: &Label);
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop every command, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl TraceContainer for RenderList {
    fn add_marker(&mut self, _id: TraceId, marker: &Marker) {
        let rect = marker.screen_rect();
        if !rect.is_valid() {
            return;
        }
        let fallback = Theme::default();
        let theme = marker.theme().unwrap_or(&fallback);
        let center = rect.center();
        let size = rect.width();
        self.push(RenderCommand::Circle {
            center,
            diameter: size + MARKER_RING_OUTER_PAD,
            color: theme.marker_ring,
        });
        self.push(RenderCommand::Circle {
            center,
            diameter: size + MARKER_RING_INNER_PAD,
            color: theme.background,
        });
        self.push(RenderCommand::Circle {
            center,
            diameter: size,
            color: theme.marker,
        });
    }

    fn add_label(&mut self, _id: TraceId, label: &Label) {
        let rect = label.screen_rect();
        if !rect.is_valid() {
            return;
        }
        let fallback = Theme::default();
        let theme = label.theme().unwrap_or(&fallback);
        self.push(RenderCommand::Rect {
            rect,
            style: RectStyle {
                fill: theme.label_bg,
                stroke: theme.label_border,
                stroke_width: 1.0,
            },
        });
        for (index, line) in label.lines().into_iter().enumerate() {
            self.push(RenderCommand::Text {
                position: label.line_origin(index),
                text: line.to_string(),
                style: TextStyle {
                    color: theme.label_text,
                    size: label.font_size(),
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::series::{Series, SeriesRegistry};
    use crate::trace::TraceManager;
    use crate::transform::GraphViewport;
    use crate::view::{Range, Viewport};

    #[test]
    fn attached_point_emits_marker_and_label_commands() {
        let mut registry = SeriesRegistry::new();
        let series = registry.insert(Series::from_iter_y("s", [0.0, 5.0]));
        let mut manager = TraceManager::new();
        manager.toggle_trace_point(Point::new(1.0, 5.0), series);
        let viewport = GraphViewport::new(
            Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 10.0)),
            ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(200.0, 200.0)),
        );
        manager.refresh_all_bounds(&viewport);

        let mut list = RenderList::new();
        manager.attach_to(&mut list);

        let circles = list
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Circle { .. }))
            .count();
        let texts: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(circles, 3);
        assert_eq!(texts, vec!["X: 1.00", "Y: 5.00"]);
    }

    #[test]
    fn unlaid_out_points_draw_nothing() {
        let mut registry = SeriesRegistry::new();
        let series = registry.insert(Series::from_iter_y("s", [0.0]));
        let mut manager = TraceManager::new();
        manager.toggle_trace_point(Point::new(0.0, 0.0), series);

        let mut list = RenderList::new();
        manager.attach_to(&mut list);
        assert!(list.commands().is_empty());
    }
}
