//! Coordinate transforms between data and screen space.

use crate::axis::AxisScale;
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::{Range, Viewport};

/// Direction in which growing Y values move on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YOrientation {
    /// Larger values are drawn higher up (conventional plots).
    #[default]
    Up,
    /// Larger values are drawn further down (screen-like axes).
    Down,
}

/// Snapshot of a plot's pixel bounds and value ranges.
///
/// Hosts build a fresh value whenever the plot is resized or rescaled and
/// hand it to the trace manager. It is never stored across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphViewport {
    /// Plot data area in pixels.
    pub screen: ScreenRect,
    /// Visible value ranges.
    pub viewport: Viewport,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Y axis scale.
    pub y_scale: AxisScale,
    /// Screen direction of the Y axis.
    pub y_orientation: YOrientation,
}

impl GraphViewport {
    /// Create a linear viewport with Y growing upward.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Self {
        Self {
            screen,
            viewport,
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            y_orientation: YOrientation::Up,
        }
    }

    /// Set the axis scales.
    pub fn with_scales(mut self, x_scale: AxisScale, y_scale: AxisScale) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Set the Y orientation.
    pub fn with_y_orientation(mut self, orientation: YOrientation) -> Self {
        self.y_orientation = orientation;
        self
    }

    /// Build the transform for this snapshot.
    ///
    /// Returns `None` for zero-sized pixel bounds or value ranges that the
    /// scales cannot map to a positive span.
    pub fn transform(&self) -> Option<Transform> {
        Transform::new(
            self.viewport,
            self.screen,
            self.x_scale,
            self.y_scale,
            self.y_orientation,
        )
    }
}

/// Transform from data coordinates into screen coordinates.
#[derive(Debug, Clone)]
pub struct Transform {
    screen: ScreenRect,
    x_scale: AxisScale,
    y_scale: AxisScale,
    x_axis: Range,
    y_axis: Range,
    y_orientation: YOrientation,
}

impl Transform {
    /// Create a transform for the given viewport and screen rectangle.
    pub fn new(
        viewport: Viewport,
        screen: ScreenRect,
        x_scale: AxisScale,
        y_scale: AxisScale,
        y_orientation: YOrientation,
    ) -> Option<Self> {
        if !screen.is_valid() {
            return None;
        }
        let x_axis = x_scale.map_range(viewport.x)?;
        let y_axis = y_scale.map_range(viewport.y)?;
        if !x_axis.is_valid() || !y_axis.is_valid() {
            return None;
        }
        Some(Self {
            screen,
            x_scale,
            y_scale,
            x_axis,
            y_axis,
            y_orientation,
        })
    }

    /// Access the screen rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> Option<ScreenPoint> {
        let x = self.x_scale.map_value(point.x)?;
        let y = self.y_scale.map_value(point.y)?;
        let x_norm = (x - self.x_axis.min) / self.x_axis.span();
        let y_norm = (y - self.y_axis.min) / self.y_axis.span();
        let sx = self.screen.min.x as f64 + x_norm * self.screen.width() as f64;
        let sy = match self.y_orientation {
            YOrientation::Up => self.screen.max.y as f64 - y_norm * self.screen.height() as f64,
            YOrientation::Down => self.screen.min.y as f64 + y_norm * self.screen.height() as f64,
        };
        Some(ScreenPoint::new(sx as f32, sy as f32))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<Point> {
        let x_norm = (point.x as f64 - self.screen.min.x as f64) / self.screen.width() as f64;
        let y_norm = match self.y_orientation {
            YOrientation::Up => {
                (self.screen.max.y as f64 - point.y as f64) / self.screen.height() as f64
            }
            YOrientation::Down => {
                (point.y as f64 - self.screen.min.y as f64) / self.screen.height() as f64
            }
        };
        let x_axis = self.x_axis.min + x_norm * self.x_axis.span();
        let y_axis = self.y_axis.min + y_norm * self.y_axis.span();
        let x = self.x_scale.invert_value(x_axis)?;
        let y = self.y_scale.invert_value(y_axis)?;
        Some(Point::new(x, y))
    }
}
