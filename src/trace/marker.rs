use std::sync::Arc;

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::style::Theme;
use crate::transform::Transform;

/// Marker glyph sitting on a data value.
///
/// Two markers compare equal when their data values are equal; the screen
/// rectangle and theme never take part in comparison.
#[derive(Debug, Clone)]
pub struct Marker {
    value: Point,
    rect: ScreenRect,
    theme: Option<Arc<Theme>>,
}

impl Marker {
    /// Create a marker at a data value with no screen geometry yet.
    pub fn new(value: Point) -> Self {
        Self {
            value,
            rect: ScreenRect::zero(),
            theme: None,
        }
    }

    /// Store a new data value.
    ///
    /// Geometry is left alone until the next bounds recompute.
    pub fn set_value(&mut self, value: Point) {
        self.value = value;
    }

    /// Data value of the marker.
    pub fn value(&self) -> Point {
        self.value
    }

    /// Recompute the screen rectangle centred on the transformed value.
    ///
    /// Returns false and keeps the previous rectangle when the value cannot be
    /// mapped, e.g. a non-positive value on a log axis.
    pub fn recompute_screen_bounds(&mut self, transform: &Transform, size: f32) -> bool {
        let Some(center) = transform.data_to_screen(self.value) else {
            return false;
        };
        self.rect = ScreenRect::from_center_size(center, (size, size));
        true
    }

    /// Last computed screen rectangle.
    pub fn screen_rect(&self) -> ScreenRect {
        self.rect
    }

    /// Centre of the last computed screen rectangle.
    pub fn center(&self) -> ScreenPoint {
        self.rect.center()
    }

    /// Theme used at paint time, if one was applied.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    pub(crate) fn set_theme(&mut self, theme: Option<Arc<Theme>>) {
        self.theme = theme;
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Point> for Marker {
    fn eq(&self, other: &Point) -> bool {
        self.value == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisScale;
    use crate::transform::GraphViewport;
    use crate::view::{Range, Viewport};

    fn transform(size: f32) -> Transform {
        GraphViewport::new(
            Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 10.0)),
            ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(size, size)),
        )
        .transform()
        .expect("valid transform")
    }

    #[test]
    fn equality_ignores_screen_position() {
        let mut a = Marker::new(Point::new(1.0, 2.0));
        let b = Marker::new(Point::new(1.0, 2.0));
        a.recompute_screen_bounds(&transform(100.0), 10.0);
        assert_eq!(a, b);
        assert!(a == Point::new(1.0, 2.0));
        assert!(a != Point::new(1.0, 2.000001));
    }

    #[test]
    fn rectangle_size_is_independent_of_zoom() {
        let mut marker = Marker::new(Point::new(5.0, 5.0));
        marker.recompute_screen_bounds(&transform(100.0), 8.0);
        assert_eq!(marker.center(), ScreenPoint::new(50.0, 50.0));
        assert_eq!(marker.screen_rect().width(), 8.0);
        marker.recompute_screen_bounds(&transform(1000.0), 8.0);
        assert_eq!(marker.center(), ScreenPoint::new(500.0, 500.0));
        assert_eq!(marker.screen_rect().width(), 8.0);
    }

    #[test]
    fn unmappable_value_keeps_previous_rectangle() {
        let mut marker = Marker::new(Point::new(5.0, 5.0));
        marker.recompute_screen_bounds(&transform(100.0), 10.0);
        let before = marker.screen_rect();

        let log_y = GraphViewport::new(
            Viewport::new(Range::new(0.0, 10.0), Range::new(1.0, 100.0)),
            ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0)),
        )
        .with_scales(AxisScale::Linear, AxisScale::Log10)
        .transform()
        .expect("valid transform");
        marker.set_value(Point::new(5.0, -1.0));
        assert!(!marker.recompute_screen_bounds(&log_y, 10.0));
        assert_eq!(marker.screen_rect(), before);
    }

    #[test]
    fn set_value_does_not_move_rectangle() {
        let mut marker = Marker::new(Point::new(5.0, 5.0));
        marker.recompute_screen_bounds(&transform(100.0), 10.0);
        let before = marker.screen_rect();
        marker.set_value(Point::new(1.0, 1.0));
        assert_eq!(marker.screen_rect(), before);
    }
}
