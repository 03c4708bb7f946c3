//! Geometric primitives used by tracepoints.
//!
//! [`Point`] lives in data space. [`ScreenPoint`] and [`ScreenRect`] are pixel
//! coordinates with Y growing downward.

/// A point in data space.
///
/// Use this when providing explicit X/Y values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(origin: ScreenPoint, size: (f32, f32)) -> Self {
        Self::new(
            origin,
            ScreenPoint::new(origin.x + size.0, origin.y + size.1),
        )
    }

    /// Create a rectangle of the given size centred on a point.
    pub fn from_center_size(center: ScreenPoint, size: (f32, f32)) -> Self {
        let half_w = size.0 * 0.5;
        let half_h = size.1 * 0.5;
        Self::new(
            ScreenPoint::new(center.x - half_w, center.y - half_h),
            ScreenPoint::new(center.x + half_w, center.y + half_h),
        )
    }

    /// An empty rectangle at the origin.
    pub fn zero() -> Self {
        Self::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 0.0))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies inside the rectangle (edges included).
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_keeps_center() {
        let rect = ScreenRect::from_center_size(ScreenPoint::new(50.0, 20.0), (10.0, 4.0));
        assert_eq!(rect.center(), ScreenPoint::new(50.0, 20.0));
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 4.0);
    }

    #[test]
    fn contains_includes_edges() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), (10.0, 10.0));
        assert!(rect.contains(ScreenPoint::new(10.0, 0.0)));
        assert!(!rect.contains(ScreenPoint::new(10.5, 5.0)));
        assert!(!ScreenRect::zero().is_valid());
    }
}
