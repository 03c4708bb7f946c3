use crate::geom::{ScreenPoint, ScreenRect};

/// The label corner that touches the marker centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerPosition {
    /// Label extends right and down from the marker.
    #[default]
    TopLeft,
    /// Label extends left and down from the marker.
    TopRight,
    /// Label extends right and up from the marker.
    BottomLeft,
    /// Label extends left and up from the marker.
    BottomRight,
}

impl CornerPosition {
    /// Choose the corner that puts the label on the cursor's side of the marker.
    ///
    /// A cursor exactly on a centre axis counts as right of / below the
    /// marker, so a cursor on the centre itself yields [`Self::TopLeft`].
    pub fn from_cursor(center: ScreenPoint, cursor: ScreenPoint) -> Self {
        let right = cursor.x >= center.x;
        let below = cursor.y >= center.y;
        match (right, below) {
            (true, true) => Self::TopLeft,
            (false, true) => Self::TopRight,
            (true, false) => Self::BottomLeft,
            (false, false) => Self::BottomRight,
        }
    }

    /// Rectangle of `size` whose named corner is exactly `anchor`.
    pub fn place(self, anchor: ScreenPoint, size: (f32, f32)) -> ScreenRect {
        let (w, h) = size;
        let (min_x, max_x) = match self {
            Self::TopLeft | Self::BottomLeft => (anchor.x, anchor.x + w),
            Self::TopRight | Self::BottomRight => (anchor.x - w, anchor.x),
        };
        let (min_y, max_y) = match self {
            Self::TopLeft | Self::TopRight => (anchor.y, anchor.y + h),
            Self::BottomLeft | Self::BottomRight => (anchor.y - h, anchor.y),
        };
        ScreenRect::new(ScreenPoint::new(min_x, min_y), ScreenPoint::new(max_x, max_y))
    }

    /// Mirror left and right.
    pub fn flipped_horizontal(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
        }
    }

    /// Mirror top and bottom.
    pub fn flipped_vertical(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
        }
    }

    /// Corner that keeps a label of `size` inside `bounds` where possible.
    ///
    /// Only the overflowing axes are mirrored; if the mirrored side overflows
    /// too, the original side is kept for that axis.
    pub(crate) fn fitted(self, anchor: ScreenPoint, size: (f32, f32), bounds: ScreenRect) -> Self {
        let mut corner = self;
        let rect = corner.place(anchor, size);
        if rect.min.x < bounds.min.x || rect.max.x > bounds.max.x {
            let flipped = corner.flipped_horizontal().place(anchor, size);
            if flipped.min.x >= bounds.min.x && flipped.max.x <= bounds.max.x {
                corner = corner.flipped_horizontal();
            }
        }
        if rect.min.y < bounds.min.y || rect.max.y > bounds.max.y {
            let flipped = corner.flipped_vertical().place(anchor, size);
            if flipped.min.y >= bounds.min.y && flipped.max.y <= bounds.max.y {
                corner = corner.flipped_vertical();
            }
        }
        corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_quadrants_map_to_corners() {
        let center = ScreenPoint::new(100.0, 100.0);
        let at = |x, y| CornerPosition::from_cursor(center, ScreenPoint::new(x, y));
        assert_eq!(at(50.0, 50.0), CornerPosition::BottomRight);
        assert_eq!(at(150.0, 50.0), CornerPosition::BottomLeft);
        assert_eq!(at(50.0, 150.0), CornerPosition::TopRight);
        assert_eq!(at(150.0, 150.0), CornerPosition::TopLeft);
    }

    #[test]
    fn cursor_on_axes_favours_right_and_below() {
        let center = ScreenPoint::new(10.0, 10.0);
        assert_eq!(CornerPosition::from_cursor(center, center), CornerPosition::TopLeft);
        assert_eq!(
            CornerPosition::from_cursor(center, ScreenPoint::new(10.0, 0.0)),
            CornerPosition::BottomLeft
        );
        assert_eq!(
            CornerPosition::from_cursor(center, ScreenPoint::new(0.0, 10.0)),
            CornerPosition::TopRight
        );
    }

    #[test]
    fn named_corner_touches_anchor() {
        let anchor = ScreenPoint::new(50.0, 50.0);
        let size = (20.0, 10.0);
        let rect = CornerPosition::BottomRight.place(anchor, size);
        assert_eq!(rect.max, anchor);
        let rect = CornerPosition::TopRight.place(anchor, size);
        assert_eq!(ScreenPoint::new(rect.max.x, rect.min.y), anchor);
        let rect = CornerPosition::BottomLeft.place(anchor, size);
        assert_eq!(ScreenPoint::new(rect.min.x, rect.max.y), anchor);
    }

    #[test]
    fn fitted_mirrors_only_overflowing_axis() {
        let bounds = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0));
        let corner = CornerPosition::TopLeft.fitted(ScreenPoint::new(95.0, 20.0), (30.0, 10.0), bounds);
        assert_eq!(corner, CornerPosition::TopRight);
        let corner = CornerPosition::TopLeft.fitted(ScreenPoint::new(95.0, 95.0), (30.0, 10.0), bounds);
        assert_eq!(corner, CornerPosition::BottomRight);
        let corner = CornerPosition::TopLeft.fitted(ScreenPoint::new(50.0, 50.0), (30.0, 10.0), bounds);
        assert_eq!(corner, CornerPosition::TopLeft);
    }
}
