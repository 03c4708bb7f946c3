//! Visual theme for tracepoint markers and labels.

use crate::render::Color;

/// Colors used when painting tracepoints.
///
/// The trace manager only stores and hands out the theme; it is read at paint
/// time by [`RenderList`](crate::render::RenderList).
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Plot background, used for the gap between marker ring and dot.
    pub background: Color,
    /// Marker dot fill.
    pub marker: Color,
    /// Ring drawn around the marker dot.
    pub marker_ring: Color,
    /// Label background fill.
    pub label_bg: Color,
    /// Label border.
    pub label_border: Color,
    /// Label text.
    pub label_text: Color,
}

impl Theme {
    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            marker: Color::new(0.85, 0.25, 0.2, 1.0),
            marker_ring: Color::new(0.2, 0.2, 0.2, 1.0),
            label_bg: Color::new(1.0, 1.0, 1.0, 0.92),
            label_border: Color::new(0.6, 0.6, 0.6, 1.0),
            label_text: Color::BLACK,
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.08, 0.1, 1.0),
            marker: Color::new(0.95, 0.55, 0.25, 1.0),
            marker_ring: Color::new(0.85, 0.85, 0.85, 1.0),
            label_bg: Color::new(0.12, 0.12, 0.14, 0.92),
            label_border: Color::new(0.4, 0.4, 0.45, 1.0),
            label_text: Color::new(0.92, 0.92, 0.92, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
