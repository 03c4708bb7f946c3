use std::sync::Arc;

use crate::config::TraceConfig;
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::style::Theme;

use super::corner::CornerPosition;

/// Measures rendered text.
pub trait TextMeasurer {
    /// Width and height of a single line of `text` at font `size`.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Text measurer that assumes a fixed advance per character.
///
/// Good enough for monospace-ish UI fonts and for layout without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    /// Glyph advance as a multiple of the font size.
    pub char_width_factor: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
}

impl EstimatedTextMeasurer {
    /// Create a measurer from the glyph factors of a config.
    pub fn from_config(config: &TraceConfig) -> Self {
        Self {
            char_width_factor: config.char_width_factor,
            line_height_factor: config.line_height_factor,
        }
    }
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self::from_config(&TraceConfig::default())
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let chars = text.chars().count() as f32;
        (
            chars * size * self.char_width_factor,
            size * self.line_height_factor,
        )
    }
}

/// Formatter for label values.
#[derive(Clone)]
pub enum ValueFormatter {
    /// Fixed number of decimal places.
    Fixed {
        /// Decimal places.
        precision: usize,
    },
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl ValueFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Fixed { precision } => format!("{value:.prec$}", prec = *precision),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::Fixed { precision: 2 }
    }
}

impl std::fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed { precision } => write!(f, "ValueFormatter::Fixed({precision})"),
            Self::Custom(_) => write!(f, "ValueFormatter::Custom(..)"),
        }
    }
}

/// Two-line value label.
#[derive(Debug, Clone)]
pub struct Label {
    x_text: String,
    y_text: String,
    rect: ScreenRect,
    padding: f32,
    line_height: f32,
    font_size: f32,
    theme: Option<Arc<Theme>>,
}

impl Label {
    pub(crate) fn new() -> Self {
        Self {
            x_text: String::new(),
            y_text: String::new(),
            rect: ScreenRect::zero(),
            padding: 0.0,
            line_height: 0.0,
            font_size: 0.0,
            theme: None,
        }
    }

    /// Format both text lines from a data value.
    pub fn set_text_from(&mut self, value: Point, formatter: &ValueFormatter) {
        self.x_text = format!("X: {}", formatter.format(value.x));
        self.y_text = format!("Y: {}", formatter.format(value.y));
    }

    /// Place the label so that `corner` coincides with `anchor`.
    ///
    /// The size fits both lines plus the configured padding on every side.
    pub fn recompute_screen_bounds(
        &mut self,
        anchor: ScreenPoint,
        corner: CornerPosition,
        measurer: &dyn TextMeasurer,
        config: &TraceConfig,
    ) {
        let size = self.measure(measurer, config);
        self.rect = corner.place(anchor, size);
    }

    /// Size the label needs for its current text.
    fn measure(&mut self, measurer: &dyn TextMeasurer, config: &TraceConfig) -> (f32, f32) {
        let font_size = config.font_size;
        let min_line = font_size * config.line_height_factor;
        let (x_w, x_h) = measurer.measure(&self.x_text, font_size);
        let (y_w, y_h) = measurer.measure(&self.y_text, font_size);
        self.font_size = font_size;
        self.padding = config.label_padding;
        self.line_height = x_h.max(y_h).max(min_line);
        (
            x_w.max(y_w) + self.padding * 2.0,
            self.line_height * 2.0 + self.padding * 2.0,
        )
    }

    /// The X and Y lines, in drawing order.
    pub fn lines(&self) -> [&str; 2] {
        [&self.x_text, &self.y_text]
    }

    /// Top-left position of a text line inside the last computed rectangle.
    pub fn line_origin(&self, index: usize) -> ScreenPoint {
        ScreenPoint::new(
            self.rect.min.x + self.padding,
            self.rect.min.y + self.padding + index as f32 * self.line_height,
        )
    }

    /// Font size used for the last layout.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Last computed screen rectangle.
    pub fn screen_rect(&self) -> ScreenRect {
        self.rect
    }

    /// Theme used at paint time, if one was applied.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    pub(crate) fn set_theme(&mut self, theme: Option<Arc<Theme>>) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_uses_fixed_precision() {
        let mut label = Label::new();
        label.set_text_from(Point::new(1.0, -2.346), &ValueFormatter::Fixed { precision: 2 });
        assert_eq!(label.lines(), ["X: 1.00", "Y: -2.35"]);

        let custom = ValueFormatter::Custom(Arc::new(|value| format!("{value:e}")));
        label.set_text_from(Point::new(1000.0, 0.5), &custom);
        assert_eq!(label.lines(), ["X: 1e3", "Y: 5e-1"]);
    }

    #[test]
    fn size_fits_widest_line_plus_padding() {
        let config = TraceConfig {
            font_size: 10.0,
            label_padding: 3.0,
            line_height_factor: 1.5,
            char_width_factor: 0.5,
            ..TraceConfig::default()
        };
        let measurer = EstimatedTextMeasurer::from_config(&config);
        let mut label = Label::new();
        label.set_text_from(Point::new(1.0, 100.0), &ValueFormatter::Fixed { precision: 1 });
        label.recompute_screen_bounds(
            ScreenPoint::new(50.0, 50.0),
            CornerPosition::TopLeft,
            &measurer,
            &config,
        );
        let rect = label.screen_rect();
        // "Y: 100.0" is 8 chars at 5 px each.
        assert_eq!(rect.width(), 40.0 + 6.0);
        assert_eq!(rect.height(), 30.0 + 6.0);
        assert_eq!(rect.min, ScreenPoint::new(50.0, 50.0));
        assert_eq!(label.line_origin(1), ScreenPoint::new(53.0, 68.0));
    }

    #[test]
    fn bottom_right_corner_sits_on_anchor() {
        let config = TraceConfig::default();
        let mut label = Label::new();
        label.set_text_from(Point::new(0.0, 0.0), &ValueFormatter::default());
        label.recompute_screen_bounds(
            ScreenPoint::new(80.0, 60.0),
            CornerPosition::BottomRight,
            &EstimatedTextMeasurer::default(),
            &config,
        );
        assert_eq!(label.screen_rect().max, ScreenPoint::new(80.0, 60.0));
    }
}
