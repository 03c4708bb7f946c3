//! Tracepoint layout settings.

use serde::{Deserialize, Serialize};

/// Configuration for a [`TraceManager`](crate::trace::TraceManager).
///
/// Every field has a default, so hosts can deserialize partial settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Marker glyph size in pixels, independent of zoom.
    pub marker_size: f32,
    /// Padding between label border and text in pixels.
    pub label_padding: f32,
    /// Label font size in pixels.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
    /// Average glyph advance as a multiple of the font size.
    pub char_width_factor: f32,
    /// Decimal places shown in labels.
    pub precision: usize,
    /// Flip a label to the opposite corner when it would leave the plot area.
    pub flip_labels_at_edges: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            marker_size: 10.0,
            label_padding: 4.0,
            font_size: 12.0,
            line_height_factor: 1.2,
            char_width_factor: 0.6,
            precision: 2,
            flip_labels_at_edges: false,
        }
    }
}
