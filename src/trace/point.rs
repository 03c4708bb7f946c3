use std::sync::Arc;

use crate::config::TraceConfig;
use crate::geom::Point;
use crate::series::SeriesHandle;
use crate::style::Theme;
use crate::transform::Transform;

use super::TraceId;
use super::corner::CornerPosition;
use super::label::{Label, TextMeasurer, ValueFormatter};
use super::marker::Marker;

/// A marker and its label, bound to the series it was placed on.
///
/// The series is kept as a handle only; resolve it against the registry that
/// issued it before use.
#[derive(Debug, Clone)]
pub struct TrackedPoint {
    id: TraceId,
    marker: Marker,
    label: Label,
    series: SeriesHandle,
    corner: CornerPosition,
}

impl TrackedPoint {
    pub(crate) fn new(
        id: TraceId,
        value: Point,
        series: SeriesHandle,
        formatter: &ValueFormatter,
    ) -> Self {
        let mut label = Label::new();
        label.set_text_from(value, formatter);
        Self {
            id,
            marker: Marker::new(value),
            label,
            series,
            corner: CornerPosition::default(),
        }
    }

    /// Tracepoint identifier.
    pub fn id(&self) -> TraceId {
        self.id
    }

    /// Data value under the marker.
    pub fn value(&self) -> Point {
        self.marker.value()
    }

    /// The marker glyph.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// The value label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Handle of the series the point was placed on.
    pub fn series(&self) -> SeriesHandle {
        self.series
    }

    /// Label corner currently anchored at the marker.
    pub fn corner(&self) -> CornerPosition {
        self.corner
    }

    pub(crate) fn set_value(&mut self, value: Point) {
        self.marker.set_value(value);
    }

    pub(crate) fn set_corner(&mut self, corner: CornerPosition) {
        self.corner = corner;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<Arc<Theme>>) {
        self.marker.set_theme(theme.clone());
        self.label.set_theme(theme);
    }

    pub(crate) fn layout_marker(&mut self, transform: &Transform, config: &TraceConfig) -> bool {
        self.marker.recompute_screen_bounds(transform, config.marker_size)
    }

    /// Re-derive label text from the marker value and place it at the marker centre.
    pub(crate) fn layout_label(
        &mut self,
        formatter: &ValueFormatter,
        measurer: &dyn TextMeasurer,
        config: &TraceConfig,
    ) {
        self.label.set_text_from(self.marker.value(), formatter);
        self.place_label(measurer, config);
    }

    /// Place the label for the current corner without touching its text.
    pub(crate) fn place_label(&mut self, measurer: &dyn TextMeasurer, config: &TraceConfig) {
        self.label
            .recompute_screen_bounds(self.marker.center(), self.corner, measurer, config);
    }
}
