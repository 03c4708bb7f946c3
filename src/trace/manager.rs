use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::geom::{Point, ScreenPoint};
use crate::render::TraceContainer;
use crate::series::{DataSeries, SeriesHandle, SeriesRegistry};
use crate::style::Theme;
use crate::transform::GraphViewport;

use super::corner::CornerPosition;
use super::label::{EstimatedTextMeasurer, TextMeasurer, ValueFormatter};
use super::point::TrackedPoint;
use super::{TraceElement, TraceId};

/// Outcome of [`TraceManager::toggle_trace_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A new tracepoint was created.
    Added(TraceId),
    /// The tracepoint at that value was removed.
    Removed(TraceId),
    /// The value was not finite; nothing changed.
    Rejected,
}

/// Owns the tracepoints of one plot.
///
/// All geometry is recomputed on request only: the host calls
/// [`refresh_all_bounds`](Self::refresh_all_bounds) after every resize or
/// rescale with a fresh [`GraphViewport`].
pub struct TraceManager {
    points: Vec<TrackedPoint>,
    config: TraceConfig,
    formatter: ValueFormatter,
    measurer: Box<dyn TextMeasurer>,
    theme: Option<Arc<Theme>>,
}

impl TraceManager {
    /// Create a manager with default configuration.
    pub fn new() -> Self {
        Self::with_config(TraceConfig::default())
    }

    /// Create a manager with custom configuration.
    pub fn with_config(config: TraceConfig) -> Self {
        Self {
            points: Vec::new(),
            formatter: ValueFormatter::Fixed {
                precision: config.precision,
            },
            measurer: Box::new(EstimatedTextMeasurer::from_config(&config)),
            config,
            theme: None,
        }
    }

    /// Replace the label value formatter.
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replace the text measurer used to size labels.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Access the configuration.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Add a tracepoint at `value`, or remove the one already there.
    ///
    /// New points get label text immediately; their screen geometry is set by
    /// the next [`refresh_all_bounds`](Self::refresh_all_bounds).
    pub fn toggle_trace_point(&mut self, value: Point, series: SeriesHandle) -> Toggle {
        if !value.x.is_finite() || !value.y.is_finite() {
            debug!(x = value.x, y = value.y, "ignoring non-finite tracepoint value");
            return Toggle::Rejected;
        }
        if let Some(index) = self.points.iter().position(|point| *point.marker() == value) {
            let removed = self.points.swap_remove(index);
            debug!(id = ?removed.id(), x = value.x, y = value.y, "removed tracepoint");
            return Toggle::Removed(removed.id());
        }

        let id = TraceId::next();
        let mut point = TrackedPoint::new(id, value, series, &self.formatter);
        point.set_theme(self.theme.clone());
        self.points.push(point);
        debug!(?id, ?series, x = value.x, y = value.y, "added tracepoint");
        Toggle::Added(id)
    }

    /// Recompute marker and label geometry for every tracepoint.
    ///
    /// Returns false and leaves all geometry untouched when the viewport has
    /// zero-sized pixel bounds or an unusable value range.
    pub fn refresh_all_bounds(&mut self, viewport: &GraphViewport) -> bool {
        let Some(transform) = viewport.transform() else {
            debug!(screen = ?viewport.screen, "skipping tracepoint refresh for degenerate viewport");
            return false;
        };
        let plot = transform.screen();
        for point in &mut self.points {
            if !point.layout_marker(&transform, &self.config) {
                trace!(id = ?point.id(), "tracepoint value not mappable on current axes");
                continue;
            }
            point.layout_label(&self.formatter, self.measurer.as_ref(), &self.config);
            if self.config.flip_labels_at_edges {
                let rect = point.label().screen_rect();
                let fitted = point.corner().fitted(
                    point.marker().center(),
                    (rect.width(), rect.height()),
                    plot,
                );
                if fitted != point.corner() {
                    trace!(id = ?point.id(), ?fitted, "flipped label away from plot edge");
                    point.set_corner(fitted);
                    point.place_label(self.measurer.as_ref(), &self.config);
                }
            }
        }
        trace!(count = self.points.len(), "refreshed tracepoint bounds");
        true
    }

    /// Handle of the series a tracepoint was placed on.
    pub fn find_data_series_for(&self, id: TraceId) -> Option<SeriesHandle> {
        self.get(id).map(TrackedPoint::series)
    }

    /// Resolve a tracepoint's series against the live registry.
    pub fn resolve_series<'r, S>(
        &self,
        id: TraceId,
        registry: &'r SeriesRegistry<S>,
    ) -> Result<&'r S, TraceError> {
        let handle = self
            .find_data_series_for(id)
            .ok_or(TraceError::UnknownTrace(id))?;
        registry.get(handle).ok_or(TraceError::StaleSeries(handle))
    }

    /// Move a tracepoint to the series sample under a screen position.
    ///
    /// The position is mapped into data space and snapped by the tracepoint's
    /// series. Targets without a screen position on the current axes are
    /// refused. On error the tracepoint is left unchanged. Returns the value
    /// the marker now sits on.
    pub fn set_marker_position<S: DataSeries>(
        &mut self,
        id: TraceId,
        position: ScreenPoint,
        viewport: &GraphViewport,
        registry: &SeriesRegistry<S>,
    ) -> Result<Point, TraceError> {
        let index = self.index_of(id).ok_or(TraceError::UnknownTrace(id))?;
        let transform = viewport.transform().ok_or(TraceError::DegenerateViewport)?;
        let raw = transform
            .screen_to_data(position)
            .ok_or(TraceError::DegenerateViewport)?;

        let handle = self.points[index].series();
        let Some(series) = registry.get(handle) else {
            warn!(?id, ?handle, "dragged tracepoint refers to a removed series");
            return Err(TraceError::StaleSeries(handle));
        };
        let value = series.nearest_sample(raw).unwrap_or(raw);
        let mappable = value.x.is_finite()
            && value.y.is_finite()
            && transform.data_to_screen(value).is_some();
        if !mappable {
            debug!(?id, x = value.x, y = value.y, "drag target not mappable on current axes");
            return Err(TraceError::Unmappable {
                x: value.x,
                y: value.y,
            });
        }

        let occupied = self
            .points
            .iter()
            .any(|point| point.id() != id && *point.marker() == value);
        if occupied {
            return Err(TraceError::Occupied {
                x: value.x,
                y: value.y,
            });
        }

        let point = &mut self.points[index];
        point.set_value(value);
        point.layout_marker(&transform, &self.config);
        point.layout_label(&self.formatter, self.measurer.as_ref(), &self.config);
        trace!(?id, x = value.x, y = value.y, "moved tracepoint");
        Ok(value)
    }

    /// Anchor a tracepoint's label on the cursor's side of its marker.
    ///
    /// See [`CornerPosition::from_cursor`] for the quadrant rule.
    pub fn set_label_corner(
        &mut self,
        id: TraceId,
        cursor: ScreenPoint,
    ) -> Result<CornerPosition, TraceError> {
        let index = self.index_of(id).ok_or(TraceError::UnknownTrace(id))?;
        let point = &mut self.points[index];
        let corner = CornerPosition::from_cursor(point.marker().center(), cursor);
        if corner != point.corner() {
            debug!(?id, ?corner, "changed label corner");
            point.set_corner(corner);
        }
        point.place_label(self.measurer.as_ref(), &self.config);
        Ok(corner)
    }

    /// Check whether an element is the marker of a tracked point.
    pub fn is_known_marker(&self, element: TraceElement) -> bool {
        match element {
            TraceElement::Marker(id) => self.index_of(id).is_some(),
            TraceElement::Label(_) => false,
        }
    }

    /// Check whether an element is the label of a tracked point.
    pub fn is_known_label(&self, element: TraceElement) -> bool {
        match element {
            TraceElement::Label(id) => self.index_of(id).is_some(),
            TraceElement::Marker(_) => false,
        }
    }

    /// Find the element under a screen position.
    ///
    /// Labels are checked before markers since they are painted on top; among
    /// overlapping elements the most recently added wins.
    pub fn hit_test(&self, position: ScreenPoint) -> Option<TraceElement> {
        let label = self
            .points
            .iter()
            .rev()
            .find(|point| point.label().screen_rect().contains(position))
            .map(|point| TraceElement::Label(point.id()));
        label.or_else(|| {
            self.points
                .iter()
                .rev()
                .find(|point| point.marker().screen_rect().contains(position))
                .map(|point| TraceElement::Marker(point.id()))
        })
    }

    /// Hand every marker, then every label, to a container for painting.
    pub fn attach_to<C: TraceContainer + ?Sized>(&self, container: &mut C) {
        for point in &self.points {
            container.add_marker(point.id(), point.marker());
        }
        for point in &self.points {
            container.add_label(point.id(), point.label());
        }
    }

    /// Set the theme on every marker and label, including points added later.
    pub fn apply_theme(&mut self, theme: Arc<Theme>) {
        for point in &mut self.points {
            point.set_theme(Some(theme.clone()));
        }
        self.theme = Some(theme);
    }

    /// Remove a single tracepoint.
    pub fn remove(&mut self, id: TraceId) -> Option<TrackedPoint> {
        let index = self.index_of(id)?;
        Some(self.points.swap_remove(index))
    }

    /// Drop tracepoints whose series no longer resolves. Returns how many were dropped.
    pub fn retain_live_series<S>(&mut self, registry: &SeriesRegistry<S>) -> usize {
        let before = self.points.len();
        self.points.retain(|point| registry.contains(point.series()));
        let dropped = before - self.points.len();
        if dropped > 0 {
            warn!(dropped, "dropped tracepoints on removed series");
        }
        dropped
    }

    /// Remove every tracepoint.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Access a tracepoint by id.
    pub fn get(&self, id: TraceId) -> Option<&TrackedPoint> {
        self.points.iter().find(|point| point.id() == id)
    }

    /// Iterate over all tracepoints.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedPoint> {
        self.points.iter()
    }

    /// Number of tracepoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether there are no tracepoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn index_of(&self, id: TraceId) -> Option<usize> {
        self.points.iter().position(|point| point.id() == id)
    }
}

impl Default for TraceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TraceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceManager")
            .field("points", &self.points)
            .field("config", &self.config)
            .field("formatter", &self.formatter)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
