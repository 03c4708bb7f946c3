//! Sampled data backing a series.
//!
//! Tracepoints sit exactly on sampled values, so the main query here is
//! "which stored sample is closest to this X".

use thiserror::Error;

use crate::geom::Point;

/// Mode of the X axis data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XMode {
    /// X values are implicit indices.
    Index,
    /// X values are explicitly provided.
    Explicit,
}

/// Errors that can occur when writing samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataError {
    /// Attempted to write with an incompatible X mode.
    #[error("sample X mode does not match the data set")]
    WrongMode,
    /// Explicit X values are not monotonic.
    ///
    /// The samples are still stored; nearest lookups fall back to a scan.
    #[error("explicit X values are not monotonic")]
    NonMonotonicX,
}

/// Sample storage for one series.
#[derive(Debug, Clone)]
pub struct SampledData {
    points: Vec<Point>,
    x_mode: XMode,
    monotonic: bool,
}

impl SampledData {
    /// Create an empty data set with implicit X indices.
    pub fn indexed() -> Self {
        Self {
            points: Vec::new(),
            x_mode: XMode::Index,
            monotonic: true,
        }
    }

    /// Create an empty data set with explicit X values.
    pub fn explicit() -> Self {
        Self {
            x_mode: XMode::Explicit,
            ..Self::indexed()
        }
    }

    /// Build an indexed data set from an iterator of Y values.
    pub fn from_iter_y<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let mut data = Self::indexed();
        let _ = data.extend_y(iter);
        data
    }

    /// Build an explicit data set from an iterator of points.
    pub fn from_iter_points<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut data = Self::explicit();
        let _ = data.extend_points(iter);
        data
    }

    /// Append Y values to indexed data.
    pub fn extend_y<I, T>(&mut self, values: I) -> Result<usize, DataError>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        if self.x_mode != XMode::Index {
            return Err(DataError::WrongMode);
        }
        let start_len = self.points.len();
        for value in values {
            let index = self.points.len();
            self.points.push(Point::new(index as f64, value.into()));
        }
        Ok(self.points.len() - start_len)
    }

    /// Append points with explicit X values.
    pub fn extend_points<I>(&mut self, points: I) -> Result<usize, DataError>
    where
        I: IntoIterator<Item = Point>,
    {
        if self.x_mode != XMode::Explicit {
            return Err(DataError::WrongMode);
        }
        let start_len = self.points.len();
        let mut last_x = self.points.last().map(|point| point.x);
        let mut non_monotonic = false;
        for point in points {
            if last_x.is_some_and(|last_x| point.x < last_x) {
                self.monotonic = false;
                non_monotonic = true;
            }
            self.points.push(point);
            last_x = Some(point.x);
        }
        if non_monotonic {
            Err(DataError::NonMonotonicX)
        } else {
            Ok(self.points.len() - start_len)
        }
    }

    /// Replace every sample, keeping the X mode.
    pub fn resample<I>(&mut self, points: I) -> Result<usize, DataError>
    where
        I: IntoIterator<Item = Point>,
    {
        self.points.clear();
        self.monotonic = true;
        match self.x_mode {
            XMode::Index => self.extend_y(points.into_iter().map(|point| point.y)),
            XMode::Explicit => self.extend_points(points),
        }
    }

    /// Access all points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Access a single point by index.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access the X mode.
    pub fn x_mode(&self) -> XMode {
        self.x_mode
    }

    /// Check whether explicit X values are monotonic.
    pub fn is_monotonic(&self) -> bool {
        self.monotonic
    }

    /// Find the sample with the nearest X value.
    pub fn nearest_by_x(&self, x: f64) -> Option<Point> {
        self.nearest_index_by_x(x).and_then(|index| self.point(index))
    }

    /// Find the index of the point with nearest X value.
    ///
    /// Ties go to the earlier sample.
    pub fn nearest_index_by_x(&self, x: f64) -> Option<usize> {
        if self.points.is_empty() || !x.is_finite() {
            return None;
        }
        let last = self.points.len() - 1;
        match self.x_mode {
            XMode::Index => Some(x.round().clamp(0.0, last as f64) as usize),
            XMode::Explicit if self.monotonic => {
                // Only the samples straddling `x` can be closest.
                let above = self.points.partition_point(|point| point.x < x);
                let below = above.checked_sub(1);
                let straddling = below.into_iter().chain((above <= last).then_some(above));
                self.closest_to(straddling, x)
            }
            XMode::Explicit => self.closest_to(0..self.points.len(), x),
        }
    }

    fn closest_to(&self, candidates: impl Iterator<Item = usize>, x: f64) -> Option<usize> {
        let distance = |index: usize| (self.points[index].x - x).abs();
        candidates.min_by(|&a, &b| distance(a).total_cmp(&distance(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_monotonic_explicit_marks_flag() {
        let mut data = SampledData::explicit();
        let _ = data.extend_points([Point::new(1.0, 1.0)]);
        let result = data.extend_points([Point::new(0.5, 2.0)]);
        assert_eq!(result, Err(DataError::NonMonotonicX));
        assert!(!data.is_monotonic());
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn extend_points_wrong_mode_does_not_append() {
        let mut data = SampledData::indexed();
        let result = data.extend_points([Point::new(0.0, 1.0)]);
        assert_eq!(result, Err(DataError::WrongMode));
        assert!(data.is_empty());
    }

    #[test]
    fn nearest_index_for_indexed_data_rounds() {
        let data = SampledData::from_iter_y([0.0, 1.0, 2.0, 3.0]);
        assert_eq!(data.nearest_index_by_x(2.4), Some(2));
        assert_eq!(data.nearest_index_by_x(2.6), Some(3));
        assert_eq!(data.nearest_index_by_x(-2.0), Some(0));
        assert_eq!(data.nearest_index_by_x(99.0), Some(3));
    }

    #[test]
    fn nearest_for_monotonic_explicit_data_uses_binary_search() {
        let data = SampledData::from_iter_points([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(10.0, 4.0),
        ]);
        assert_eq!(data.nearest_index_by_x(2.2), Some(2));
        assert_eq!(data.nearest_by_x(8.0), Some(Point::new(10.0, 4.0)));
        assert_eq!(data.nearest_by_x(-5.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(data.nearest_by_x(f64::NAN), None);
        // Halfway between 1.0 and 3.0 picks the earlier sample.
        assert_eq!(data.nearest_index_by_x(2.0), Some(1));
    }

    #[test]
    fn nearest_for_non_monotonic_explicit_data_falls_back_to_linear_scan() {
        let mut data = SampledData::explicit();
        let _ = data.extend_points([
            Point::new(0.0, 0.0),
            Point::new(5.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(10.0, 3.0),
        ]);
        assert_eq!(data.nearest_index_by_x(2.1), Some(2));
    }

    #[test]
    fn resample_replaces_samples() {
        let mut data = SampledData::from_iter_y([1.0, 2.0]);
        data.resample([Point::new(0.0, 5.0), Point::new(1.0, 6.0), Point::new(2.0, 7.0)])
            .unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.point(1), Some(Point::new(1.0, 6.0)));
        assert_eq!(data.x_mode(), XMode::Index);
    }
}
