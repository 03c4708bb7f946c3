//! Axis scaling.

use crate::view::Range;

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear scaling.
    #[default]
    Linear,
    /// Base-10 logarithmic scaling.
    Log10,
    /// Time axis (mapped as linear values internally).
    Time,
}

impl AxisScale {
    /// Map a value into axis space.
    pub fn map_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear | Self::Time => Some(value),
            Self::Log10 => {
                if value <= 0.0 {
                    None
                } else {
                    Some(value.log10())
                }
            }
        }
    }

    /// Invert a value from axis space back into data space.
    pub fn invert_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear | Self::Time => Some(value),
            Self::Log10 => Some(10_f64.powf(value)),
        }
    }

    /// Map both ends of a data range into axis space.
    pub(crate) fn map_range(self, range: Range) -> Option<Range> {
        let min = self.map_value(range.min)?;
        let max = self.map_value(range.max)?;
        Some(Range::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_scale_rejects_non_positive() {
        let scale = AxisScale::Log10;
        assert!(scale.map_value(0.0).is_none());
        assert!(scale.map_value(-1.0).is_none());
        assert!(scale.map_value(1.0).is_some());
    }

    #[test]
    fn log_scale_roundtrip() {
        let scale = AxisScale::Log10;
        let value = 1000.0;
        let mapped = scale.map_value(value).unwrap();
        let roundtrip = scale.invert_value(mapped).unwrap();
        assert!((roundtrip - value).abs() < 1e-9);
    }

    #[test]
    fn log_range_requires_positive_bounds() {
        assert!(AxisScale::Log10.map_range(Range::new(-1.0, 10.0)).is_none());
        assert!(AxisScale::Linear.map_range(Range::new(-1.0, 10.0)).is_some());
    }
}
