//! Data series and the caller-owned registry that hands out series handles.
//!
//! Tracepoints never hold a series directly. They keep a [`SeriesHandle`] and
//! resolve it against a [`SeriesRegistry`] each time the series is needed, so
//! a series removed by the host simply stops resolving.

use crate::datasource::SampledData;
use crate::geom::Point;

/// A plotted line that tracepoints can sit on.
pub trait DataSeries {
    /// Snap a data-space value onto the series.
    ///
    /// Return `None` when no sample is available; callers then keep the
    /// unsnapped value.
    fn nearest_sample(&self, value: Point) -> Option<Point> {
        Some(value)
    }
}

/// Snapping policy of a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// Keep dragged values as they are.
    None,
    /// Snap to the sample with the nearest X value.
    #[default]
    NearestX,
}

/// Named sampled line.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    data: SampledData,
    snap: SnapMode,
}

impl Series {
    /// Create a series from existing sampled data.
    pub fn new(name: impl Into<String>, data: SampledData) -> Self {
        Self {
            name: name.into(),
            data,
            snap: SnapMode::default(),
        }
    }

    /// Build a series from an iterator of Y values.
    pub fn from_iter_y<I, T>(name: impl Into<String>, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self::new(name, SampledData::from_iter_y(iter))
    }

    /// Build a series from an iterator of points.
    pub fn from_iter_points<I>(name: impl Into<String>, iter: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::new(name, SampledData::from_iter_points(iter))
    }

    /// Set the snapping policy.
    pub fn with_snap(mut self, snap: SnapMode) -> Self {
        self.snap = snap;
        self
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the sampled data.
    pub fn data(&self) -> &SampledData {
        &self.data
    }

    /// Access the sampled data mutably.
    pub fn data_mut(&mut self) -> &mut SampledData {
        &mut self.data
    }

    /// Access the snapping policy.
    pub fn snap(&self) -> SnapMode {
        self.snap
    }
}

impl DataSeries for Series {
    fn nearest_sample(&self, value: Point) -> Option<Point> {
        match self.snap {
            SnapMode::None => Some(value),
            SnapMode::NearestX => self.data.nearest_by_x(value.x),
        }
    }
}

/// Generation-checked reference to a series in a [`SeriesRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot<S> {
    generation: u32,
    value: Option<S>,
}

/// Caller-owned storage for series.
///
/// Removing a series bumps its slot generation, so handles issued before the
/// removal no longer resolve even after the slot is reused.
#[derive(Debug, Clone)]
pub struct SeriesRegistry<S = Series> {
    slots: Vec<Slot<S>>,
    free: Vec<u32>,
}

impl<S> SeriesRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a series and return its handle.
    pub fn insert(&mut self, series: S) -> SeriesHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(series);
            return SeriesHandle {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(series),
        });
        SeriesHandle {
            index,
            generation: 0,
        }
    }

    /// Remove a series, invalidating its handle.
    pub fn remove(&mut self, handle: SeriesHandle) -> Option<S> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(value)
    }

    /// Resolve a handle.
    pub fn get(&self, handle: SeriesHandle) -> Option<&S> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Resolve a handle mutably.
    pub fn get_mut(&mut self, handle: SeriesHandle) -> Option<&mut S> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Check whether a handle still resolves.
    pub fn contains(&self, handle: SeriesHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live series.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Check whether the registry holds no series.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over live series with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (SeriesHandle, &S)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value.as_ref().map(|value| {
                (
                    SeriesHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    value,
                )
            })
        })
    }
}

impl<S> Default for SeriesRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
