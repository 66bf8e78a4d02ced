//! Sample paths and path collections.

use irm_core::{Real, Size, Time, TimeGrid};

// ─── Path ─────────────────────────────────────────────────────────────────────

/// A single sample path: a sequence of time-value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Time points (including t=0).
    pub times: Vec<Time>,
    /// Process values at each time point.
    pub values: Vec<Real>,
}

impl Path {
    /// Number of time steps (= len − 1).
    pub fn steps(&self) -> Size {
        self.values.len().saturating_sub(1)
    }

    /// The initial value, if any.
    pub fn front(&self) -> Option<Real> {
        self.values.first().copied()
    }

    /// The final value, if any.
    pub fn back(&self) -> Option<Real> {
        self.values.last().copied()
    }

    /// Length of the path (number of points including initial).
    pub fn len(&self) -> Size {
        self.values.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(time, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Time, Real)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

// ─── PathCollector ────────────────────────────────────────────────────────────

/// One or more paths sampled on a common time grid.
///
/// Values are stored row by row (one row per grid point, one column per
/// path) so the table can be streamed to a writer in chronological order.
/// A path's index is fixed when the collector is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCollector {
    times: Vec<Time>,
    width: Size,
    data: Vec<Real>,
    label: String,
}

impl PathCollector {
    /// An empty collector for `width` paths on `grid`.
    pub(crate) fn new(grid: &TimeGrid, width: Size, label: impl Into<String>) -> Self {
        Self {
            times: Vec::with_capacity(grid.size()),
            width,
            data: Vec::with_capacity(grid.size() * width),
            label: label.into(),
        }
    }

    /// Build a collector from complete columns, one per path.
    pub(crate) fn from_columns(
        grid: &TimeGrid,
        columns: &[Vec<Real>],
        label: impl Into<String>,
    ) -> Self {
        let mut collector = Self::new(grid, columns.len(), label);
        let mut row = vec![0.0; columns.len()];
        for (k, t) in grid.iter().enumerate() {
            for (slot, column) in row.iter_mut().zip(columns) {
                *slot = column[k];
            }
            collector.record(t, &row);
        }
        collector
    }

    /// Append the row for time `t`.
    pub(crate) fn record(&mut self, t: Time, values: &[Real]) {
        debug_assert_eq!(values.len(), self.width);
        self.times.push(t);
        self.data.extend_from_slice(values);
    }

    /// Number of paths (columns).
    pub fn len(&self) -> Size {
        self.width
    }

    /// Whether the collector holds no paths.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Number of recorded time points (rows).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Column label shared by every path.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Recorded time points in chronological order.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Values of every path at row `k`, in path-index order.
    pub fn row(&self, k: Size) -> Option<&[Real]> {
        let start = k * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterate over `(time, values)` rows in chronological order.
    pub fn rows(&self) -> impl Iterator<Item = (Time, &[Real])> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.data.chunks_exact(self.width.max(1)))
    }

    /// The path with index `i`.
    pub fn path(&self, i: Size) -> Option<Path> {
        if i >= self.width {
            return None;
        }
        let values = self.data.iter().skip(i).step_by(self.width).copied().collect();
        Some(Path {
            times: self.times.clone(),
            values,
        })
    }

    /// Every path, in index order.
    pub fn paths(&self) -> impl Iterator<Item = Path> + '_ {
        (0..self.width).filter_map(move |i| self.path(i))
    }

    /// Final value of every path.
    pub fn terminal_values(&self) -> &[Real] {
        match self.times.len() {
            0 => &[],
            n => &self.data[(n - 1) * self.width..],
        }
    }

    /// Header row: `Time` followed by the label, numbered from 1 when the
    /// collector holds more than one path.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.width + 1);
        headers.push("Time".to_string());
        if self.width == 1 {
            headers.push(self.label.clone());
        } else {
            headers.extend((1..=self.width).map(|i| format!("{}{i}", self.label)));
        }
        headers
    }
}
