//! Binned axes with user coordinates and an active bin range.

use crate::error::{Error, Result};

/// Tick and label formatting attached to an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStyle {
    /// Division code (primary + 100 * secondary + 10000 * tertiary).
    pub divisions: i32,
    /// Let the renderer optimize the division count.
    pub optimize_divisions: bool,
    /// Interpret axis values as timestamps.
    pub time_display: bool,
    /// strftime-like format used when `time_display` is set.
    pub time_format: String,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            divisions: 510,
            optimize_divisions: true,
            time_display: false,
            time_format: String::new(),
        }
    }
}

/// A binned axis.
///
/// Bins are numbered from 1 to [`Axis::bins`]. Bin `0` and `bins + 1` are the
/// underflow and overflow positions returned by [`Axis::find_bin`]; they hold
/// no content.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    title: String,
    edges: Vec<f64>,
    range: Option<(usize, usize)>,
    style: AxisStyle,
}

impl Axis {
    /// Active range that selects no bins.
    const EMPTY_RANGE: (usize, usize) = (1, 0);

    /// Create an axis of `bins` equal-width bins spanning `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` is zero, `min >= max`, or the bin width is
    /// not a finite positive number.
    pub fn uniform(bins: usize, min: f64, max: f64) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidHistogram("axis needs at least one bin".into()));
        }
        if !(min.is_finite() && max.is_finite()) || min >= max {
            return Err(Error::InvalidHistogram(format!(
                "axis limits [{min}, {max}) are not an increasing finite interval"
            )));
        }
        let width = (max - min) / bins as f64;
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidHistogram(format!(
                "axis limits [{min}, {max}) give bin width {width}"
            )));
        }
        let mut edges: Vec<f64> = (0..bins).map(|i| min + i as f64 * width).collect();
        edges.push(max);
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidHistogram(format!(
                "{bins} bins over [{min}, {max}) are not resolvable"
            )));
        }
        Ok(Self::from_edges_unchecked(edges))
    }

    /// Create an axis from explicit bin edges.
    ///
    /// # Errors
    ///
    /// Returns an error unless there are at least two strictly increasing
    /// finite edges.
    pub fn variable(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidHistogram("axis needs at least two edges".into()));
        }
        if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidHistogram(
                "axis edges must be finite and strictly increasing".into(),
            ));
        }
        Ok(Self::from_edges_unchecked(edges))
    }

    /// Create an axis without a separate user scale: bin `i` spans `[i - 1, i)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` is zero.
    pub fn indexed(bins: usize) -> Result<Self> {
        Self::uniform(bins, 0.0, bins as f64)
    }

    fn from_edges_unchecked(edges: Vec<f64>) -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            edges,
            range: None,
            style: AxisStyle::default(),
        }
    }

    /// Set the axis name (used for metadata lookups).
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the axis title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Axis name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axis title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the axis title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bin edges, `bins() + 1` values.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Lower limit of the axis.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.edges[0]
    }

    /// Upper limit of the axis.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Lower edge of `bin` (1-based), or `None` outside the axis.
    #[must_use]
    pub fn low_edge(&self, bin: usize) -> Option<f64> {
        (1..=self.bins()).contains(&bin).then(|| self.edges[bin - 1])
    }

    /// Upper edge of `bin` (1-based), or `None` outside the axis.
    #[must_use]
    pub fn up_edge(&self, bin: usize) -> Option<f64> {
        (1..=self.bins()).contains(&bin).then(|| self.edges[bin])
    }

    /// Center of `bin` (1-based), or `None` outside the axis.
    #[must_use]
    pub fn center(&self, bin: usize) -> Option<f64> {
        Some((self.low_edge(bin)? + self.up_edge(bin)?) / 2.0)
    }

    /// Bin containing `x`: `0` below the axis, `bins() + 1` at or above its
    /// upper limit.
    #[must_use]
    pub fn find_bin(&self, x: f64) -> usize {
        if x.is_nan() || x < self.min() {
            return 0;
        }
        if x >= self.max() {
            return self.bins() + 1;
        }
        // Number of edges <= x is the 1-based bin index.
        self.edges.partition_point(|&edge| edge <= x)
    }

    /// Restrict the axis to bins `first..=last` (1-based).
    ///
    /// Bin `0` stands for anything below the axis and `bins() + 1` for
    /// anything above it. A range lying wholly beyond one end selects no bins;
    /// a partial overlap is clamped to the axis. An inverted range removes the
    /// restriction.
    pub fn set_range(&mut self, first: usize, last: usize) {
        if first > last {
            tracing::debug!(first, last, "inverted axis range, restriction removed");
            self.range = None;
        } else if last == 0 || first > self.bins() {
            tracing::debug!(first, last, bins = self.bins(), "axis range outside the axis");
            self.range = Some(Self::EMPTY_RANGE);
        } else {
            self.range = Some((first.max(1), last.min(self.bins())));
        }
    }

    /// Restrict the axis to the bins containing `lo` and `hi`, inclusive.
    ///
    /// An interval entirely below or above the axis selects no bins.
    pub fn set_range_user(&mut self, lo: f64, hi: f64) {
        let first = self.find_bin(lo);
        let last = self.find_bin(hi);
        self.set_range(first, last);
    }

    /// Remove any range restriction.
    pub fn reset_range(&mut self) {
        self.range = None;
    }

    /// Active bins as `(first, last)`, 1-based inclusive. An empty selection
    /// is `(1, 0)`.
    #[must_use]
    pub fn range(&self) -> (usize, usize) {
        self.range.unwrap_or((1, self.bins()))
    }

    /// Number of active bins.
    #[must_use]
    pub fn active_bins(&self) -> usize {
        let (first, last) = self.range();
        (last + 1).saturating_sub(first)
    }

    /// Whether a range restriction is set.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.range.is_some()
    }

    /// Whether `bin` lies in the active range.
    #[must_use]
    pub fn is_active(&self, bin: usize) -> bool {
        let (first, last) = self.range();
        (first..=last).contains(&bin)
    }

    /// Formatting attributes.
    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    /// Mutable formatting attributes.
    pub fn style_mut(&mut self) -> &mut AxisStyle {
        &mut self.style
    }

    /// Switch the axis to time display with the given format.
    pub fn set_time_display(&mut self, format: &str) {
        self.style.time_display = true;
        self.style.time_format = format.to_string();
    }
}
