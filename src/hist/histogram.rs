//! Dense N-dimensional histogram with axis projections.

use super::axis::Axis;
use crate::error::{Error, Result};
use trueno::Vector;

/// Dense N-dimensional histogram.
///
/// Contents are stored for the regular bins of every axis, axis 0 varying
/// fastest. Fills outside an axis are counted as entries but not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramN {
    name: String,
    title: String,
    axes: Vec<Axis>,
    strides: Vec<usize>,
    contents: Vec<f64>,
    entries: u64,
}

impl HistogramN {
    /// Create an empty histogram over `axes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `axes` is empty or the cell count overflows.
    pub fn new(name: &str, axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidHistogram(format!(
                "histogram `{name}` needs at least one axis"
            )));
        }
        let mut strides = Vec::with_capacity(axes.len());
        let mut cells: usize = 1;
        for axis in &axes {
            strides.push(cells);
            cells = cells.checked_mul(axis.bins()).ok_or_else(|| {
                Error::InvalidHistogram(format!("histogram `{name}` has too many cells"))
            })?;
        }
        Ok(Self {
            name: name.to_string(),
            title: String::new(),
            axes,
            strides,
            contents: vec![0.0; cells],
            entries: 0,
        })
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Histogram name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Histogram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Declared dimensionality.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// All axes in order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis `index` (0-based).
    #[must_use]
    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index)
    }

    /// Mutable axis `index` (0-based).
    pub fn axis_mut(&mut self, index: usize) -> Option<&mut Axis> {
        self.axes.get_mut(index)
    }

    /// Number of fills.
    #[must_use]
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Add one entry at `coords`.
    ///
    /// # Errors
    ///
    /// Returns an error if `coords` does not match the dimensionality.
    pub fn fill(&mut self, coords: &[f64]) -> Result<()> {
        self.fill_weighted(coords, 1.0)
    }

    /// Add `weight` at `coords`.
    ///
    /// # Errors
    ///
    /// Returns an error if `coords` does not match the dimensionality.
    pub fn fill_weighted(&mut self, coords: &[f64], weight: f64) -> Result<()> {
        self.check_arity(coords.len())?;
        self.entries += 1;
        let bins: Vec<usize> = self
            .axes
            .iter()
            .zip(coords)
            .map(|(axis, &x)| axis.find_bin(x))
            .collect();
        if let Some(idx) = self.linear_index(&bins) {
            self.contents[idx] += weight;
        }
        Ok(())
    }

    /// Content of the cell at 1-based `bins`; zero outside the histogram.
    #[must_use]
    pub fn bin_content(&self, bins: &[usize]) -> f64 {
        if bins.len() != self.dimensions() {
            return 0.0;
        }
        self.linear_index(bins).map_or(0.0, |idx| self.contents[idx])
    }

    /// Overwrite the cell at 1-based `bins`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` does not address a regular cell.
    pub fn set_bin_content(&mut self, bins: &[usize], value: f64) -> Result<()> {
        self.check_arity(bins.len())?;
        let idx = self.linear_index(bins).ok_or_else(|| {
            Error::InvalidHistogram(format!("bin {bins:?} is outside `{}`", self.name))
        })?;
        self.contents[idx] = value;
        Ok(())
    }

    /// Sum of contents over the active range of every axis.
    #[must_use]
    pub fn integral(&self) -> f64 {
        let mut sum = 0.0;
        self.for_each_active(|_, value| sum += value);
        sum
    }

    /// Min, max and mean of the active cell contents.
    ///
    /// Uses trueno for SIMD-accelerated reduction.
    #[must_use]
    pub fn content_stats(&self) -> (f32, f32, f32) {
        let mut values = Vec::new();
        self.for_each_active(|_, value| values.push(value as f32));
        if values.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let vec = Vector::from_vec(values);
        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(0.0);
        let mean = vec.mean().unwrap_or(0.0);
        (min, max, mean)
    }

    /// Project onto `keep` (0-based axis indices, in result order), summing
    /// over all other axes.
    ///
    /// Only cells inside the active range of every input axis contribute.
    /// Result axes are copies of the kept input axes, ranges included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `keep` is empty or longer than
    /// the dimensionality, and [`Error::InvalidAxis`] for an index out of
    /// range or listed twice.
    pub fn projection(&self, keep: &[usize]) -> Result<HistogramN> {
        if keep.is_empty() || keep.len() > self.dimensions() {
            return Err(Error::DimensionMismatch {
                name: self.name.clone(),
                requested: keep.len(),
                available: self.dimensions(),
            });
        }
        for (pos, &axis) in keep.iter().enumerate() {
            if axis >= self.dimensions() || keep[..pos].contains(&axis) {
                return Err(Error::InvalidAxis {
                    axis,
                    dimensions: self.dimensions(),
                });
            }
        }

        let axes = keep.iter().map(|&i| self.axes[i].clone()).collect();
        let suffix: Vec<String> = keep.iter().map(ToString::to_string).collect();
        let mut result =
            HistogramN::new(&format!("{}_proj_{}", self.name, suffix.join("_")), axes)?
                .with_title(&self.title);

        let mut target = vec![0usize; keep.len()];
        self.for_each_active(|bins, value| {
            for (slot, &axis) in target.iter_mut().zip(keep) {
                *slot = bins[axis];
            }
            if let Some(idx) = result.linear_index(&target) {
                result.contents[idx] += value;
            }
        });
        result.entries = self.entries;
        Ok(result)
    }

    /// Visit every cell inside the active ranges with its 1-based bins.
    pub(crate) fn for_each_active(&self, mut visit: impl FnMut(&[usize], f64)) {
        if self.axes.iter().any(|axis| axis.active_bins() == 0) {
            return;
        }
        let ranges: Vec<(usize, usize)> = self.axes.iter().map(Axis::range).collect();
        let mut bins: Vec<usize> = ranges.iter().map(|&(first, _)| first).collect();
        loop {
            if let Some(idx) = self.linear_index(&bins) {
                visit(&bins, self.contents[idx]);
            }
            // Odometer step, axis 0 fastest.
            let mut axis = 0;
            loop {
                if axis == bins.len() {
                    return;
                }
                if bins[axis] < ranges[axis].1 {
                    bins[axis] += 1;
                    break;
                }
                bins[axis] = ranges[axis].0;
                axis += 1;
            }
        }
    }

    fn check_arity(&self, len: usize) -> Result<()> {
        if len == self.dimensions() {
            Ok(())
        } else {
            Err(Error::InvalidHistogram(format!(
                "`{}` has {} axes, got {len} coordinates",
                self.name,
                self.dimensions()
            )))
        }
    }

    fn linear_index(&self, bins: &[usize]) -> Option<usize> {
        let mut idx = 0;
        for ((axis, &bin), &stride) in self.axes.iter().zip(bins).zip(&self.strides) {
            if bin == 0 || bin > axis.bins() {
                return None;
            }
            idx += (bin - 1) * stride;
        }
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube() -> HistogramN {
        let axes = vec![
            Axis::uniform(4, 0.0, 4.0).unwrap(),
            Axis::uniform(3, 0.0, 3.0).unwrap(),
            Axis::uniform(2, 0.0, 2.0).unwrap(),
        ];
        let mut his = HistogramN::new("cube", axes).unwrap();
        for x in 0..4 {
            for y in 0..3 {
                for z in 0..2 {
                    his.fill_weighted(
                        &[x as f64 + 0.5, y as f64 + 0.5, z as f64 + 0.5],
                        f64::from(x + 1),
                    )
                    .unwrap();
                }
            }
        }
        his
    }

    #[test]
    fn test_new_requires_axes() {
        assert!(HistogramN::new("empty", Vec::new()).is_err());
    }

    #[test]
    fn test_fill_and_content() {
        let his = cube();
        assert_eq!(his.dimensions(), 3);
        assert_eq!(his.entries(), 24);
        assert_relative_eq!(his.bin_content(&[2, 1, 1]), 2.0);
        assert_relative_eq!(his.bin_content(&[4, 3, 2]), 4.0);
        assert_relative_eq!(his.bin_content(&[0, 1, 1]), 0.0);
        assert_relative_eq!(his.bin_content(&[1, 1]), 0.0);
    }

    #[test]
    fn test_fill_out_of_range_counts_entry() {
        let mut his = HistogramN::new("h", vec![Axis::indexed(2).unwrap()]).unwrap();
        his.fill(&[5.0]).unwrap();
        assert_eq!(his.entries(), 1);
        assert_relative_eq!(his.integral(), 0.0);
    }

    #[test]
    fn test_fill_wrong_arity() {
        let mut his = cube();
        assert!(his.fill(&[1.0]).is_err());
    }

    #[test]
    fn test_projection_1d_sums_other_axes() {
        let his = cube();
        let proj = his.projection(&[0]).unwrap();
        assert_eq!(proj.dimensions(), 1);
        // Each x bin collects 3 * 2 cells of weight x + 1.
        assert_relative_eq!(proj.bin_content(&[1]), 6.0);
        assert_relative_eq!(proj.bin_content(&[4]), 24.0);
        assert_relative_eq!(proj.integral(), his.integral());
        assert_eq!(proj.name(), "cube_proj_0");
    }

    #[test]
    fn test_projection_keeps_listed_order() {
        let his = cube();
        let proj = his.projection(&[2, 0]).unwrap();
        assert_eq!(proj.axis(0).unwrap().bins(), 2);
        assert_eq!(proj.axis(1).unwrap().bins(), 4);
        // z bin 1, x bin 3: summed over 3 y bins of weight 3.
        assert_relative_eq!(proj.bin_content(&[1, 3]), 9.0);
    }

    #[test]
    fn test_projection_honors_ranges() {
        let mut his = cube();
        his.axis_mut(0).unwrap().set_range(1, 2);
        let proj = his.projection(&[1]).unwrap();
        // y bin: x in {1, 2}, two z bins -> (1 + 2) * 2
        assert_relative_eq!(proj.bin_content(&[1]), 6.0);
    }

    #[test]
    fn test_empty_range_selects_nothing() {
        let mut his = cube();
        his.axis_mut(1).unwrap().set_range(7, 9);
        assert_relative_eq!(his.integral(), 0.0);
        assert_eq!(his.content_stats(), (0.0, 0.0, 0.0));
        let proj = his.projection(&[0]).unwrap();
        assert_relative_eq!(proj.integral(), 0.0);
    }

    #[test]
    fn test_projection_invalid_axes() {
        let his = cube();
        assert!(matches!(
            his.projection(&[3]),
            Err(Error::InvalidAxis { axis: 3, .. })
        ));
        assert!(matches!(
            his.projection(&[1, 1]),
            Err(Error::InvalidAxis { axis: 1, .. })
        ));
        assert!(matches!(
            his.projection(&[0, 1, 2, 0]),
            Err(Error::DimensionMismatch { requested: 4, available: 3, .. })
        ));
        assert!(his.projection(&[]).is_err());
    }

    #[test]
    fn test_set_bin_content() {
        let mut his = HistogramN::new("h", vec![Axis::indexed(3).unwrap()]).unwrap();
        his.set_bin_content(&[2], 7.5).unwrap();
        assert_relative_eq!(his.bin_content(&[2]), 7.5);
        assert!(his.set_bin_content(&[4], 1.0).is_err());
    }

    #[test]
    fn test_content_stats() {
        let mut his = HistogramN::new("h", vec![Axis::indexed(4).unwrap()]).unwrap();
        for (bin, value) in [(1, 1.0), (2, 3.0), (3, 5.0), (4, 7.0)] {
            his.set_bin_content(&[bin], value).unwrap();
        }
        let (min, max, mean) = his.content_stats();
        assert_relative_eq!(min, 1.0);
        assert_relative_eq!(max, 7.0);
        assert_relative_eq!(mean, 4.0);
    }
}
