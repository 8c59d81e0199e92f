//! Terminal renderer (ASCII).
//!
//! Draws 1-D projections as bar charts and 2-D projections as a grayscale
//! density map. 3-D projections are summed over z and drawn like 2-D.

use super::{DrawOptions, Drawable, Renderer};
use crate::config::TerminalConfig;
use crate::error::{Error, Result};
use crate::hist::{Histogram2D, HistogramN};
use std::fmt::Write as FmtWrite;

/// Renders draw calls to text.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    width: u32,
    height: u32,
    frames: Vec<String>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    /// ASCII grayscale ramp from empty to full (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Bar glyph.
    const BAR: char = '#';

    /// Create a renderer with the default size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&TerminalConfig::default())
    }

    /// Create a renderer from configuration.
    #[must_use]
    pub fn with_config(config: &TerminalConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            frames: Vec::new(),
        }
    }

    /// Rendered frames, one per draw call.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// All frames joined by blank lines.
    #[must_use]
    pub fn output(&self) -> String {
        self.frames.join("\n")
    }

    fn header(his: &HistogramN, options: &DrawOptions) -> String {
        let mut line = his.name().to_string();
        if !his.title().is_empty() {
            let _ = write!(line, " \"{}\"", his.title());
        }
        if !options.operation.is_empty() {
            let _ = write!(line, " [{}]", options.operation);
        }
        line.push('\n');
        line
    }

    /// Map `count` output cells onto the active bins `first..=last`.
    /// Only called with at least one active bin.
    fn sample(first: usize, last: usize, count: usize, cell: usize) -> usize {
        let bins = last - first + 1;
        first + cell * bins / count
    }

    fn render_bars(&self, his: &HistogramN, options: &DrawOptions) -> String {
        let axis = &his.axes()[0];
        let (first, last) = axis.range();
        let cols = axis.active_bins().min(self.width as usize);
        let rows = self.height as usize;
        let (_, max, _) = his.content_stats();

        let heights: Vec<usize> = (0..cols)
            .map(|c| {
                let value = his.bin_content(&[Self::sample(first, last, cols, c)]) as f32;
                if max > 0.0 {
                    ((value.max(0.0) / max) * rows as f32).round() as usize
                } else {
                    0
                }
            })
            .collect();

        let mut output = Self::header(his, options);
        for level in (1..=rows).rev() {
            for &h in &heights {
                output.push(if h >= level { Self::BAR } else { ' ' });
            }
            output.push('\n');
        }
        output.push_str(&"-".repeat(cols));
        output.push('\n');
        let lo = axis.low_edge(first).unwrap_or(axis.min());
        let hi = axis.up_edge(last).unwrap_or(axis.max());
        let _ = writeln!(output, "{lo} .. {hi} {}", axis.title());
        output
    }

    fn render_density(&self, his: &Histogram2D, options: &DrawOptions) -> String {
        let inner = his.as_histogram();
        let (x_first, x_last) = his.x_axis().range();
        let (y_first, y_last) = his.y_axis().range();
        let cols = his.x_axis().active_bins().min(self.width as usize);
        let rows = his.y_axis().active_bins().min(self.height as usize);
        let (_, max, _) = inner.content_stats();

        let mut output = Self::header(inner, options);
        for r in (0..rows).rev() {
            let y = Self::sample(y_first, y_last, rows, r);
            for c in 0..cols {
                let x = Self::sample(x_first, x_last, cols, c);
                let value = his.bin_content(x, y) as f32;
                let idx = if max > 0.0 {
                    ((value.max(0.0) / max) * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize
                } else {
                    0
                };
                output.push(Self::ASCII_RAMP[idx.min(Self::ASCII_RAMP.len() - 1)]);
            }
            output.push('\n');
        }
        output
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, plot: Drawable<'_>, options: &DrawOptions) -> Result<()> {
        let frame = match plot {
            Drawable::One(h) => self.render_bars(h.as_histogram(), options),
            Drawable::Two(h) => self.render_density(h, options),
            Drawable::Three(h) => {
                let xy = h.project_xy().map_err(|e| Error::Rendering(e.to_string()))?;
                self.render_density(&xy, options)
            }
        };
        self.frames.push(frame);
        Ok(())
    }
}

impl batuta_common::display::WithDimensions for TerminalRenderer {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hist::{Axis, Histogram1D, Histogram3D};
    use batuta_common::display::WithDimensions;

    fn ramp_1d() -> Histogram1D {
        let mut his = HistogramN::new("ramp", vec![Axis::indexed(4).unwrap()]).unwrap();
        for bin in 1..=4 {
            his.set_bin_content(&[bin], bin as f64).unwrap();
        }
        Histogram1D::try_from(his).unwrap()
    }

    #[test]
    fn test_bars() {
        let mut renderer = TerminalRenderer::new();
        renderer.set_dimensions(10, 4);
        renderer
            .draw(Drawable::One(&ramp_1d()), &DrawOptions::default())
            .unwrap();

        let frame = &renderer.frames()[0];
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0], "ramp");
        // Tallest bar only in the top row; every bar in the bottom row.
        assert_eq!(lines[1], "   #");
        assert_eq!(lines[4], "####");
        assert_eq!(lines[5], "----");
    }

    #[test]
    fn test_bars_respect_range() {
        let mut h1 = ramp_1d();
        h1.as_histogram_mut().axis_mut(0).unwrap().set_range(1, 2);
        let mut renderer = TerminalRenderer::new();
        renderer.set_dimensions(10, 2);
        renderer.draw(Drawable::One(&h1), &DrawOptions::default()).unwrap();
        let lines: Vec<&str> = renderer.frames()[0].lines().collect();
        assert_eq!(lines[1], " #");
        assert_eq!(lines[2], "##");
    }

    #[test]
    fn test_header_includes_operation() {
        let mut renderer = TerminalRenderer::new();
        renderer
            .draw(Drawable::One(&ramp_1d()), &DrawOptions::new("mean", ""))
            .unwrap();
        assert!(renderer.output().starts_with("ramp [mean]"));
    }

    #[test]
    fn test_density_3d() {
        let axes = vec![Axis::indexed(2).unwrap(), Axis::indexed(2).unwrap(), Axis::indexed(2).unwrap()];
        let mut his = HistogramN::new("cube", axes).unwrap();
        his.set_bin_content(&[2, 2, 1], 5.0).unwrap();
        his.set_bin_content(&[2, 2, 2], 5.0).unwrap();
        let h3 = Histogram3D::try_from(his).unwrap();

        let mut renderer = TerminalRenderer::new();
        renderer.draw(Drawable::Three(&h3), &DrawOptions::default()).unwrap();
        let lines: Vec<&str> = renderer.frames()[0].lines().collect();
        // Top row is y bin 2: empty then full.
        assert_eq!(lines[1], " @");
        assert_eq!(lines[2], "  ");
    }

    #[test]
    fn test_range_outside_axis_draws_nothing() {
        let mut h1 = ramp_1d();
        h1.as_histogram_mut().axis_mut(0).unwrap().set_range(7, 9);
        let mut renderer = TerminalRenderer::new();
        renderer.set_dimensions(10, 2);
        renderer.draw(Drawable::One(&h1), &DrawOptions::default()).unwrap();
        let lines: Vec<&str> = renderer.frames()[0].lines().collect();
        assert!(lines[1].is_empty());
        assert!(lines[3].is_empty());
    }

    #[test]
    fn test_empty_histogram_draws_blank() {
        let his = HistogramN::new("empty", vec![Axis::indexed(3).unwrap()]).unwrap();
        let h1 = Histogram1D::try_from(his).unwrap();
        let mut renderer = TerminalRenderer::new();
        renderer.set_dimensions(3, 2);
        renderer.draw(Drawable::One(&h1), &DrawOptions::default()).unwrap();
        assert!(renderer.frames()[0].lines().nth(1).unwrap().trim().is_empty());
    }
}
