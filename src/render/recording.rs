//! Renderer that records draw calls instead of drawing.

use super::{DrawOptions, Drawable, Renderer};
use crate::error::Result;

/// Summary of one draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Histogram name.
    pub name: String,
    /// Number of axes.
    pub dimensions: usize,
    /// Active bins of the first axis.
    pub primary_range: (usize, usize),
    /// Title of each axis.
    pub axis_titles: Vec<String>,
    /// Integral over the active ranges.
    pub integral: f64,
    /// Forwarded clauses.
    pub options: DrawOptions,
}

/// Keeps every draw call for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Most recent call.
    #[must_use]
    pub fn last(&self) -> Option<&DrawCall> {
        self.calls.last()
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, plot: Drawable<'_>, options: &DrawOptions) -> Result<()> {
        let his = plot.histogram();
        self.calls.push(DrawCall {
            name: his.name().to_string(),
            dimensions: his.dimensions(),
            primary_range: plot.primary_axis().range(),
            axis_titles: his.axes().iter().map(|a| a.title().to_string()).collect(),
            integral: his.integral(),
            options: options.clone(),
        });
        Ok(())
    }
}
