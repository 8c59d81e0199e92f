//! Draw-call sinks.
//!
//! The query interpreter hands every drawable projection to a [`Renderer`]
//! together with the expression's operation and option clauses. What
//! those strings mean is up to the backend.

mod recording;
mod terminal;

pub use recording::{DrawCall, RecordingRenderer};
pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::hist::{Axis, Histogram1D, Histogram2D, Histogram3D, HistogramN};

/// Rendering clauses forwarded from a draw expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// Statistical reduction requested by the operation clause.
    pub operation: String,
    /// Backend draw-option string.
    pub option: String,
}

impl DrawOptions {
    /// Create options from the two clauses.
    #[must_use]
    pub fn new(operation: &str, option: &str) -> Self {
        Self {
            operation: operation.to_string(),
            option: option.to_string(),
        }
    }
}

/// A histogram a renderer knows how to draw.
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    /// 1-D projection.
    One(&'a Histogram1D),
    /// 2-D projection.
    Two(&'a Histogram2D),
    /// 3-D projection.
    Three(&'a Histogram3D),
}

impl Drawable<'_> {
    /// The underlying histogram.
    #[must_use]
    pub fn histogram(&self) -> &HistogramN {
        match self {
            Drawable::One(h) => h.as_histogram(),
            Drawable::Two(h) => h.as_histogram(),
            Drawable::Three(h) => h.as_histogram(),
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.histogram().dimensions()
    }

    /// First axis, the one range clauses restrict.
    #[must_use]
    pub fn primary_axis(&self) -> &Axis {
        &self.histogram().axes()[0]
    }
}

/// Backend receiving draw calls.
pub trait Renderer {
    /// Draw one projection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Rendering`] if the backend cannot draw it.
    fn draw(&mut self, plot: Drawable<'_>, options: &DrawOptions) -> Result<()>;
}
