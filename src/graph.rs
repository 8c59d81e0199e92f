//! Point graphs and overlaid graph groups.
//!
//! Only axis formatting lives here; drawing goes through a backend.

use crate::error::{Error, Result};
use crate::hist::Axis;

/// Bins on the axes of a new graph.
const GRAPH_AXIS_BINS: usize = 100;

/// Label format used by [`set_time_axis`].
pub const TIME_FORMAT: &str = "%d/%m";

/// Division code used by [`set_time_axis`].
pub const TIME_DIVISIONS: i32 = 510;

/// A named series of `(x, y)` points with its two axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: String,
    points: Vec<(f64, f64)>,
    x_axis: Axis,
    y_axis: Axis,
}

impl Graph {
    /// Create a graph whose axes span the points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHistogram`] if a coordinate is not finite or the
    /// points span too wide an interval for finite bin widths.
    pub fn new(name: &str, points: Vec<(f64, f64)>) -> Result<Self> {
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::InvalidHistogram(format!(
                "graph `{name}` has a non-finite point"
            )));
        }
        let (x_lo, x_hi) = extent(points.iter().map(|p| p.0));
        let (y_lo, y_hi) = extent(points.iter().map(|p| p.1));
        Ok(Self {
            name: name.to_string(),
            x_axis: Axis::uniform(GRAPH_AXIS_BINS, x_lo, x_hi)?.with_name("x"),
            y_axis: Axis::uniform(GRAPH_AXIS_BINS, y_lo, y_hi)?.with_name("y"),
            points,
        })
    }

    /// Graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Horizontal axis.
    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// Vertical axis.
    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Horizontal axis, mutably.
    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x_axis
    }

    /// Vertical axis, mutably.
    pub fn y_axis_mut(&mut self) -> &mut Axis {
        &mut self.y_axis
    }
}

/// Closed interval covering `values`, widened when it would be empty.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// Graphs drawn on shared axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiGraph {
    graphs: Vec<Graph>,
}

impl MultiGraph {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a graph.
    pub fn add(&mut self, graph: Graph) {
        self.graphs.push(graph);
    }

    /// Builder form of [`MultiGraph::add`].
    #[must_use]
    pub fn with(mut self, graph: Graph) -> Self {
        self.add(graph);
        self
    }

    /// Member graphs.
    #[must_use]
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    /// Member graphs, mutably.
    pub fn graphs_mut(&mut self) -> &mut [Graph] {
        &mut self.graphs
    }
}

/// Format graph axes as dates.
///
/// `option` selects axes by letter: `X` for horizontal, `Y` for vertical.
/// Selected axes get [`TIME_DIVISIONS`] non-optimized divisions and
/// [`TIME_FORMAT`] time labels. Returns the number of axes changed.
pub fn set_time_axis(group: &mut MultiGraph, option: &str) -> usize {
    let x = option.contains('X');
    let y = option.contains('Y');
    let mut changed = 0;
    for graph in group.graphs_mut() {
        if x {
            time_format(graph.x_axis_mut());
            changed += 1;
        }
        if y {
            time_format(graph.y_axis_mut());
            changed += 1;
        }
    }
    tracing::debug!(option, changed, "time axes set");
    changed
}

fn time_format(axis: &mut Axis) {
    let style = axis.style_mut();
    style.divisions = TIME_DIVISIONS;
    style.optimize_divisions = false;
    axis.set_time_display(TIME_FORMAT);
}
