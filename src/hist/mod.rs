//! Multi-dimensional histograms.
//!
//! [`HistogramN`] is the aggregation object draw expressions select from;
//! [`Histogram1D`], [`Histogram2D`] and [`Histogram3D`] are the drawable
//! projections.

mod axis;
mod histogram;
mod store;
mod typed;

pub use axis::{Axis, AxisStyle};
pub use histogram::HistogramN;
pub use store::{HistogramSource, HistogramStore, MetaTable};
pub use typed::{Histogram1D, Histogram2D, Histogram3D};
