//! Fixed-dimensionality views over [`HistogramN`].
//!
//! These are what renderers draw; anything above three axes stays a plain
//! [`HistogramN`].

use super::axis::Axis;
use super::histogram::HistogramN;
use crate::error::{Error, Result};

macro_rules! fixed_histogram {
    ($(#[$doc:meta])* $name:ident, $dims:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(HistogramN);

        impl $name {
            /// Number of axes.
            pub const DIMENSIONS: usize = $dims;

            /// Borrow the underlying histogram.
            #[must_use]
            pub fn as_histogram(&self) -> &HistogramN {
                &self.0
            }

            /// Mutably borrow the underlying histogram.
            pub fn as_histogram_mut(&mut self) -> &mut HistogramN {
                &mut self.0
            }

            /// Unwrap into the underlying histogram.
            #[must_use]
            pub fn into_inner(self) -> HistogramN {
                self.0
            }

            /// Histogram name.
            #[must_use]
            pub fn name(&self) -> &str {
                self.0.name()
            }

            /// First axis.
            #[must_use]
            pub fn x_axis(&self) -> &Axis {
                &self.0.axes()[0]
            }
        }

        impl TryFrom<HistogramN> for $name {
            type Error = Error;

            fn try_from(his: HistogramN) -> Result<Self> {
                if his.dimensions() == $dims {
                    Ok(Self(his))
                } else {
                    Err(Error::DimensionMismatch {
                        name: his.name().to_string(),
                        requested: $dims,
                        available: his.dimensions(),
                    })
                }
            }
        }

        impl From<$name> for HistogramN {
            fn from(his: $name) -> Self {
                his.0
            }
        }
    };
}

fixed_histogram!(
    /// One-dimensional histogram.
    Histogram1D,
    1
);
fixed_histogram!(
    /// Two-dimensional histogram.
    Histogram2D,
    2
);
fixed_histogram!(
    /// Three-dimensional histogram.
    Histogram3D,
    3
);

impl Histogram1D {
    /// Content of `bin` (1-based).
    #[must_use]
    pub fn bin_content(&self, bin: usize) -> f64 {
        self.0.bin_content(&[bin])
    }
}

impl Histogram2D {
    /// Second axis.
    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.0.axes()[1]
    }

    /// Content of cell `(x, y)` (1-based).
    #[must_use]
    pub fn bin_content(&self, x: usize, y: usize) -> f64 {
        self.0.bin_content(&[x, y])
    }
}

impl Histogram3D {
    /// Second axis.
    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.0.axes()[1]
    }

    /// Third axis.
    #[must_use]
    pub fn z_axis(&self) -> &Axis {
        &self.0.axes()[2]
    }

    /// Content of cell `(x, y, z)` (1-based).
    #[must_use]
    pub fn bin_content(&self, x: usize, y: usize, z: usize) -> f64 {
        self.0.bin_content(&[x, y, z])
    }

    /// Sum over the third axis.
    ///
    /// # Errors
    ///
    /// Never fails for a well-formed 3-D histogram.
    pub fn project_xy(&self) -> Result<Histogram2D> {
        Histogram2D::try_from(self.0.projection(&[0, 1])?)
    }
}
