//! Range clause: `<bound>,<bound>` restricting the first axis.
//!
//! Bounds written with a decimal point are user coordinates, anything else
//! is a 1-based inclusive bin range. A range that misses the axis entirely
//! leaves no active bins.

use crate::error::{Error, Result};
use crate::hist::{Axis, HistogramN};

/// A parsed range clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeSpec {
    /// Inclusive 1-based bin indices.
    Bins {
        /// First bin.
        first: usize,
        /// Last bin.
        last: usize,
    },
    /// Inclusive user-coordinate interval.
    User {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
}

impl RangeSpec {
    /// Parse a range clause. Empty text means no restriction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] unless the text holds exactly two
    /// numeric bounds.
    pub fn parse(text: &str) -> Result<Option<Self>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let invalid = || Error::InvalidRange(text.to_string());

        let bounds: Vec<&str> = text.split(',').map(str::trim).collect();
        let [lo, hi] = bounds.as_slice() else {
            return Err(invalid());
        };

        // The literal decides the path, not the parsed value.
        if lo.contains('.') || hi.contains('.') {
            let lo: f64 = lo.parse().map_err(|_| invalid())?;
            let hi: f64 = hi.parse().map_err(|_| invalid())?;
            if lo.is_nan() || hi.is_nan() {
                return Err(invalid());
            }
            Ok(Some(RangeSpec::User { lo, hi }))
        } else {
            // Non-positive bins clamp to the first bin.
            let first: i64 = lo.parse().map_err(|_| invalid())?;
            let last: i64 = hi.parse().map_err(|_| invalid())?;
            Ok(Some(RangeSpec::Bins {
                first: usize::try_from(first).unwrap_or(0),
                last: usize::try_from(last).unwrap_or(0),
            }))
        }
    }

    /// Restrict `axis`.
    pub fn apply(&self, axis: &mut Axis) {
        match *self {
            RangeSpec::Bins { first, last } => axis.set_range(first, last),
            RangeSpec::User { lo, hi } => axis.set_range_user(lo, hi),
        }
    }
}

/// Apply `range_text` to the first axis of `his`.
///
/// Returns `Ok(None)` and leaves `his` untouched when the text is empty.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] for an unparseable clause.
pub fn apply_range(his: &mut HistogramN, range_text: &str) -> Result<Option<RangeSpec>> {
    let Some(spec) = RangeSpec::parse(range_text)? else {
        return Ok(None);
    };
    if let Some(axis) = his.axis_mut(0) {
        spec.apply(axis);
        tracing::debug!(histogram = his.name(), range = ?spec, "first axis restricted");
    }
    Ok(Some(spec))
}
