//! Geometric primitives for pad layout.
//!
//! All coordinates are normalized: `0.0` is the left (bottom) edge of the
//! parent surface and `1.0` the right (top) edge.

/// A 2D point with normalized floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate the unit square so rows read as columns: `(x, y) -> (1 - y, x)`.
    #[must_use]
    pub fn rotate_vertical(self) -> Self {
        Self::new(1.0 - self.y, self.x)
    }
}

/// Axis-aligned rectangle given by its low and high corners.
///
/// Invariant: `x_lo <= x_hi` and `y_lo <= y_hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormRect {
    /// Left edge.
    pub x_lo: f32,
    /// Bottom edge.
    pub y_lo: f32,
    /// Right edge.
    pub x_hi: f32,
    /// Top edge.
    pub y_hi: f32,
}

impl Default for NormRect {
    fn default() -> Self {
        Self::UNIT
    }
}

impl NormRect {
    /// The full unit square.
    pub const UNIT: Self = Self {
        x_lo: 0.0,
        y_lo: 0.0,
        x_hi: 1.0,
        y_hi: 1.0,
    };

    /// Create a rectangle from edge coordinates, reordering them if needed.
    #[must_use]
    pub fn new(x_lo: f32, y_lo: f32, x_hi: f32, y_hi: f32) -> Self {
        Self {
            x_lo: x_lo.min(x_hi),
            y_lo: y_lo.min(y_hi),
            x_hi: x_lo.max(x_hi),
            y_hi: y_lo.max(y_hi),
        }
    }

    /// Create a rectangle spanning two arbitrary corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Low (bottom-left) corner.
    #[must_use]
    pub fn low(&self) -> Point {
        Point::new(self.x_lo, self.y_lo)
    }

    /// High (top-right) corner.
    #[must_use]
    pub fn high(&self) -> Point {
        Point::new(self.x_hi, self.y_hi)
    }

    /// Apply [`Point::rotate_vertical`] to both corners.
    #[must_use]
    pub fn rotate_vertical(&self) -> Self {
        Self::from_corners(self.low().rotate_vertical(), self.high().rotate_vertical())
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x_hi - self.x_lo
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y_hi - self.y_lo
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Check if a point is inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_lo && point.x <= self.x_hi && point.y >= self.y_lo && point.y <= self.y_hi
    }

    /// Map a rectangle given relative to `self` into the coordinates `self` lives in.
    #[must_use]
    pub fn nest(&self, inner: &NormRect) -> NormRect {
        NormRect::new(
            self.x_lo + inner.x_lo * self.width(),
            self.y_lo + inner.y_lo * self.height(),
            self.x_lo + inner.x_hi * self.width(),
            self.y_lo + inner.y_hi * self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_reorders_corners() {
        let rect = NormRect::new(0.8, 0.6, 0.2, 0.1);
        assert_eq!(rect.x_lo, 0.2);
        assert_eq!(rect.y_lo, 0.1);
        assert_eq!(rect.x_hi, 0.8);
        assert_eq!(rect.y_hi, 0.6);
    }

    #[test]
    fn test_rotate_vertical_top_row() {
        // Top half of the unit square becomes the left half.
        let top = NormRect::new(0.0, 0.5, 1.0, 1.0);
        let rotated = top.rotate_vertical();
        assert_relative_eq!(rotated.x_lo, 0.0);
        assert_relative_eq!(rotated.x_hi, 0.5);
        assert_relative_eq!(rotated.y_lo, 0.0);
        assert_relative_eq!(rotated.y_hi, 1.0);
    }

    #[test]
    fn test_rect_area_and_contains() {
        let rect = NormRect::new(0.0, 0.0, 0.5, 0.25);
        assert_relative_eq!(rect.area(), 0.125);
        assert!(rect.contains(Point::new(0.5, 0.25)));
        assert!(!rect.contains(Point::new(0.6, 0.1)));
    }

    #[test]
    fn test_nest() {
        let outer = NormRect::new(0.5, 0.0, 1.0, 0.5);
        let inner = NormRect::new(0.0, 0.5, 0.5, 1.0);
        let nested = outer.nest(&inner);
        assert_relative_eq!(nested.x_lo, 0.5);
        assert_relative_eq!(nested.x_hi, 0.75);
        assert_relative_eq!(nested.y_lo, 0.25);
        assert_relative_eq!(nested.y_hi, 0.5);
    }

    #[test]
    fn test_default_is_unit() {
        assert_eq!(NormRect::default(), NormRect::UNIT);
        assert_eq!(Point::default(), Point::ORIGIN);
    }
}
