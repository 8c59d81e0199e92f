//! Drawing surfaces and the regions attached to them.

use crate::geometry::NormRect;

/// Per-side flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    /// Top side.
    pub top: bool,
    /// Bottom side.
    pub bottom: bool,
    /// Left side.
    pub left: bool,
    /// Right side.
    pub right: bool,
}

impl Sides {
    /// No side set.
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    /// Number of sides set.
    #[must_use]
    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|&&side| side)
            .count()
    }
}

/// Margins of a region as fractions of its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Left margin.
    pub left: f32,
    /// Right margin.
    pub right: f32,
}

impl Margins {
    /// Same margin on every side.
    #[must_use]
    pub const fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }

    /// Zero the suppressed sides.
    #[must_use]
    pub fn suppress(mut self, sides: Sides) -> Self {
        if sides.top {
            self.top = 0.0;
        }
        if sides.bottom {
            self.bottom = 0.0;
        }
        if sides.left {
            self.left = 0.0;
        }
        if sides.right {
            self.right = 0.0;
        }
        self
    }
}

/// A numbered child area of a [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// 1-based number in grid order.
    pub number: usize,
    /// Region name, `pad<number - 1>`.
    pub name: String,
    /// Position in the parent, normalized.
    pub bounds: NormRect,
    /// Grid row (0-based, non-empty rows only).
    pub row: usize,
    /// Cell index within the row (0-based).
    pub column: usize,
    /// Margins suppressed by the row's margin mode.
    pub suppressed: Sides,
    /// Effective margins.
    pub margins: Margins,
}

impl Region {
    /// Plot area inside the margins, in parent coordinates.
    #[must_use]
    pub fn frame(&self) -> NormRect {
        let m = self.margins;
        self.bounds.nest(&NormRect::new(m.left, m.bottom, 1.0 - m.right, 1.0 - m.top))
    }
}

/// A rectangular drawing area that owns regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    name: String,
    bounds: NormRect,
    regions: Vec<Region>,
    selected: Option<usize>,
}

impl Surface {
    /// Create a surface covering the whole output.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_bounds(name, NormRect::UNIT)
    }

    /// Create a surface with explicit normalized bounds.
    #[must_use]
    pub fn with_bounds(name: &str, bounds: NormRect) -> Self {
        Self {
            name: name.to_string(),
            bounds,
            regions: Vec::new(),
            selected: None,
        }
    }

    /// Surface name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surface bounds.
    #[must_use]
    pub fn bounds(&self) -> NormRect {
        self.bounds
    }

    /// Attached regions in number order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region with the given 1-based number.
    #[must_use]
    pub fn region(&self, number: usize) -> Option<&Region> {
        number
            .checked_sub(1)
            .and_then(|idx| self.regions.get(idx))
            .filter(|region| region.number == number)
    }

    /// Make region `number` current. Returns it, or `None` if absent.
    pub fn select(&mut self, number: usize) -> Option<&Region> {
        if self.region(number).is_some() {
            self.selected = Some(number);
        }
        self.region(number)
    }

    /// Currently selected region.
    #[must_use]
    pub fn selected(&self) -> Option<&Region> {
        self.selected.and_then(|number| self.region(number))
    }

    /// Attach a region. Numbers are expected in ascending order from 1.
    pub fn attach(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.selected = None;
    }
}
