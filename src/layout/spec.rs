//! Layout string parsing.

use std::fmt;

/// Reading direction of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No tag given; same geometry as [`Orientation::Horizontal`].
    #[default]
    None,
    /// Rows are laid out as columns, left to right.
    Vertical,
    /// Rows stacked top to bottom, cells left to right.
    Horizontal,
}

impl Orientation {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "none" => Some(Orientation::None),
            "vertical" => Some(Orientation::Vertical),
            "horizontal" => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    /// Whether the grid is rotated.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// Per-row margin sharing directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginMode {
    /// `m`: suppress the margins facing neighboring cells.
    Middle,
    /// `t`: suppress the top margin.
    Top,
    /// `b`: suppress the bottom margin.
    Bottom,
    /// `l`: suppress the left margin.
    Left,
    /// `r`: suppress the right margin.
    Right,
}

impl MarginMode {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "m" => Some(MarginMode::Middle),
            "t" => Some(MarginMode::Top),
            "b" => Some(MarginMode::Bottom),
            "l" => Some(MarginMode::Left),
            "r" => Some(MarginMode::Right),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            MarginMode::Middle => 'm',
            MarginMode::Top => 't',
            MarginMode::Bottom => 'b',
            MarginMode::Left => 'l',
            MarginMode::Right => 'r',
        }
    }
}

/// One row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    /// Number of cells; zero for a malformed token.
    pub columns: usize,
    /// Margin sharing directive.
    pub mode: Option<MarginMode>,
}

impl RowSpec {
    /// Parse a `<digits><optional letter>` token.
    ///
    /// Missing digits give zero columns; an unknown suffix is ignored.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let digits = token.bytes().take_while(u8::is_ascii_digit).count();
        let (count, suffix) = token.split_at(digits);
        let columns = count.parse().unwrap_or(0);
        if columns == 0 {
            tracing::debug!(token, "layout row has no columns, skipped");
        }

        let mode = if suffix.is_empty() {
            None
        } else {
            let mode = MarginMode::from_suffix(&suffix.to_ascii_lowercase());
            if mode.is_none() {
                tracing::debug!(token, suffix, "unknown margin mode ignored");
            }
            mode
        };

        Self { columns, mode }
    }
}

/// Parsed layout string: orientation plus rows in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutSpec {
    /// Grid orientation.
    pub orientation: Orientation,
    /// Rows in order, zero-column rows included.
    pub rows: Vec<RowSpec>,
}

impl LayoutSpec {
    /// Separator characters of the layout grammar.
    pub const SEPARATORS: [char; 5] = ['[', ']', '(', ')', ','];

    /// Parse a layout string such as `"vertical[1m,2,3b]"`.
    ///
    /// Never fails: malformed rows come back with zero columns.
    #[must_use]
    pub fn parse(layout: &str) -> Self {
        let mut tokens = layout
            .split(|c| Self::SEPARATORS.contains(&c))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .peekable();

        let orientation = match tokens.peek().and_then(|t| Orientation::from_tag(t)) {
            Some(tag) => {
                tokens.next();
                tag
            }
            None => Orientation::None,
        };

        Self {
            orientation,
            rows: tokens.map(RowSpec::parse).collect(),
        }
    }

    /// Rows that produce regions.
    pub fn drawn_rows(&self) -> impl Iterator<Item = &RowSpec> {
        self.rows.iter().filter(|row| row.columns > 0)
    }

    /// Total number of regions the layout creates.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.rows.iter().map(|row| row.columns).sum()
    }
}

impl fmt::Display for LayoutSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::None => {}
            Orientation::Vertical => f.write_str("vertical")?,
            Orientation::Horizontal => f.write_str("horizontal")?,
        }
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", row.columns)?;
            if let Some(mode) = row.mode {
                write!(f, "{}", mode.letter())?;
            }
        }
        f.write_str("]")
    }
}
