//! Grid materialization.

use super::spec::{LayoutSpec, MarginMode, Orientation, RowSpec};
use super::surface::{Margins, Region, Sides, Surface};
use crate::config::LayoutConfig;
use crate::geometry::NormRect;

/// Divides surfaces according to layout strings.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the default margin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Replace the regions of `surface` with the grid described by `layout`.
    ///
    /// Returns the number of regions created. Malformed rows are skipped.
    pub fn divide(&self, surface: &mut Surface, layout: &str) -> usize {
        let spec = LayoutSpec::parse(layout);
        self.divide_spec(surface, &spec)
    }

    /// Replace the regions of `surface` with the grid described by `spec`.
    pub fn divide_spec(&self, surface: &mut Surface, spec: &LayoutSpec) -> usize {
        surface.clear();

        let rows: Vec<&RowSpec> = spec.drawn_rows().collect();
        let total_rows = rows.len() as f32;
        let mut number = 0;

        for (row_idx, row) in rows.iter().enumerate() {
            let columns = row.columns as f32;
            let y_lo = (total_rows - row_idx as f32 - 1.0) / total_rows;
            let y_hi = (total_rows - row_idx as f32) / total_rows;

            for col in 0..row.columns {
                let x_lo = col as f32 / columns;
                let x_hi = (col + 1) as f32 / columns;
                let mut bounds = NormRect::new(x_lo, y_lo, x_hi, y_hi);
                if spec.orientation.is_vertical() {
                    bounds = bounds.rotate_vertical();
                }

                let suppressed = suppressed_sides(row, col, spec.orientation);
                number += 1;
                surface.attach(Region {
                    number,
                    name: format!("pad{}", number - 1),
                    bounds,
                    row: row_idx,
                    column: col,
                    suppressed,
                    margins: Margins::uniform(self.config.margin).suppress(suppressed),
                });
            }
        }

        tracing::debug!(
            surface = surface.name(),
            layout = %spec,
            regions = number,
            "surface divided"
        );
        number
    }
}

/// Divide `surface` with the default engine.
pub fn divide(surface: &mut Surface, layout: &str) -> usize {
    LayoutEngine::new().divide(surface, layout)
}

/// Margins suppressed for cell `col` of `row`.
fn suppressed_sides(row: &RowSpec, col: usize, orientation: Orientation) -> Sides {
    let mut sides = Sides::NONE;
    match row.mode {
        None => {}
        Some(MarginMode::Top) => sides.top = true,
        Some(MarginMode::Bottom) => sides.bottom = true,
        Some(MarginMode::Left) => sides.left = true,
        Some(MarginMode::Right) => sides.right = true,
        Some(MarginMode::Middle) => {
            let first = col == 0;
            let last = col + 1 == row.columns;
            let vertical = orientation.is_vertical();
            if row.columns == 1 {
                // Lone cell: join with the rows on either side instead.
                if vertical {
                    sides.left = true;
                    sides.right = true;
                } else {
                    sides.top = true;
                    sides.bottom = true;
                }
            } else if vertical {
                // Cells stack bottom to top.
                sides.top = !last;
                sides.bottom = !first;
            } else {
                sides.right = !last;
                sides.left = !first;
            }
        }
    }
    sides
}
