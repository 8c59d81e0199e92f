//! Pad layout mini-language.
//!
//! Divides a [`Surface`] into a grid of numbered [`Region`]s.
//!
//! # Syntax
//!
//! ```text
//! [<orientation>][<row>,<row>,...]
//!
//! orientation: none | vertical | horizontal   (default: horizontal reading)
//! row:         <columns>[m|t|b|l|r]
//!
//!   m  share interior axes: drop margins facing neighbouring cells
//!   t  drop the top margin        b  drop the bottom margin
//!   l  drop the left margin       r  drop the right margin
//! ```
//!
//! Rows are listed top to bottom. `vertical` rotates the grid with
//! `(x, y) -> (1 - y, x)` so each row becomes a column.
//!
//! # Example
//!
//! ```rust
//! use trueno_painter::layout::{divide, Surface};
//!
//! let mut canvas = Surface::new("canvasQA");
//! let created = divide(&mut canvas, "[1,1,2m]");
//! assert_eq!(created, 4);
//! assert!(canvas.region(3).unwrap().suppressed.right);
//! ```

mod divide;
mod spec;
mod surface;

pub use divide::{divide, LayoutEngine};
pub use spec::{LayoutSpec, MarginMode, Orientation, RowSpec};
pub use surface::{Margins, Region, Sides, Surface};
