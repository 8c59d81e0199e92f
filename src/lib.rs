//! # Trueno-Painter
//!
//! Pad layouts and histogram draw queries for analysis dashboards.
//!
//! Two small text languages drive the crate:
//!
//! - **Layouts**: `"[1,1,2m]"` divides a canvas into numbered regions,
//!   computing each region's normalized bounds and which margins it drops
//!   so neighbouring plots can share axes.
//! - **Draw expressions**: `"hisK0DMassQPtTgl(1,10)(0,1)(mean)(colz)"` looks
//!   up a stored N-dimensional histogram, projects it onto the listed axes,
//!   restricts the first result axis and hands the result to a renderer.
//!
//! The crate computes geometry and issues draw calls; what a draw call
//! produces is up to the [`render::Renderer`] backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_painter::prelude::*;
//!
//! let mut canvas = Surface::new("canvasQA");
//! assert_eq!(divide(&mut canvas, "[1,2m]"), 3);
//!
//! let axes = vec![
//!     Axis::uniform(300, 0.0, 300.0)?.with_name("mass"),
//!     Axis::uniform(20, -2.0, 2.0)?.with_name("qPt"),
//! ];
//! let store: HistogramStore = [HistogramN::new("hisX", axes)?].into_iter().collect();
//!
//! let mut renderer = TerminalRenderer::new();
//! let outcome = QueryInterpreter::new()
//!     .store(&store)
//!     .draw("hisX(100,200)(0)()()", &mut renderer)?;
//! assert_eq!(outcome.dimensions(), 1);
//! # Ok::<(), trueno_painter::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Normalized points and rectangles.
pub mod geometry;

/// Binned axes, N-dimensional histograms and histogram stores.
pub mod hist;

/// Point graphs and time-axis formatting.
pub mod graph;

// ============================================================================
// Language Modules
// ============================================================================

/// Pad layout mini-language.
pub mod layout;

/// Histogram query mini-language.
pub mod query;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Draw-call backends.
pub mod render;

// ============================================================================
// Configuration and Error Types
// ============================================================================

/// YAML configuration.
pub mod config;

/// Error types for trueno-painter operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_painter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PainterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{NormRect, Point};
    pub use crate::graph::{set_time_axis, Graph, MultiGraph};
    pub use crate::hist::{
        Axis, Histogram1D, Histogram2D, Histogram3D, HistogramN, HistogramSource,
        HistogramStore, MetaTable,
    };
    pub use crate::layout::{divide, LayoutEngine, LayoutSpec, Region, Surface};
    pub use crate::query::{DrawOutcome, KeepList, Projected, QueryInterpreter};
    pub use crate::render::{DrawOptions, Drawable, RecordingRenderer, Renderer, TerminalRenderer};
    pub use batuta_common::display::WithDimensions;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

// ============================================================================
// Tests
// ============================================================================
