//! Histogram query mini-language.
//!
//! # Syntax
//!
//! ```text
//! <name>(<range>)(<projection>)(<operation>)(<option>)
//!
//! range:       <first>,<last>   1-based bins, inclusive
//!              <lo.>,<hi.>      user coordinates when either bound has a '.'
//! projection:  <axis>,...       0-based axes to keep, in result order
//! operation:   forwarded to the renderer
//! option:      forwarded to the renderer
//! ```
//!
//! Missing trailing clauses are empty. An empty projection returns the stored
//! histogram untouched; one to three axes give a drawable projection; more
//! give a projection that is returned but not drawn. The range clause only
//! ever restricts the first result axis.

mod expression;
mod interpreter;
mod keep;
mod range;

pub use expression::DrawExpression;
pub use interpreter::{draw_expression, DrawOutcome, Projected, QueryInterpreter};
pub use keep::KeepList;
pub use range::{apply_range, RangeSpec};
