//! Draw expression parsing.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Parsed `name(range)(projection)(operation)(option)` expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawExpression {
    /// Histogram name, the text before the first `(`.
    pub name: String,
    /// Range clause, applied to the first result axis.
    pub range: String,
    /// Axis indices to keep, in result order.
    pub projection: Vec<usize>,
    /// Operation clause, forwarded to the renderer.
    pub operation: String,
    /// Option clause, forwarded to the renderer.
    pub option: String,
}

impl DrawExpression {
    /// Number of clause groups read; later groups are ignored.
    pub const CLAUSES: usize = 4;

    /// Check parenthesis balance and return the histogram name, the trimmed
    /// text before the first `(`. Clauses are not read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedExpression`] for unequal `(` and `)` counts.
    pub fn name_of(expression: &str) -> Result<&str> {
        let opened = expression.matches('(').count();
        let closed = expression.matches(')').count();
        if opened != closed {
            return Err(Error::MalformedExpression {
                expression: expression.to_string(),
                reason: format!("unbalanced parentheses ({opened} '(' vs {closed} ')')"),
            });
        }
        let name = expression.find('(').map_or(expression, |pos| &expression[..pos]);
        Ok(name.trim())
    }

    /// Parse a draw expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedExpression`] for unbalanced parentheses or a
    /// projection index that is not a non-negative integer.
    pub fn parse(expression: &str) -> Result<Self> {
        let name = Self::name_of(expression)?;
        let malformed = |reason: String| Error::MalformedExpression {
            expression: expression.to_string(),
            reason,
        };
        let rest = expression.find('(').map_or("", |pos| &expression[pos..]);

        let groups = clause_groups(rest)
            .ok_or_else(|| malformed("parenthesis closed before it was opened".into()))?;
        let mut clauses = groups.into_iter();
        let mut next = || clauses.next().unwrap_or_default().trim().to_string();
        let range = next();
        let projection_text = next();
        let operation = next();
        let option = next();

        let projection = if projection_text.is_empty() {
            Vec::new()
        } else {
            projection_text
                .split(',')
                .map(|idx| {
                    idx.trim()
                        .parse::<usize>()
                        .map_err(|_| malformed(format!("invalid projection index `{}`", idx.trim())))
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            name: name.to_string(),
            range,
            projection,
            operation,
            option,
        })
    }

    /// Whether the expression asks for a projection at all.
    #[must_use]
    pub fn has_projection(&self) -> bool {
        !self.projection.is_empty()
    }
}

/// Interiors of the first [`DrawExpression::CLAUSES`] top-level groups.
///
/// Returns `None` when a `)` has no opening partner or a group never closes.
fn clause_groups(text: &str) -> Option<Vec<&str>> {
    let mut groups = Vec::with_capacity(DrawExpression::CLAUSES);
    let mut depth = 0usize;
    let mut start = 0;
    for (pos, c) in text.char_indices() {
        match c {
            '(' => {
                if depth == 0 {
                    start = pos + 1;
                }
                depth += 1;
            }
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    groups.push(&text[start..pos]);
                    if groups.len() == DrawExpression::CLAUSES {
                        return Some(groups);
                    }
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(groups)
}

impl FromStr for DrawExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DrawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection: Vec<String> = self.projection.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}({})({})({})({})",
            self.name,
            self.range,
            projection.join(","),
            self.operation,
            self.option
        )
    }
}
