//! Caller-side retention of draw outcomes.

use super::interpreter::DrawOutcome;

/// Outcomes a caller wants to hold on to after a draw call.
///
/// The interpreter never reads or writes this list.
#[derive(Debug, Clone, Default)]
pub struct KeepList {
    items: Vec<DrawOutcome>,
}

impl KeepList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain an outcome.
    pub fn keep(&mut self, outcome: DrawOutcome) {
        self.items.push(outcome);
    }

    /// Number of retained outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Retained outcomes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawOutcome> {
        self.items.iter()
    }

    /// First retained outcome whose histogram is called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DrawOutcome> {
        self.items.iter().find(|o| o.histogram().name() == name)
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Extend<DrawOutcome> for KeepList {
    fn extend<I: IntoIterator<Item = DrawOutcome>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
