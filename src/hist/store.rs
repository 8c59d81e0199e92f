//! Name-indexed histogram collections and axis metadata.

use super::histogram::HistogramN;
use std::rc::Rc;

/// Read-only lookup of histograms by name.
///
/// The query interpreter consults a primary and an optional fallback source.
pub trait HistogramSource {
    /// Find a histogram by exact name.
    fn find(&self, name: &str) -> Option<Rc<HistogramN>>;
}

/// Ordered collection of named histograms. The first match wins.
#[derive(Debug, Clone, Default)]
pub struct HistogramStore {
    items: Vec<Rc<HistogramN>>,
}

impl HistogramStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a histogram.
    pub fn add(&mut self, his: HistogramN) {
        self.items.push(Rc::new(his));
    }

    /// Append an already shared histogram.
    pub fn add_shared(&mut self, his: Rc<HistogramN>) {
        self.items.push(his);
    }

    /// Number of histograms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|his| his.name())
    }
}

impl HistogramSource for HistogramStore {
    fn find(&self, name: &str) -> Option<Rc<HistogramN>> {
        self.items.iter().find(|his| his.name() == name).cloned()
    }
}

impl FromIterator<HistogramN> for HistogramStore {
    fn from_iter<I: IntoIterator<Item = HistogramN>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Rc::new).collect(),
        }
    }
}

/// Ordered tag/value table describing histograms and their axes.
///
/// Keys follow `<object>.<property>`, e.g. `qPt.AxisTitle`.
#[derive(Debug, Clone, Default)]
pub struct MetaTable {
    entries: Vec<(String, String)>,
}

impl MetaTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Builder form of [`MetaTable::insert`].
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Title configured for the axis named `axis`.
    #[must_use]
    pub fn axis_title(&self, axis: &str) -> Option<&str> {
        self.get(&format!("{axis}.AxisTitle"))
    }
}
