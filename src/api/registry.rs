use indexmap::IndexMap;

use crate::core::Chart;

/// The host page's chart handles, addressed by container element id.
///
/// Insertion order is preserved so event dispatch and tests are
/// deterministic. Removing a chart models its DOM element going away; any
/// settle-queue entry still pointing at it is skipped when it comes due.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    charts: IndexMap<String, Chart>,
}

impl ChartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, chart: Chart) {
        self.charts.insert(id.into(), chart);
    }

    pub fn remove(&mut self, id: &str) -> Option<Chart> {
        self.charts.shift_remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Chart> {
        self.charts.get(id)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Chart> {
        self.charts.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
