use std::collections::HashMap;

use crate::menu::MenuEntries;
use crate::text::normalize;

/// Normalized option text → positions carrying it, ascending.
///
/// Positions shift whenever two entries are exchanged, so the index has to be
/// rebuilt after every successful swap.
#[derive(Debug, Default, Clone)]
pub struct OptionIndex {
    positions: HashMap<String, Vec<usize>>,
}

impl OptionIndex {
    pub fn build(entries: &MenuEntries) -> Self {
        let mut index = Self::default();
        index.rebuild(entries);
        index
    }

    pub fn rebuild(&mut self, entries: &MenuEntries) {
        self.positions.clear();
        for (position, entry) in entries.iter().enumerate() {
            self.positions
                .entry(normalize(&entry.option))
                .or_default()
                .push(position);
        }
    }

    pub fn positions(&self, option: &str) -> &[usize] {
        self.positions
            .get(option)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Finds the entry with exactly `option` and `target` that is closest to
    /// the default action without sitting above `limit`.
    ///
    /// In host order this is the last occurrence at or before the limit,
    /// which is what makes duplicates (several "Attack" lines on stacked
    /// NPCs) resolve to the one nearest the top.
    pub fn find(
        &self,
        entries: &MenuEntries,
        limit: usize,
        option: &str,
        target: &str,
    ) -> Option<usize> {
        self.positions(option)
            .iter()
            .copied()
            .filter(|position| *position >= limit)
            .find(|position| {
                entries
                    .get(*position)
                    .is_some_and(|entry| normalize(&entry.target) == target)
            })
    }

    pub fn len(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
