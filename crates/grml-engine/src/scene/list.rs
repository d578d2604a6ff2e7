use std::collections::BTreeMap;

use super::DrawCmd;

/// Recorded draw stream for one or more imports.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps the allocation for reuse
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded calls per element name, sorted by name.
    pub fn count_by_name(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for cmd in &self.items {
            *counts.entry(cmd.name()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_items(self) -> Vec<DrawCmd> {
        self.items
    }
}
