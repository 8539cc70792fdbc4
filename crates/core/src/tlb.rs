use std::collections::VecDeque;

use crate::addr::TLB_ENTRIES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: u16,
    pub frame: usize,
}

/// Small associative page→frame cache with strict insertion-order
/// eviction.
///
/// Eviction order is independent of the page-replacement policy: even
/// under LRU page replacement the TLB always drops its oldest-inserted
/// entry when full. Re-inserting a page that is already cached removes
/// the stale entry and appends a fresh one at the queue tail.
pub struct Tlb {
    entries: VecDeque<TlbEntry>,
    capacity: usize,
}

impl Tlb {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Linear associative scan. O(capacity), fine at 16 entries.
    pub fn lookup(&self, page: u16) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.page == page)
            .map(|e| e.frame)
    }

    pub fn insert(&mut self, page: u16, frame: usize) {
        self.entries.retain(|e| e.page != page);
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TlbEntry { page, frame });
    }

    /// Drops the entry for `page` if present. Called when the page is
    /// evicted from the page table, so the TLB never outlives a mapping.
    pub fn remove(&mut self, page: u16) {
        self.entries.retain(|e| e.page != page);
    }

    /// Entries in internal (insertion) order.
    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Tlb {
    /// A TLB at the canonical 16-entry capacity.
    fn default() -> Self {
        Self::new(TLB_ENTRIES)
    }
}
