use super::ReplacementPolicy;

/// Least-recently-used with an explicit per-page access clock.
///
/// Stamps live in a `Vec` kept in load order, so a scan for the minimum
/// stamp breaks ties deterministically in favor of the earliest-loaded
/// page. Linear scans are fine at realistic frame counts.
pub struct Lru {
    stamps: Vec<(u16, u64)>,
}

impl Lru {
    pub fn new() -> Self {
        Self { stamps: Vec::new() }
    }
}

impl ReplacementPolicy for Lru {
    fn on_load(&mut self, page: u16, clock: u64) {
        self.stamps.push((page, clock));
    }

    fn on_access(&mut self, page: u16, clock: u64) {
        // Update in place: recency must not disturb the tie-break order.
        if let Some(entry) = self.stamps.iter_mut().find(|(p, _)| *p == page) {
            entry.1 = clock;
        }
    }

    fn pick_victim(&mut self) -> u16 {
        let idx = self
            .stamps
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, stamp))| *stamp)
            .map(|(idx, _)| idx)
            .unwrap();
        self.stamps.remove(idx).0
    }
}

impl Default for Lru {
    fn default() -> Self {
        Self::new()
    }
}
