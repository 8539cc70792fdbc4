use serde::Serialize;

/// Translation counters for one simulator instance. Monotone for the
/// instance's lifetime.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Stats {
    pub accesses: u64,
    pub tlb_hits: u64,
    pub page_faults: u64,
}

impl Stats {
    /// TLB hits as a percentage of all accesses; 0.0 before any access.
    pub fn tlb_hit_rate(&self) -> f64 {
        Self::rate(self.tlb_hits, self.accesses)
    }

    /// Page faults as a percentage of all accesses; 0.0 before any access.
    pub fn fault_rate(&self) -> f64 {
        Self::rate(self.page_faults, self.accesses)
    }

    fn rate(part: u64, whole: u64) -> f64 {
        if whole == 0 {
            0.0
        } else {
            part as f64 / whole as f64 * 100.0
        }
    }
}
