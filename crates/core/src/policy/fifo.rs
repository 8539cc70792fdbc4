use std::collections::VecDeque;

use super::ReplacementPolicy;

/// First-in-first-out: victims are taken from the head of a residency
/// queue ordered by load time. Accesses never reorder the queue.
pub struct Fifo {
    queue: VecDeque<u16>,
}

impl Fifo {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl ReplacementPolicy for Fifo {
    fn on_load(&mut self, page: u16, _clock: u64) {
        self.queue.push_back(page);
    }

    fn on_access(&mut self, _page: u16, _clock: u64) {}

    fn pick_victim(&mut self) -> u16 {
        // Residency queue is non-empty whenever eviction is needed.
        self.queue.pop_front().unwrap()
    }
}

impl Default for Fifo {
    fn default() -> Self {
        Self::new()
    }
}
