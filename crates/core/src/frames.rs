//! Frame pool and page-replacement engine.

use crate::addr::PAGE_SIZE;
use crate::error::SimError;
use crate::page_table::PageTable;
use crate::policy::ReplacementPolicy;
use crate::store::BackingStore;
use crate::tlb::Tlb;

/// Physical memory plus the machinery that decides which resident page
/// loses its frame when none are free.
pub struct FramePool {
    /// Raw physical memory: `frame_count` frames of `PAGE_SIZE` bytes.
    memory: Vec<u8>,
    /// Free frame indices, handed out lowest-first.
    free: Vec<usize>,
    policy: Box<dyn ReplacementPolicy>,
}

impl FramePool {
    pub fn new(frame_count: usize, policy: Box<dyn ReplacementPolicy>) -> Self {
        Self {
            memory: vec![0; frame_count * PAGE_SIZE],
            // Reversed so pop() yields frame 0 first.
            free: (0..frame_count).rev().collect(),
            policy,
        }
    }

    /// Brings `page` into a frame, evicting a victim if necessary, and
    /// returns the frame now holding it.
    ///
    /// Eviction unwinds the victim completely before the new page lands:
    /// page-table entry invalidated, TLB entry purged, replacement
    /// bookkeeping dropped. The TLB therefore never references a page
    /// without a valid mapping, even transiently across a fault.
    pub fn resolve_fault(
        &mut self,
        page: u16,
        store: &mut BackingStore,
        page_table: &mut PageTable,
        tlb: &mut Tlb,
        clock: u64,
    ) -> Result<usize, SimError> {
        let frame = match self.free.pop() {
            Some(frame) => frame,
            None => {
                let victim = self.policy.pick_victim();
                // The victim is resident by definition, so the lookup
                // cannot miss; a miss here is a broken invariant.
                let frame = page_table
                    .lookup(victim)
                    .expect("victim page has no valid mapping");
                page_table.invalidate(victim);
                tlb.remove(victim);
                frame
            }
        };

        let data = store.read_page(page)?;
        let base = frame * PAGE_SIZE;
        self.memory[base..base + PAGE_SIZE].copy_from_slice(&data);
        self.policy.on_load(page, clock);

        Ok(frame)
    }

    /// Refreshes replacement recency for `page`. Applies on every
    /// translation touching the page, hits included.
    pub fn touch(&mut self, page: u16, clock: u64) {
        self.policy.on_access(page, clock);
    }

    pub fn read_byte(&self, frame: usize, offset: u16) -> u8 {
        self.memory[frame * PAGE_SIZE + offset as usize]
    }
}
