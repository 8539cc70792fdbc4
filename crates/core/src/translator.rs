//! The translation orchestrator.

use crate::addr::{PhysAddr, TLB_ENTRIES, VirtAddr};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::frames::FramePool;
use crate::page_table::PageTable;
use crate::stats::Stats;
use crate::store::BackingStore;
use crate::tlb::{Tlb, TlbEntry};

/// Outcome of one translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    pub virt: VirtAddr,
    pub phys: PhysAddr,
    /// The stored byte, interpreted as signed two's-complement.
    pub value: i8,
    pub tlb_hit: bool,
    pub page_fault: bool,
}

/// One demand-paged address-translation pipeline: TLB in front of a flat
/// page table in front of a frame pool fed from the backing store.
///
/// All state is owned here; a fixed input sequence, configuration, and
/// store yields a fully deterministic output sequence.
pub struct Translator {
    tlb: Tlb,
    page_table: PageTable,
    frames: FramePool,
    store: BackingStore,
    stats: Stats,
    /// Global access clock, incremented once per translation. Drives LRU
    /// recency.
    clock: u64,
}

impl Translator {
    /// Validates the configuration and builds an empty translator: all
    /// frames free, TLB and page table cold.
    pub fn new(config: &SimConfig, store: BackingStore) -> Result<Self, SimError> {
        if config.frame_count == 0 {
            return Err(SimError::Config(
                "frame count must be a positive integer".into(),
            ));
        }

        Ok(Self {
            tlb: Tlb::new(TLB_ENTRIES),
            page_table: PageTable::new(),
            frames: FramePool::new(config.frame_count, config.policy.build()),
            store,
            stats: Stats::default(),
            clock: 0,
        })
    }

    /// Resolves one virtual address to its physical address and stored
    /// byte value.
    ///
    /// Lookup order: TLB, then page table, then fault into the frame
    /// pool. Both lower levels refill the TLB, and the page's recency is
    /// refreshed on every path so hits count as recent use under LRU.
    pub fn translate(&mut self, raw: u32) -> Result<Translation, SimError> {
        self.stats.accesses += 1;
        self.clock += 1;

        let virt = VirtAddr::new(raw);
        let page = virt.page();
        let offset = virt.offset();

        let mut tlb_hit = false;
        let mut page_fault = false;

        let frame = match self.tlb.lookup(page) {
            Some(frame) => {
                self.stats.tlb_hits += 1;
                tlb_hit = true;
                frame
            }
            None => match self.page_table.lookup(page) {
                Some(frame) => {
                    self.tlb.insert(page, frame);
                    frame
                }
                None => {
                    self.stats.page_faults += 1;
                    page_fault = true;
                    let frame = self.frames.resolve_fault(
                        page,
                        &mut self.store,
                        &mut self.page_table,
                        &mut self.tlb,
                        self.clock,
                    )?;
                    self.page_table.activate(page, frame);
                    self.tlb.insert(page, frame);
                    frame
                }
            },
        };

        self.frames.touch(page, self.clock);

        let phys = PhysAddr::compose(frame, offset);
        let value = self.frames.read_byte(frame, offset) as i8;

        Ok(Translation {
            virt,
            phys,
            value,
            tlb_hit,
            page_fault,
        })
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Touched page-table entries, ascending by page, as
    /// `(page, frame, valid)`.
    pub fn page_table_entries(&self) -> impl Iterator<Item = (u16, usize, bool)> + '_ {
        self.page_table.entries()
    }

    /// Current TLB entries in internal (insertion) order.
    pub fn tlb_entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.tlb.entries()
    }
}
