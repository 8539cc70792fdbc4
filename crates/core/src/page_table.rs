use crate::addr::TOTAL_PAGES;

#[derive(Clone, Copy, Default)]
struct PageTableEntry {
    frame: usize,
    valid: bool,
    /// Set on first activation; lets dumps list exactly the pages that
    /// have ever been resident, invalid entries included.
    touched: bool,
}

/// Flat page table: one slot per page in the 16-bit address space.
///
/// An invalidated entry keeps its slot (and a stale frame number) but is
/// never returned by `lookup` until reactivated.
pub struct PageTable {
    entries: [PageTableEntry; TOTAL_PAGES],
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: [PageTableEntry::default(); TOTAL_PAGES],
        }
    }

    pub fn lookup(&self, page: u16) -> Option<usize> {
        let e = &self.entries[page as usize];
        if e.valid { Some(e.frame) } else { None }
    }

    /// Marks `page` resident in `frame`.
    pub fn activate(&mut self, page: u16, frame: usize) {
        self.entries[page as usize] = PageTableEntry {
            frame,
            valid: true,
            touched: true,
        };
    }

    /// Marks `page` not resident. The recorded frame becomes stale and
    /// must not be read through this entry again.
    pub fn invalidate(&mut self, page: u16) {
        self.entries[page as usize].valid = false;
    }

    /// Touched pages in ascending page order as `(page, frame, valid)`.
    pub fn entries(&self) -> impl Iterator<Item = (u16, usize, bool)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.touched)
            .map(|(page, e)| (page as u16, e.frame, e.valid))
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
