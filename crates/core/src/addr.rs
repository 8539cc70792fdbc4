//! Address geometry and splitting.
//!
//! The simulated address space is 16 bits wide: 256 pages of 256 bytes.
//! Raw inputs are masked down to that width before any field extraction.

/// Bytes per page (and per frame).
pub const PAGE_SIZE: usize = 256;
/// Bits of the in-page offset; `log2(PAGE_SIZE)`.
pub const OFFSET_BITS: u32 = 8;
/// Pages in the virtual address space.
pub const TOTAL_PAGES: usize = 256;
/// Mask selecting the simulated address-space width.
pub const ADDR_MASK: u32 = 0xFFFF;
/// TLB capacity in entries.
pub const TLB_ENTRIES: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtAddr(u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhysAddr(u32);

impl VirtAddr {
    /// Masks `raw` to the 16-bit address-space width.
    #[inline(always)]
    pub fn new(raw: u32) -> Self {
        Self((raw & ADDR_MASK) as u16)
    }

    #[inline(always)]
    pub fn val(&self) -> u16 {
        self.0
    }

    /// Page number: the high 8 bits.
    #[inline]
    pub fn page(&self) -> u16 {
        self.0 >> OFFSET_BITS
    }

    /// In-page offset: the low 8 bits.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.0 & (PAGE_SIZE as u16 - 1)
    }
}

impl PhysAddr {
    /// Builds the physical address for a byte at `offset` within `frame`.
    #[inline]
    pub fn compose(frame: usize, offset: u16) -> Self {
        Self(((frame as u32) << OFFSET_BITS) | offset as u32)
    }

    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }
}
