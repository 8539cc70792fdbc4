//! Demand-paged virtual-to-physical address translation simulator.
//!
//! Models the three classical layers of a demand-paged memory system: a
//! small associative TLB, a flat page table, and a frame pool with a
//! configurable page-replacement policy (FIFO or LRU). Page contents come
//! from a read-only, file-backed store; each translation yields the
//! resolved physical address and the signed byte stored there.

pub mod addr;
pub mod config;
pub mod error;
pub mod frames;
pub mod page_table;
pub mod policy;
pub mod stats;
pub mod store;
pub mod tlb;
pub mod translator;

pub use self::config::SimConfig;
pub use self::error::SimError;
pub use self::policy::Policy;
pub use self::store::BackingStore;
pub use self::translator::{Translation, Translator};
