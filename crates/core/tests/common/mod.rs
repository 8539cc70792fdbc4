//! Shared fixtures: a deterministic on-disk backing store and translator
//! builders.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

use pagesim::addr::{PAGE_SIZE, TOTAL_PAGES};
use pagesim::{BackingStore, Policy, SimConfig, Translator};

/// The byte the fixture store holds at (`page`, `offset`).
pub fn page_byte(page: u16, offset: u16) -> u8 {
    (page as u8).wrapping_add(offset as u8)
}

/// Full-size backing store covering every page in the address space.
pub fn store_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    for page in 0..TOTAL_PAGES as u16 {
        let bytes: Vec<u8> = (0..PAGE_SIZE as u16).map(|o| page_byte(page, o)).collect();
        file.write_all(&bytes).expect("write page");
    }
    file.flush().expect("flush");
    file
}

/// Store truncated to `pages` whole pages.
pub fn truncated_store_file(pages: u16) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    for page in 0..pages {
        let bytes: Vec<u8> = (0..PAGE_SIZE as u16).map(|o| page_byte(page, o)).collect();
        file.write_all(&bytes).expect("write page");
    }
    file.flush().expect("flush");
    file
}

/// Translator over a fresh fixture store. The tempfile is returned so it
/// outlives the translator's open handle.
pub fn translator(frames: usize, policy: Policy) -> (Translator, NamedTempFile) {
    let file = store_file();
    let store = BackingStore::open(file.path()).expect("open store");
    let translator =
        Translator::new(&SimConfig::new(frames, policy), store).expect("construct translator");
    (translator, file)
}

/// Virtual address for (`page`, `offset`).
pub fn addr(page: u16, offset: u16) -> u32 {
    ((page as u32) << 8) | offset as u32
}
