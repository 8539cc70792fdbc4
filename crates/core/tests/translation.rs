//! # Translation Tests
//!
//! End-to-end checks of address splitting, physical-address composition,
//! signed byte interpretation, and counter bookkeeping.

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;

use common::{addr, page_byte, translator};
use pagesim::Policy;
use pagesim::addr::VirtAddr;

#[test]
fn splits_page_and_offset() {
    let v = VirtAddr::new(0x1234);
    assert_eq!(v.page(), 0x12);
    assert_eq!(v.offset(), 0x34);
}

#[test]
fn masks_input_to_sixteen_bits() {
    let v = VirtAddr::new(0xABCD_1234);
    assert_eq!(v.val(), 0x1234);
    assert_eq!(v.page(), 0x12);
}

#[rstest]
#[case(Policy::Fifo)]
#[case(Policy::Lru)]
fn physical_address_composition(#[case] policy: Policy) {
    let (mut t, _store) = translator(8, policy);

    // First touched page lands in frame 0.
    let r = t.translate(addr(18, 52)).unwrap();
    assert_eq!(r.phys.val(), 52);

    // Second distinct page lands in frame 1.
    let r = t.translate(addr(19, 0)).unwrap();
    assert_eq!(r.phys.val(), 256);
}

#[test]
fn byte_value_is_signed_twos_complement() {
    let (mut t, _store) = translator(8, Policy::Fifo);

    // Fixture byte for page 200, offset 0 is raw 200.
    let r = t.translate(addr(200, 0)).unwrap();
    assert_eq!(r.value, -56);

    // Raw 100 stays positive.
    let r = t.translate(addr(100, 0)).unwrap();
    assert_eq!(r.value, 100);
}

#[rstest]
#[case(Policy::Fifo)]
#[case(Policy::Lru)]
fn repeated_access_is_idempotent(#[case] policy: Policy) {
    let (mut t, _store) = translator(4, policy);

    let first = t.translate(addr(7, 99)).unwrap();
    let second = t.translate(addr(7, 99)).unwrap();

    assert!(first.page_fault);
    assert!(!second.page_fault);
    assert!(second.tlb_hit);
    assert_eq!(first.phys, second.phys);
    assert_eq!(first.value, second.value);
}

#[test]
fn loaded_frames_match_backing_store() {
    let (mut t, _store) = translator(8, Policy::Fifo);

    for page in [0u16, 3, 250] {
        for offset in [0u16, 1, 128, 255] {
            let r = t.translate(addr(page, offset)).unwrap();
            assert_eq!(r.value, page_byte(page, offset) as i8);
        }
    }
}

#[test]
fn counters_track_translation_outcomes() {
    let (mut t, _store) = translator(4, Policy::Fifo);

    let trace = [addr(0, 0), addr(0, 1), addr(1, 0), addr(0, 2), addr(2, 0)];
    let mut hits = 0u64;
    let mut faults = 0u64;
    for &a in &trace {
        let r = t.translate(a).unwrap();
        hits += r.tlb_hit as u64;
        faults += r.page_fault as u64;
    }

    let stats = t.stats();
    assert_eq!(stats.accesses, trace.len() as u64);
    assert_eq!(stats.tlb_hits, hits);
    assert_eq!(stats.page_faults, faults);
}

#[test]
fn rates_format_to_two_decimals() {
    let (mut t, _store) = translator(4, Policy::Fifo);

    // One fault, then two TLB hits: 3 accesses.
    t.translate(addr(5, 0)).unwrap();
    t.translate(addr(5, 1)).unwrap();
    t.translate(addr(5, 2)).unwrap();

    let stats = t.stats();
    assert_eq!(format!("{:.2}", stats.tlb_hit_rate()), "66.67");
    assert_eq!(format!("{:.2}", stats.fault_rate()), "33.33");
}

#[test]
fn rates_are_zero_before_any_access() {
    let (t, _store) = translator(4, Policy::Lru);
    assert_eq!(t.stats().tlb_hit_rate(), 0.0);
    assert_eq!(t.stats().fault_rate(), 0.0);
}
