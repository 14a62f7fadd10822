// Host-side tests for web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn one_color_per_section() {
    assert_eq!(CHAMBER_COLORS.len(), rig_core::SECTION_COUNT);
    for c in CHAMBER_COLORS {
        assert!(c.starts_with('#') && c.len() == 7, "bad color {c}");
    }
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, OVERLAY_ID, PROGRESS_FILL_ID, SECTION_LIST_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_are_positive() {
    assert!(CHAMBER_RADIUS > 0.0);
    assert!(GLOW_RADIUS > CHAMBER_RADIUS);
    assert!(CHAMBER_RING_WIDTH_PX > 0.0);
    assert!(CHAMBER_INACTIVE_ALPHA > 0.0 && CHAMBER_INACTIVE_ALPHA < 1.0);
}
