// Host-side tests for page lifecycle helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/lifecycle.rs"]
mod lifecycle;

use lifecycle::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn back_forward_cache_keeps_the_journey() {
    assert!(!tears_down_on_pagehide(true));
    assert!(tears_down_on_pagehide(false));
}

#[test]
fn release_slot_breaks_the_self_reference() {
    // payload holds an Rc to its own slot, like the rAF tick closure
    struct Tick {
        slot: Rc<RefCell<Option<Tick>>>,
    }
    let slot: Rc<RefCell<Option<Tick>>> = Rc::new(RefCell::new(None));
    *slot.borrow_mut() = Some(Tick { slot: slot.clone() });
    assert_eq!(Rc::strong_count(&slot), 2);

    let release = release_slot(&slot);
    assert!(slot.borrow().is_some());
    release();
    assert!(slot.borrow().is_none());
    assert_eq!(Rc::strong_count(&slot), 1);
}
