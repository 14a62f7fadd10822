//! Page lifecycle helpers kept free of DOM types so they can be tested on host.

use std::cell::RefCell;
use std::rc::Rc;

/// `pagehide` with `persisted == true` means the page went into the
/// back/forward cache and may be shown again; only a real unload tears down.
#[inline]
pub fn tears_down_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// Deferred release of a self-referencing slot (the rAF closure holds an `Rc`
/// to the slot it lives in). Run the returned task after the closure has
/// returned; dropping it from inside its own body is not allowed.
pub fn release_slot<T>(slot: &Rc<RefCell<Option<T>>>) -> impl FnOnce() {
    let slot = slot.clone();
    move || {
        let taken = slot.borrow_mut().take();
        drop(taken);
    }
}
