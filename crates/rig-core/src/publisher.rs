use crate::constants::PUBLISH_MAX;
use std::cell::Cell;
use std::rc::Rc;

/// Callback that receives the clamped progress once per frame.
pub type ProgressHandler = Box<dyn FnMut(f32)>;

/// Clamp smoothed progress into the range listeners are promised.
#[inline]
pub fn publish_value(smoothed: f32) -> f32 {
    if smoothed.is_finite() {
        smoothed.clamp(0.0, PUBLISH_MAX)
    } else {
        0.0
    }
}

/// Single-slot progress callback. Registering replaces the previous handler;
/// registering `None` detaches it.
#[derive(Default)]
pub struct ProgressPublisher {
    handler: Option<ProgressHandler>,
    last: Rc<Cell<f32>>,
}

impl ProgressPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Option<ProgressHandler>) {
        match (&self.handler, &handler) {
            (Some(_), Some(_)) => log::debug!("[publisher] progress listener replaced"),
            (None, Some(_)) => log::debug!("[publisher] progress listener attached"),
            (Some(_), None) => log::debug!("[publisher] progress listener detached"),
            (None, None) => {}
        }
        self.handler = handler;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.handler.is_some()
    }

    /// Shared copy of the last published value. Readable while a handler is
    /// running, when the publisher itself is mutably borrowed.
    pub fn last_published(&self) -> Rc<Cell<f32>> {
        self.last.clone()
    }

    /// Clamp and deliver. Panics raised by the handler propagate to the caller.
    pub fn publish(&mut self, smoothed: f32) -> f32 {
        let value = publish_value(smoothed);
        self.last.set(value);
        if let Some(handler) = self.handler.as_mut() {
            handler(value);
        }
        value
    }
}

impl std::fmt::Debug for ProgressPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressPublisher")
            .field("attached", &self.is_attached())
            .finish()
    }
}
