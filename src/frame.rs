//! Animation frame coalescing.
//!
//! Scroll events arrive far more often than the display repaints. A
//! [`FrameGate`] lets at most one update wait for the next frame; requests
//! made while one is pending are dropped. The host provides the actual
//! "call me before the next repaint" primitive through [`FrameScheduler`].

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Error returned when the host refuses to schedule a frame callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("animation frame request rejected: {0}")]
pub struct FrameError(pub String);

/// Runs a callback once before the next repaint.
///
/// Each successful request must invoke its callback exactly once.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError>;
}

type Update = Box<dyn FnOnce()>;

/// Single-pending-frame guard. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an update is waiting for its frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Schedule `update` for the next frame unless one is already pending.
    ///
    /// Returns `true` if this call scheduled (or, when the host rejected the
    /// request, immediately ran) the update. The pending flag clears after the
    /// update has run.
    pub fn request<S>(&self, scheduler: &S, update: impl FnOnce() + 'static) -> bool
    where
        S: FrameScheduler + ?Sized,
    {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);

        let slot: Rc<RefCell<Option<Update>>> = Rc::new(RefCell::new(Some(Box::new(update))));
        let slot_for_cb = Rc::clone(&slot);
        let pending_for_cb = Rc::clone(&self.pending);
        let callback = Box::new(move || {
            let update = slot_for_cb.borrow_mut().take();
            if let Some(update) = update {
                update();
            }
            pending_for_cb.set(false);
        });

        if let Err(err) = scheduler.request_frame(callback) {
            log::debug!("{err}; updating immediately");
            let update = slot.borrow_mut().take();
            if let Some(update) = update {
                update();
            }
            self.pending.set(false);
        }
        true
    }
}
