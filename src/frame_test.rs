use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Queues callbacks until the test "repaints".
#[derive(Default)]
struct QueuedFrames {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl QueuedFrames {
    fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    fn repaint(&self) {
        let callbacks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl FrameScheduler for QueuedFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError> {
        self.queue.borrow_mut().push(callback);
        Ok(())
    }
}

struct RejectingFrames;

impl FrameScheduler for RejectingFrames {
    fn request_frame(&self, _callback: Box<dyn FnOnce()>) -> Result<(), FrameError> {
        Err(FrameError("no window".into()))
    }
}

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
    let count = Rc::new(Cell::new(0));
    let count_for_make = Rc::clone(&count);
    let make = move || {
        let count = Rc::clone(&count_for_make);
        Box::new(move || count.set(count.get() + 1)) as Box<dyn FnOnce()>
    };
    (count, make)
}

// =============================================================
// Coalescing
// =============================================================

#[test]
fn gate_starts_idle() {
    assert!(!FrameGate::new().is_pending());
}

#[test]
fn first_request_schedules_one_frame() {
    let frames = QueuedFrames::default();
    let gate = FrameGate::new();
    let (count, make) = counter();

    assert!(gate.request(&frames, make()));
    assert!(gate.is_pending());
    assert_eq!(frames.len(), 1);
    assert_eq!(count.get(), 0);
}

#[test]
fn burst_of_requests_coalesces_into_one_update() {
    let frames = QueuedFrames::default();
    let gate = FrameGate::new();
    let (count, make) = counter();

    assert!(gate.request(&frames, make()));
    for _ in 0..10 {
        assert!(!gate.request(&frames, make()));
    }
    assert_eq!(frames.len(), 1);

    frames.repaint();
    assert_eq!(count.get(), 1);
    assert!(!gate.is_pending());
}

#[test]
fn gate_reopens_after_the_frame_runs() {
    let frames = QueuedFrames::default();
    let gate = FrameGate::new();
    let (count, make) = counter();

    gate.request(&frames, make());
    frames.repaint();
    assert!(gate.request(&frames, make()));
    frames.repaint();
    assert_eq!(count.get(), 2);
}

#[test]
fn flag_stays_set_while_the_update_runs() {
    let frames = QueuedFrames::default();
    let gate = FrameGate::new();
    let seen_pending = Rc::new(Cell::new(false));

    let probe_gate = gate.clone();
    let probe = Rc::clone(&seen_pending);
    gate.request(&frames, move || probe.set(probe_gate.is_pending()));
    frames.repaint();

    assert!(seen_pending.get());
    assert!(!gate.is_pending());
}

#[test]
fn clones_share_the_pending_flag() {
    let frames = QueuedFrames::default();
    let gate = FrameGate::new();
    let other = gate.clone();
    let (_count, make) = counter();

    assert!(gate.request(&frames, make()));
    assert!(!other.request(&frames, make()));
    assert_eq!(frames.len(), 1);
}

// =============================================================
// Rejected requests
// =============================================================

#[test]
fn rejected_request_updates_immediately() {
    let gate = FrameGate::new();
    let (count, make) = counter();

    assert!(gate.request(&RejectingFrames, make()));
    assert_eq!(count.get(), 1);
    assert!(!gate.is_pending());

    assert!(gate.request(&RejectingFrames, make()));
    assert_eq!(count.get(), 2);
}
