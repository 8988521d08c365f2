//! Repeating-timer capability used to drive periodic re-sampling.
//!
//! The engine never spins up timers itself. It asks a [`Ticker`] to start or
//! stop firing, and whoever owns the ticker delivers each firing back to the
//! session together with the handle it was scheduled under. Handles are never
//! reused, so a firing that was already in flight when its timer got
//! cancelled can be recognised and dropped.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        TickHandle(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait Ticker {
    /// Begin firing every `interval_ms` until cancelled.
    fn schedule_every(&mut self, interval_ms: u64) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Bookkeeping ticker for tests: nothing fires on its own.
///
/// Clones share state, so a test can keep one copy while the session owns
/// another and then fire whatever is active.
#[derive(Clone, Default)]
pub struct ManualTicker(Rc<RefCell<ManualTickerInner>>);

#[derive(Default)]
struct ManualTickerInner {
    next_id: u64,
    active: Vec<(TickHandle, u64)>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_handles(&self) -> Vec<TickHandle> {
        self.0.borrow().active.iter().map(|(h, _)| *h).collect()
    }

    pub fn active_count(&self) -> usize {
        self.0.borrow().active.len()
    }

    /// Interval of the given handle, if it is still active.
    pub fn interval_of(&self, handle: TickHandle) -> Option<u64> {
        self.0
            .borrow()
            .active
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, interval)| *interval)
    }

    pub fn scheduled_total(&self) -> usize {
        self.0.borrow().scheduled
    }

    pub fn cancelled_total(&self) -> usize {
        self.0.borrow().cancelled
    }
}

impl Ticker for ManualTicker {
    fn schedule_every(&mut self, interval_ms: u64) -> TickHandle {
        let mut inner = self.0.borrow_mut();
        inner.next_id += 1;
        let handle = TickHandle(inner.next_id);
        inner.active.push((handle, interval_ms));
        inner.scheduled += 1;
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let mut inner = self.0.borrow_mut();
        let before = inner.active.len();
        inner.active.retain(|(h, _)| *h != handle);
        if inner.active.len() != before {
            inner.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_unique() {
        let mut ticker = ManualTicker::new();
        let a = ticker.schedule_every(10);
        ticker.cancel(a);
        let b = ticker.schedule_every(10);
        assert_ne!(a, b);
        assert_eq!(ticker.active_handles(), vec![b]);
    }

    #[test]
    fn test_cancel_unknown_handle_ignored() {
        let mut ticker = ManualTicker::new();
        let a = ticker.schedule_every(25);
        ticker.cancel(TickHandle::new(999));
        assert_eq!(ticker.active_count(), 1);
        assert_eq!(ticker.cancelled_total(), 0);
        assert_eq!(ticker.interval_of(a), Some(25));
    }

    #[test]
    fn test_clones_share_state() {
        let observer = ManualTicker::new();
        let mut owned = observer.clone();
        let h = owned.schedule_every(10);
        assert_eq!(observer.active_handles(), vec![h]);
        owned.cancel(h);
        assert_eq!(observer.active_count(), 0);
        assert_eq!(observer.scheduled_total(), 1);
        assert_eq!(observer.cancelled_total(), 1);
    }
}
