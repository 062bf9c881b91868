//! One-shot deferred action with cancel/extend semantics.

use embassy_time::{Duration, Instant, Timer};

/// A single-slot deferred action.
///
/// At most one deadline is pending at a time: [`schedule`] arms the slot or
/// extends a pending deadline in place, so two live deadlines cannot exist.
/// A cancelled slot is simply empty and its expiry can never be observed.
///
/// [`schedule`]: DeferredSlot::schedule
#[derive(Debug, Default)]
pub struct DeferredSlot {
    deadline: Option<Instant>,
}

impl DeferredSlot {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the slot, or push a pending deadline back to `delay` from now.
    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Wait until `deadline`; never resolves when `None`.
///
/// Takes the deadline by value so the returned future stays detached from
/// the slot and the caller may mutate the slot once the wait wins a select.
pub async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => Timer::at(at).await,
        None => core::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_replaces_pending_deadline() {
        let mut slot = DeferredSlot::new();
        assert!(!slot.is_pending());

        slot.schedule(Duration::from_millis(100));
        let first = slot.deadline().unwrap();

        slot.schedule(Duration::from_millis(500));
        let second = slot.deadline().unwrap();

        // Extended in place, not stacked
        assert!(second >= first);
        assert!(slot.is_pending());
    }

    #[test]
    fn cancel_empties_the_slot() {
        let mut slot = DeferredSlot::new();
        slot.schedule(Duration::from_millis(100));
        slot.cancel();
        assert!(!slot.is_pending());
        assert_eq!(slot.deadline(), None);
    }
}
