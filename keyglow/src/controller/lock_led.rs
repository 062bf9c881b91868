//! Dedicated lock-key LEDs.

use embedded_hal::digital::StatefulOutputPin;
use keyglow_types::led_indicator::LockKey;

use crate::controller::{Controller, EventController, Runnable};
use crate::driver::gpio::OutputController;
use crate::event::LedIndicatorEvent;

/// Drives one dedicated LED from the host lock-key state.
///
/// Boards with per-lock LEDs run one of these per pin, next to (and
/// independent of) the RGB layer indicator.
pub struct LockLedController<P: StatefulOutputPin> {
    pin: OutputController<P>,
    lock: LockKey,
}

impl<P: StatefulOutputPin> LockLedController<P> {
    pub fn new(pin: P, low_active: bool, lock: LockKey) -> Self {
        Self {
            pin: OutputController::new(pin, low_active),
            lock,
        }
    }
}

impl<P: StatefulOutputPin> Controller for LockLedController<P> {
    type Event = LedIndicatorEvent;

    async fn process_event(&mut self, event: LedIndicatorEvent) {
        let lit = event.indicator.get(self.lock);
        info!("lock indicator {:?} {}", self.lock, lit);
        if lit {
            self.pin.activate();
        } else {
            self.pin.deactivate();
        }
    }
}

impl<P: StatefulOutputPin> Runnable for LockLedController<P> {
    async fn run(&mut self) -> ! {
        self.event_loop().await
    }
}
