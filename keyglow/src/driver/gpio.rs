use embedded_hal::digital::StatefulOutputPin;
use keyglow_types::color::Hsv;
use keyglow_types::indicator::NUM_INDICATOR_LEDS;

use super::IndicatorDriver;

/// Wrapper for an embedded-hal digital output pin that folds in the active
/// level, so callers only speak in terms of activate/deactivate.
pub(crate) struct OutputController<P: StatefulOutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: StatefulOutputPin> OutputController<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Drive the pin to its active level.
    pub fn activate(&mut self) {
        if self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
    }

    /// Drive the pin to its inactive level.
    pub fn deactivate(&mut self) {
        if self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }
}

/// Up to three discrete indicator LEDs on GPIO.
///
/// This is the shared-hardware generation: the same LEDs show the layer
/// flags and the host lock-key state, whichever was written last. Discrete
/// LEDs have no master switch, so `enable` is a no-op and `disable` simply
/// turns every LED off; there is no RGB emitter, so color writes are
/// ignored.
pub struct LedBank<P: StatefulOutputPin> {
    leds: [Option<OutputController<P>>; NUM_INDICATOR_LEDS],
}

impl<P: StatefulOutputPin> LedBank<P> {
    /// Build a bank from per-position pins; positions without an LED stay
    /// `None` and absorb writes silently.
    pub fn new(pins: [Option<P>; NUM_INDICATOR_LEDS], low_active: bool) -> Self {
        Self {
            leds: pins.map(|pin| pin.map(|pin| OutputController::new(pin, low_active))),
        }
    }
}

impl<P: StatefulOutputPin> IndicatorDriver for LedBank<P> {
    fn enable(&mut self) {}

    fn disable(&mut self) {
        for led in self.leds.iter_mut().flatten() {
            led.deactivate();
        }
    }

    fn set_color(&mut self, _color: Hsv) {
        // No RGB emitter on this hardware generation.
    }

    fn set_led(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index).and_then(|led| led.as_mut()) {
            if on {
                led.activate();
            } else {
                led.deactivate();
            }
        }
    }
}
