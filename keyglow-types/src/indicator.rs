use crate::color::Hsv;

/// Number of discrete indicator LEDs the engine addresses.
pub const NUM_INDICATOR_LEDS: usize = 3;

/// On/off flags for the discrete indicator LEDs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedFlags([bool; NUM_INDICATOR_LEDS]);

impl LedFlags {
    pub const OFF: Self = Self([false; NUM_INDICATOR_LEDS]);

    pub const fn new(led0: bool, led1: bool, led2: bool) -> Self {
        Self([led0, led1, led2])
    }

    /// State of LED `index`; out-of-range indices read as off.
    pub const fn led(&self, index: usize) -> bool {
        if index < NUM_INDICATOR_LEDS {
            self.0[index]
        } else {
            false
        }
    }
}

/// Desired state of the indicator subsystem while a given layer is active.
///
/// Which variants a keymap uses depends on the indicator hardware
/// generation: boards with RGB underglow map layers to [`Color`], boards
/// with discrete LEDs map them to [`Leds`], and unmapped layers fall back to
/// [`Off`].
///
/// [`Color`]: IndicatorState::Color
/// [`Leds`]: IndicatorState::Leds
/// [`Off`]: IndicatorState::Off
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    /// All indicator outputs off.
    #[default]
    Off,
    /// RGB emitter on, showing the given color.
    Color(Hsv),
    /// Discrete LEDs set to the given flags.
    Leds(LedFlags),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_flags_indexing() {
        let flags = LedFlags::new(true, false, true);
        assert!(flags.led(0));
        assert!(!flags.led(1));
        assert!(flags.led(2));
        assert!(!flags.led(NUM_INDICATOR_LEDS));
    }
}
