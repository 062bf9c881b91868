//! Indicator hardware drivers.
//!
//! The indicator subsystem sits behind [`IndicatorDriver`] so the controller
//! stays hardware-agnostic: boards with RGB underglow implement the color
//! calls, boards with discrete LEDs implement the per-LED calls, and a board
//! with both implements all four.

pub(crate) mod gpio;
mod pwm_rgb;

pub use gpio::LedBank;
pub use pwm_rgb::PwmRgb;

use keyglow_types::color::Hsv;

/// Immediate, non-failing interface to the indicator hardware.
///
/// Calls are fire-and-forget; a driver ignores the calls its hardware
/// generation cannot express.
pub trait IndicatorDriver {
    /// Enable indicator output.
    fn enable(&mut self);

    /// Disable indicator output entirely.
    fn disable(&mut self);

    /// Set the RGB emitter color.
    fn set_color(&mut self, color: Hsv);

    /// Set one discrete LED.
    fn set_led(&mut self, index: usize, on: bool);
}
