use embedded_hal::pwm::SetDutyCycle;
use keyglow_types::color::{Hsv, Rgb};

use super::IndicatorDriver;

/// One RGB emitter driven by three PWM channels.
///
/// Duty cycles follow the 8-bit RGB conversion of the commanded color.
/// While disabled the emitter is held dark; the last commanded color is kept
/// and restored on enable. There are no discrete LEDs on this hardware
/// generation, so per-LED writes are ignored.
pub struct PwmRgb<C: SetDutyCycle> {
    red: C,
    green: C,
    blue: C,
    color: Hsv,
    enabled: bool,
}

impl<C: SetDutyCycle> PwmRgb<C> {
    pub fn new(red: C, green: C, blue: C) -> Self {
        Self {
            red,
            green,
            blue,
            color: Hsv::new(0, 0, 0),
            enabled: false,
        }
    }

    fn refresh(&mut self) {
        let rgb = if self.enabled {
            self.color.to_rgb()
        } else {
            Rgb::OFF
        };
        self.red.set_duty_cycle_fraction(rgb.r as u16, 255).ok();
        self.green.set_duty_cycle_fraction(rgb.g as u16, 255).ok();
        self.blue.set_duty_cycle_fraction(rgb.b as u16, 255).ok();
    }
}

impl<C: SetDutyCycle> IndicatorDriver for PwmRgb<C> {
    fn enable(&mut self) {
        self.enabled = true;
        self.refresh();
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.refresh();
    }

    fn set_color(&mut self, color: Hsv) {
        self.color = color;
        self.refresh();
    }

    fn set_led(&mut self, _index: usize, _on: bool) {
        // No discrete LEDs on this hardware generation.
    }
}
