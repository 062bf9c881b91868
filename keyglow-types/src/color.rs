use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// A hue/saturation/value color, 8 bits per channel, hue on a 0-255 wheel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

/// An 8-bit RGB triple, ready for PWM duty or LED strip data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Hsv {
    /// Color "Electric Indigo" (#6100FF)
    pub const ELECTRIC_INDIGO: Self = Self::new(188, 255, 255);
    /// Color "Harlequin" (#42FF00)
    pub const HARLEQUIN: Self = Self::new(74, 255, 255);
    /// Color "Assassin's Red" (#f50909)
    pub const ASSASSINS_RED: Self = Self::new(0, 245, 245);
    /// Color "Blue Sparkle" (#0075FF)
    pub const BLUE_SPARKLE: Self = Self::new(152, 255, 255);
    /// Color "Cadmium Yellow" (#FFF500)
    pub const CADMIUM_YELLOW: Self = Self::new(41, 255, 255);

    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Integer HSV to RGB conversion.
    ///
    /// The 0-255 hue wheel is split into six 43-step sextants; all
    /// intermediate math fits in `u16`.
    pub const fn to_rgb(self) -> Rgb {
        let value = self.value;
        if self.saturation == 0 {
            return Rgb::new(value, value, value);
        }

        let hue = self.hue as u16;
        let saturation = self.saturation as u16;
        let v = value as u16;

        let region = hue / 43;
        let remainder = (hue % 43) * 6;

        let p = ((v * (255 - saturation)) >> 8) as u8;
        let q = ((v * (255 - ((saturation * remainder) >> 8))) >> 8) as u8;
        let t = ((v * (255 - ((saturation * (255 - remainder)) >> 8))) >> 8) as u8;

        match region {
            0 => Rgb::new(value, t, p),
            1 => Rgb::new(q, value, p),
            2 => Rgb::new(p, value, t),
            3 => Rgb::new(p, q, value),
            4 => Rgb::new(t, p, value),
            _ => Rgb::new(value, p, q),
        }
    }
}
