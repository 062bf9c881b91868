use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// The lock indicator a dedicated LED is wired to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockKey {
    NumLock,
    CapsLock,
    ScrollLock,
}

/// Host lock-key state, one bit per indicator as laid out in the HID boot
/// keyboard output report. Only the locks keyglow displays are named.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Serialize, Deserialize)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(5)]
    _reserved: u8,
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
    pub const SCROLL_LOCK: Self = Self::new().with_scroll_lock(true);

    pub const fn new_from(num_lock: bool, caps_lock: bool, scroll_lock: bool) -> Self {
        Self::new()
            .with_num_lock(num_lock)
            .with_caps_lock(caps_lock)
            .with_scroll_lock(scroll_lock)
    }

    /// State of a single lock.
    pub const fn get(&self, lock: LockKey) -> bool {
        match lock {
            LockKey::NumLock => self.num_lock(),
            LockKey::CapsLock => self.caps_lock(),
            LockKey::ScrollLock => self.scroll_lock(),
        }
    }

    /// State of the lock wired to indicator LED `index`.
    ///
    /// LED 0 is num lock, LED 1 caps lock, LED 2 scroll lock; other indices
    /// carry no lock and read as off.
    pub const fn led(&self, index: usize) -> bool {
        match index {
            0 => self.num_lock(),
            1 => self.caps_lock(),
            2 => self.scroll_lock(),
            _ => false,
        }
    }
}
