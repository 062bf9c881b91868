//! Controller configuration.

use embassy_time::Duration;
use keyglow_types::color::Hsv;
use keyglow_types::indicator::IndicatorState;
use keyglow_types::led_indicator::LedIndicator;

/// How long the base layer stays lit before the indicator goes dark.
pub const DEFAULT_SLEEP_TIMEOUT: Duration = Duration::from_millis(5000);

/// Ready-made underglow map for a five-layer split ergonomic layout:
/// base, clean, macro, function, game.
pub const FIVE_LAYER_UNDERGLOW: [IndicatorState; 5] = [
    IndicatorState::Color(Hsv::ELECTRIC_INDIGO),
    IndicatorState::Color(Hsv::HARLEQUIN),
    IndicatorState::Color(Hsv::ASSASSINS_RED),
    IndicatorState::Color(Hsv::BLUE_SPARKLE),
    IndicatorState::Color(Hsv::CADMIUM_YELLOW),
];

/// Configuration of a layer indicator controller.
#[derive(Clone, Debug)]
pub struct LayerIndicatorConfig<const NUM_LAYER: usize> {
    /// Layer shown at boot and subject to the idle timeout.
    pub base_layer: u8,
    /// Idle period on the base layer before the indicator is disabled.
    pub sleep_timeout: Duration,
    /// Indicator state per layer; layers outside the array show all-off.
    pub map: [IndicatorState; NUM_LAYER],
    /// Lock-key state to seed the discrete LEDs with at boot, if the host
    /// has already reported one.
    pub initial_locks: Option<LedIndicator>,
}

impl<const NUM_LAYER: usize> Default for LayerIndicatorConfig<NUM_LAYER> {
    fn default() -> Self {
        Self {
            base_layer: 0,
            sleep_timeout: DEFAULT_SLEEP_TIMEOUT,
            map: [IndicatorState::Off; NUM_LAYER],
            initial_locks: None,
        }
    }
}
