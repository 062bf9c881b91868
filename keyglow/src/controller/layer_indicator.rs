//! The layer-indicator policy.

use embassy_futures::select::{Either3, select3};
use keyglow_types::indicator::{IndicatorState, NUM_INDICATOR_LEDS};
use keyglow_types::led_indicator::LedIndicator;

use crate::config::LayerIndicatorConfig;
use crate::controller::Runnable;
use crate::defer::{DeferredSlot, wait_until};
use crate::driver::IndicatorDriver;
use crate::event::{Event, EventSubscriber, LayerChangeEvent, LedIndicatorEvent};

/// Keeps the indicator hardware in sync with the active layer, and turns it
/// off after a fixed idle period on the base layer.
///
/// Lock-key events write the discrete LEDs directly, bypassing the layer
/// mapping; on hardware where both channels share the same LEDs the later
/// write wins.
pub struct LayerIndicatorController<D: IndicatorDriver, const NUM_LAYER: usize> {
    driver: D,
    config: LayerIndicatorConfig<NUM_LAYER>,
    previous_layer: Option<u8>,
    sleep: DeferredSlot,
}

impl<D: IndicatorDriver, const NUM_LAYER: usize> LayerIndicatorController<D, NUM_LAYER> {
    pub fn new(driver: D, config: LayerIndicatorConfig<NUM_LAYER>) -> Self {
        Self {
            driver,
            config,
            previous_layer: None,
            sleep: DeferredSlot::new(),
        }
    }

    /// Mapping entry for `layer`; layers outside the map read as all-off.
    fn state_for(&self, layer: u8) -> IndicatorState {
        match self.config.map.get(layer as usize) {
            Some(state) => *state,
            None => IndicatorState::Off,
        }
    }

    fn apply(&mut self, state: IndicatorState) {
        match state {
            IndicatorState::Off => self.driver.disable(),
            IndicatorState::Color(color) => {
                self.driver.enable();
                self.driver.set_color(color);
            }
            IndicatorState::Leds(flags) => {
                self.driver.enable();
                for index in 0..NUM_INDICATOR_LEDS {
                    self.driver.set_led(index, flags.led(index));
                }
            }
        }
    }

    /// Handle a resolved-layer transition.
    ///
    /// Repeats of the current layer are ignored: the indicator is not
    /// rewritten and the sleep timer is neither re-armed nor extended.
    pub fn on_layer_change(&mut self, layer: u8) {
        if self.previous_layer == Some(layer) {
            return;
        }
        self.previous_layer = Some(layer);

        let state = self.state_for(layer);
        debug!("layer {} resolved, indicator {:?}", layer, state);
        self.apply(state);

        // On the base layer show its state and go dark after the idle
        // timeout; on any other layer stay lit for as long as it is active.
        if layer == self.config.base_layer {
            self.sleep.schedule(self.config.sleep_timeout);
        } else {
            self.sleep.cancel();
        }
    }

    /// Handle the idle timeout on the base layer.
    pub fn on_sleep_timeout(&mut self) {
        debug!("indicator idle timeout, going dark");
        self.driver.disable();
        self.sleep.cancel();
    }

    /// Apply host lock-key state to the discrete LEDs.
    pub fn on_lock_keys_change(&mut self, indicator: LedIndicator) {
        debug!("lock keys {:?}", indicator);
        for index in 0..NUM_INDICATOR_LEDS {
            self.driver.set_led(index, indicator.led(index));
        }
    }
}

impl<D: IndicatorDriver, const NUM_LAYER: usize> Runnable for LayerIndicatorController<D, NUM_LAYER> {
    async fn run(&mut self) -> ! {
        // Boot as if the base layer had just been resolved; this also arms
        // the idle timer. Seed the lock LEDs if the host already reported.
        self.on_layer_change(self.config.base_layer);
        if let Some(locks) = self.config.initial_locks {
            self.on_lock_keys_change(locks);
        }

        let mut layers = LayerChangeEvent::subscriber();
        let mut locks = LedIndicatorEvent::subscriber();
        loop {
            let deadline = self.sleep.deadline();
            match select3(wait_until(deadline), layers.next_event(), locks.next_event()).await {
                Either3::First(()) => self.on_sleep_timeout(),
                Either3::Second(event) => self.on_layer_change(event.layer),
                Either3::Third(event) => self.on_lock_keys_change(event.indicator),
            }
        }
    }
}
