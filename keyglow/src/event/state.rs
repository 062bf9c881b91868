//! Keyboard state events consumed by the indicator controllers.

use embassy_sync::pubsub::{ImmediatePublisher, PubSubChannel, Subscriber};
use keyglow_types::led_indicator::LedIndicator;

use crate::RawMutex;
use crate::event::Event;

/// Active layer changed.
///
/// Published by the layer-resolution engine once per distinct resolved-layer
/// transition; `layer` is the highest-priority active layer. The channel
/// buffers a short burst of transitions so a fast chord cannot outrun the
/// consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerChangeEvent {
    pub layer: u8,
}

/// Host lock-key state changed.
///
/// Published by the host-communication layer whenever the host reports a new
/// lock-key bitfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedIndicatorEvent {
    pub indicator: LedIndicator,
}

static LAYER_CHANGE_EVENT_CHANNEL: PubSubChannel<RawMutex, LayerChangeEvent, 4, 2, 1> =
    PubSubChannel::new();

static LED_INDICATOR_EVENT_CHANNEL: PubSubChannel<RawMutex, LedIndicatorEvent, 2, 4, 1> =
    PubSubChannel::new();

impl Event for LayerChangeEvent {
    type Publisher = ImmediatePublisher<'static, RawMutex, LayerChangeEvent, 4, 2, 1>;
    type Subscriber = Subscriber<'static, RawMutex, LayerChangeEvent, 4, 2, 1>;

    fn publisher() -> Self::Publisher {
        LAYER_CHANGE_EVENT_CHANNEL.immediate_publisher()
    }

    fn subscriber() -> Self::Subscriber {
        LAYER_CHANGE_EVENT_CHANNEL
            .subscriber()
            .expect("subscriber limit for LayerChangeEvent exceeded")
    }
}

impl Event for LedIndicatorEvent {
    type Publisher = ImmediatePublisher<'static, RawMutex, LedIndicatorEvent, 2, 4, 1>;
    type Subscriber = Subscriber<'static, RawMutex, LedIndicatorEvent, 2, 4, 1>;

    fn publisher() -> Self::Publisher {
        LED_INDICATOR_EVENT_CHANNEL.immediate_publisher()
    }

    fn subscriber() -> Self::Subscriber {
        LED_INDICATOR_EVENT_CHANNEL
            .subscriber()
            .expect("subscriber limit for LedIndicatorEvent exceeded")
    }
}
