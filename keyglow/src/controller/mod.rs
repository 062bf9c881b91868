//! Runtime traits for event consumers.
//!
//! `crate::event` defines how event types are published and subscribed;
//! `Controller` defines how a task consumes them: the core consume loop is
//! `subscriber` -> `next_event` -> `process_event`. Controllers that combine
//! several subscriptions or a timer (like the layer indicator) implement
//! [`Runnable`] with their own select loop instead.

pub mod layer_indicator;
pub mod lock_led;

use crate::event::{Event, EventSubscriber};

/// A unit of work that runs forever on the firmware's executor.
pub trait Runnable {
    async fn run(&mut self) -> !;
}

/// Interface for individual output-device controllers.
pub trait Controller: Runnable {
    /// Type of the received events.
    type Event: Event;

    /// Create a new event subscriber.
    fn subscriber() -> <Self::Event as Event>::Subscriber {
        Self::Event::subscriber()
    }

    /// Process one received event.
    async fn process_event(&mut self, event: Self::Event);
}

/// The trait for event-driven controllers.
///
/// Automatically implemented for all types that implement `Controller`; it
/// provides the default `event_loop()` that continuously waits for events
/// and processes them.
pub trait EventController: Controller {
    async fn event_loop(&mut self) -> ! {
        let mut sub = Self::subscriber();
        loop {
            let event = sub.next_event().await;
            self.process_event(event).await;
        }
    }
}

// Auto impl `EventController` for all `Controller`
impl<T: Controller> EventController for T {}
