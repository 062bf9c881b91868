//! Event system for keyglow
//!
//! This module provides:
//! - The state events the indicator controllers consume
//! - Event infrastructure (publish/subscribe over static channels)
//!
//! Every event type owns a dedicated static channel; publishing is
//! non-blocking and the oldest queued event is dropped when a channel
//! overflows, so a stalled consumer can only ever see stale state, never
//! block the publisher.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::pubsub::{ImmediatePublisher, Subscriber};

mod state;

pub use state::{LayerChangeEvent, LedIndicatorEvent};

/// Trait for event publishers.
pub trait EventPublisher<T> {
    fn publish(&self, event: T);
}

/// Trait for event subscribers.
pub trait EventSubscriber<T> {
    async fn next_event(&mut self) -> T;
}

/// An event type with its own dedicated channel.
pub trait Event: Clone {
    type Publisher: EventPublisher<Self>;
    type Subscriber: EventSubscriber<Self>;

    fn publisher() -> Self::Publisher;
    fn subscriber() -> Self::Subscriber;
}

/// Publish an event (non-blocking, may lag a slow subscriber if the channel
/// is full).
///
/// Example: `publish_event(LayerChangeEvent { layer: 2 })`
pub fn publish_event<E: Event>(event: E) {
    E::publisher().publish(event);
}

// Implementations for embassy-sync PubSubChannel endpoints
impl<'a, M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventPublisher<T>
    for ImmediatePublisher<'a, M, T, CAP, SUBS, PUBS>
{
    fn publish(&self, event: T) {
        self.publish_immediate(event);
    }
}

impl<'a, M: RawMutex, T: Clone, const CAP: usize, const SUBS: usize, const PUBS: usize> EventSubscriber<T>
    for Subscriber<'a, M, T, CAP, SUBS, PUBS>
{
    async fn next_event(&mut self) -> T {
        self.next_message_pure().await
    }
}
