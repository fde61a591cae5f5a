//! Synchronous event dispatch in registration order.

use crate::event::InputEvent;
use crate::page::Page;

/// A subscriber to page input events.
pub trait Handler {
    /// React to one event, mutating element styles as needed.
    ///
    /// Handlers run synchronously on the publisher's turn and at pointer
    /// frequency, so they must be O(1) and allocation-free in the steady
    /// state.
    fn handle(&mut self, event: &InputEvent, page: &mut Page);
}

/// Publishes events to subscribers in the order they subscribed.
///
/// There is exactly one delivery order and it never changes after setup;
/// when two handlers write the same style property, the later subscriber
/// wins.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    /// Deliver `event` to every subscriber, synchronously, in registration
    /// order.
    pub fn publish(&mut self, event: &InputEvent, page: &mut Page) {
        for handler in &mut self.handlers {
            handler.handle(event, page);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}
