//! Delivery of committed-operation notifications.

use crate::events::AmmEvent;

/// Receives an [`AmmEvent`] after each committed operation.
///
/// Sinks observe; they cannot veto. A rejected operation emits nothing.
pub trait EventSink {
    /// Accepts one event.
    fn emit(&mut self, event: AmmEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: AmmEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: AmmEvent) {}
}

/// Keeps every event in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<AmmEvent>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events received so far.
    #[must_use]
    pub fn events(&self) -> &[AmmEvent] {
        &self.events
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&AmmEvent> {
        self.events.last()
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<AmmEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: AmmEvent) {
        self.events.push(event);
    }
}
