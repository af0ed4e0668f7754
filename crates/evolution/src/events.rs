//! Engine event fan-out.

use evocycle_core::EngineEvent;
use tokio::sync::broadcast;
use tracing::trace;

/// Broadcasts engine events to any number of subscribers.
///
/// Publishing never blocks and never fails. With no subscribers the event is
/// dropped; a subscriber that falls more than the channel capacity behind
/// sees `RecvError::Lagged` and skips ahead.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EngineEvent>,
}

impl EventBus {
    /// Create a bus. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event. Returns the number of subscribers reached.
    pub fn publish(&self, event: EngineEvent) -> usize {
        let kind = event.kind();
        let reached = self.sender.send(event).unwrap_or(0);
        trace!(event = kind, subscribers = reached, "Published event");
        reached
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
