//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{LifecycleEvent, RewardEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle and campaign lifecycle markers
    Lifecycle,
    /// Per-cycle resolution reports
    Turn,
    /// Victory payouts and advancement
    Reward,
}

/// Event wrapper that carries the topic and typed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Lifecycle(LifecycleEvent),
    Turn(TurnEvent),
    Reward(RewardEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Lifecycle(_) => Topic::Lifecycle,
            Event::Turn(_) => Topic::Turn,
            Event::Reward(_) => Topic::Reward,
        }
    }
}

/// Topic-based event bus
///
/// Consumers subscribe to specific topics and only receive events they
/// care about. Publishing is best-effort: a topic nobody listens to drops
/// its events.
#[derive(Clone)]
pub struct EventBus {
    lifecycle: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
    reward: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lifecycle: broadcast::channel(capacity).0,
            turn: broadcast::channel(capacity).0,
            reward: broadcast::channel(capacity).0,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that only sees events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Lifecycle => &self.lifecycle,
            Topic::Turn => &self.turn,
            Topic::Reward => &self.reward,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
