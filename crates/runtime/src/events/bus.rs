//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::GameEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Registrations and deletions
    Account,
    /// Executed and rejected household actions
    Action,
}

struct Channels {
    account: broadcast::Sender<GameEvent>,
    action: broadcast::Sender<GameEvent>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<GameEvent> {
        match topic {
            Topic::Account => &self.account,
            Topic::Action => &self.action,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while
/// nobody listens are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                account: broadcast::channel(capacity).0,
                action: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: GameEvent) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.channels.get(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamster_core::AccountId;

    #[tokio::test]
    async fn events_are_routed_by_topic() {
        let bus = EventBus::with_capacity(4);
        let mut accounts = bus.subscribe(Topic::Account);
        let mut actions = bus.subscribe(Topic::Action);

        bus.publish(GameEvent::AccountRegistered {
            account: AccountId(1),
            email: "a@b.io".into(),
        });

        let event = accounts.recv().await.unwrap();
        assert_eq!(event.account(), AccountId(1));
        assert!(actions.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(GameEvent::AccountRegistered {
            account: AccountId(1),
            email: "a@b.io".into(),
        });
    }
}
