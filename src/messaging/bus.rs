use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
/// Selection bus
///
/// Pub/sub for selection events. Every subscriber gets its own single-slot
/// channel holding only the latest event; the publisher never blocks and never
/// learns whether anyone listened.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::events::SelectionEvent;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct Subscriber {
    id: SubscriberId,
    sender: Sender<SelectionEvent>,
    // Used to evict the pending event when a newer one arrives
    stale: Receiver<SelectionEvent>,
}

/// Broadcasts selection events to subscribers
pub struct SelectionBus {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    next_id: Arc<AtomicUsize>,
}

impl SelectionBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<SelectionEvent>, SubscriberId) {
        let (tx, rx) = bounded(1);
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.subscribers.write().push(Subscriber {
            id,
            sender: tx,
            stale: rx.clone(),
        });

        (rx, id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().retain(|s| s.id != id);
    }

    /// Publish an event to all subscribers, replacing any unread one
    pub fn publish(&self, event: SelectionEvent) {
        tracing::debug!("{}", event.description());

        let subscribers = self.subscribers.read();
        for subscriber in subscribers.iter() {
            if let Err(TrySendError::Full(event)) = subscriber.sender.try_send(event.clone()) {
                let _ = subscriber.stale.try_recv();
                let _ = subscriber.sender.try_send(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl Default for SelectionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SelectionBus {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}
