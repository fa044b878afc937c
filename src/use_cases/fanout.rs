// Lossless fan-out of world updates to the downstream consumers (serializer, audio).

use super::types::WorldUpdate;
use tokio::sync::mpsc;
use tracing::debug;

/// Delivers every update to every live subscriber, waiting while a subscriber's queue is full.
///
/// A subscriber whose receiver is gone is dropped on the next publish.
#[derive(Debug, Default)]
pub struct WorldFanout {
    subscribers: Vec<mpsc::Sender<WorldUpdate>>,
}

impl WorldFanout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, capacity: usize) -> mpsc::Receiver<WorldUpdate> {
        let (tx, rx) = mpsc::channel(capacity);
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub async fn publish(&mut self, update: WorldUpdate) {
        let mut open = Vec::with_capacity(self.subscribers.len());
        for tx in self.subscribers.drain(..) {
            if tx.send(update.clone()).await.is_ok() {
                open.push(tx);
            } else {
                debug!(tick = update.state.tick, "world update subscriber closed");
            }
        }
        self.subscribers = open;
    }
}
