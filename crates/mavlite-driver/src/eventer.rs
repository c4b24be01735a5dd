use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::channel::{Channel, Event};

/// Handle returned by every subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&Event) + Send + Sync>;
type OnceCallback = Box<dyn FnOnce(&Event) + Send>;

enum Subscriber {
    Repeating(Callback),
    Once(OnceCallback),
    Buffered(SyncSender<Event>),
}

struct Entry {
    id: SubscriptionId,
    channel: Channel,
    subscriber: Subscriber,
}

/// Channel-keyed subscriber registry.
///
/// Callbacks run synchronously on the publishing thread, in registration
/// order, after the registry lock has been released; subscribing or
/// unsubscribing from inside a callback is fine. Buffered subscribers get a
/// bounded queue: when it is full the event is dropped for that subscriber,
/// so a slow consumer never stalls the publisher and never sees events out
/// of order.
pub struct Eventer {
    next_id: AtomicU64,
    entries: Mutex<Vec<Entry>>,
    dropped: AtomicU64,
}

impl Eventer {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
            dropped: AtomicU64::new(0),
        }
    }

    /// Call `callback` for every event on `channel`.
    pub fn subscribe<F>(&self, channel: Channel, callback: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.register(channel, Subscriber::Repeating(Arc::new(callback)))
    }

    /// Call `callback` for the next event on `channel` only.
    ///
    /// The subscription is removed under the registry lock before the
    /// callback runs, so concurrent publishers cannot deliver twice.
    pub fn subscribe_once<F>(&self, channel: Channel, callback: F) -> SubscriptionId
    where
        F: FnOnce(&Event) + Send + 'static,
    {
        self.register(channel, Subscriber::Once(Box::new(callback)))
    }

    /// Queue events on `channel` into a bounded buffer of `capacity` events.
    ///
    /// Dropping the receiver ends the subscription at the next publish.
    pub fn subscribe_buffered(
        &self,
        channel: Channel,
        capacity: usize,
    ) -> (SubscriptionId, Receiver<Event>) {
        let (tx, rx) = mpsc::sync_channel(capacity);
        let id = self.register(channel, Subscriber::Buffered(tx));
        (id, rx)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.lock()
            .iter()
            .filter(|entry| entry.channel == channel)
            .count()
    }

    /// Events discarded because a buffered subscriber was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Deliver `event` to every subscriber of its channel. Returns the
    /// number of subscribers that received it.
    pub fn publish(&self, event: &Event) -> usize {
        let channel = event.channel();
        let mut repeating: Vec<Callback> = Vec::new();
        let mut once: Vec<OnceCallback> = Vec::new();
        let mut delivered = 0usize;

        {
            let mut entries = self.lock();
            let mut index = 0;
            while index < entries.len() {
                if entries[index].channel != channel {
                    index += 1;
                    continue;
                }
                match &entries[index].subscriber {
                    Subscriber::Repeating(callback) => {
                        repeating.push(Arc::clone(callback));
                        index += 1;
                    }
                    Subscriber::Once(_) => {
                        if let Subscriber::Once(callback) = entries.remove(index).subscriber {
                            once.push(callback);
                        }
                    }
                    Subscriber::Buffered(tx) => match tx.try_send(event.clone()) {
                        Ok(()) => {
                            delivered += 1;
                            index += 1;
                        }
                        Err(TrySendError::Full(_)) => {
                            self.dropped.fetch_add(1, Ordering::Relaxed);
                            warn!(
                                subscription = entries[index].id.0,
                                %channel,
                                "buffered subscriber full, dropping event"
                            );
                            index += 1;
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            debug!(
                                subscription = entries[index].id.0,
                                %channel,
                                "buffered subscriber gone, unsubscribing"
                            );
                            entries.remove(index);
                        }
                    },
                }
            }
        }

        for callback in &repeating {
            callback(event);
        }
        delivered += repeating.len() + once.len();
        for callback in once {
            callback(event);
        }
        delivered
    }

    fn register(&self, channel: Channel, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push(Entry {
            id,
            channel,
            subscriber,
        });
        debug!(subscription = id.0, %channel, "subscribed");
        id
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Eventer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Eventer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eventer")
            .field("subscribers", &self.lock().len())
            .field("dropped", &self.dropped())
            .finish()
    }
}
