//! Synchronous change notification.
//!
//! A [`Signal`] is a list of listeners ("slots") that all receive the same
//! value when the signal is emitted. The sortable store emits one after
//! every effective write and the root emits one per announcement.
//!
//! Slots run on the emitting thread, before `emit` returns, in the order
//! they were connected. Nothing is queued or deferred.
//!
//! ```
//! use horizon_sortable_core::Signal;
//!
//! let order_changed = Signal::<Vec<&str>>::new();
//! let id = order_changed.connect(|order| println!("now: {order:?}"));
//!
//! assert_eq!(order_changed.emit(vec!["b", "a"]), 1);
//! order_changed.disconnect(id);
//! assert_eq!(order_changed.emit(vec!["a", "b"]), 0);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;

new_key_type! {
    /// Handle for one connected slot, returned by [`Signal::connect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    slot: Slot<Args>,
    /// Connection order; slotmap reuses freed keys so key order is not it.
    seq: u64,
}

struct Connections<Args> {
    slots: SlotMap<ConnectionId, Connection<Args>>,
    next_seq: u64,
}

impl<Args> Connections<Args> {
    fn snapshot(&self) -> Vec<Slot<Args>> {
        let mut ordered: Vec<_> = self.slots.values().collect();
        ordered.sort_unstable_by_key(|connection| connection.seq);
        ordered
            .into_iter()
            .map(|connection| connection.slot.clone())
            .collect()
    }
}

/// A list of listeners notified with `&Args` on every emission.
///
/// Emission works on a snapshot of the connected slots, so a slot may
/// connect or disconnect listeners of the same signal; the change applies
/// from the next emission on.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal without listeners.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections {
                slots: SlotMap::with_key(),
                next_seq: 0,
            }),
        }
    }

    /// Adds a listener.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let seq = connections.next_seq;
        connections.next_seq += 1;
        connections.slots.insert(Connection {
            slot: Arc::new(slot),
            seq,
        })
    }

    /// Adds a listener that is removed when the returned guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Removes a listener. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().slots.remove(id).is_some()
    }

    /// Removes a listener, failing on an unknown id.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        match self.disconnect(id) {
            true => Ok(()),
            false => Err(SignalError::InvalidConnection),
        }
    }

    /// Number of connected listeners.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// Calls every listener with `args`. Returns how many were called.
    pub fn emit(&self, args: Args) -> usize {
        let slots = self.connections.lock().snapshot();
        tracing::trace!(
            target: "horizon_sortable_core::signal",
            listeners = slots.len(),
            "emit"
        );
        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.connections.lock().slots.len())
            .finish()
    }
}

/// Disconnects its listener when dropped. See [`Signal::connect_scoped`].
///
/// ```
/// use horizon_sortable_core::Signal;
///
/// let announced = Signal::<String>::new();
/// {
///     let _guard = announced.connect_scoped(|text| println!("{text}"));
///     assert_eq!(announced.connection_count(), 1);
/// }
/// assert_eq!(announced.connection_count(), 0);
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&String) + Send + Sync + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |text: &String| sink.lock().push(text.clone()))
    }

    #[test]
    fn test_emit_reaches_every_listener() {
        let announced = Signal::<String>::new();
        let (first, slot_a) = recorder();
        let (second, slot_b) = recorder();
        announced.connect(slot_a);
        announced.connect(slot_b);

        assert_eq!(announced.emit("Picked up a.".into()), 2);
        assert_eq!(*first.lock(), vec!["Picked up a."]);
        assert_eq!(*second.lock(), vec!["Picked up a."]);
    }

    #[test]
    fn test_disconnect() {
        let announced = Signal::<String>::new();
        let (log, slot) = recorder();
        let id = announced.connect(slot);

        announced.emit("one".into());
        assert!(announced.disconnect(id));
        announced.emit("two".into());

        assert_eq!(*log.lock(), vec!["one"]);
        assert_eq!(announced.try_disconnect(id), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn test_order_survives_key_reuse() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let listen = |n: u8| {
            let order = order.clone();
            move |_: &()| order.lock().push(n)
        };

        let first = signal.connect(listen(1));
        signal.connect(listen(2));
        signal.disconnect(first);
        // Likely lands in the slot `first` vacated.
        signal.connect(listen(3));

        signal.emit(());
        assert_eq!(*order.lock(), vec![2, 3]);
    }

    #[test]
    fn test_listener_may_connect_during_emit() {
        let signal = Arc::new(Signal::<u32>::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&signal);
        let late = seen.clone();
        signal.connect(move |_| {
            if let Some(signal) = weak.upgrade() {
                let late = late.clone();
                signal.connect(move |n| late.lock().push(*n));
            }
        });

        assert_eq!(signal.emit(1), 1);
        assert!(seen.lock().is_empty());
        signal.emit(2);
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_scoped_connection() {
        let announced = Signal::<String>::new();
        let (log, slot) = recorder();
        {
            let guard = announced.connect_scoped(slot);
            assert!(announced.connection_count() == 1);
            announced.emit("inside".into());
            let _ = guard.id();
        }
        announced.emit("outside".into());

        assert_eq!(*log.lock(), vec!["inside"]);
        assert_eq!(announced.connection_count(), 0);
    }
}
