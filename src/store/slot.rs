// Observable slot: latest value plus synchronous change visibility for subscribers

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Result of a write into a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Value replaced; subscribers were notified.
    Changed,
    /// New value equal to the stored one; nothing happened.
    Unchanged,
    /// Stamped with a sequence older than the last accepted write; dropped.
    Stale,
}

impl WriteOutcome {
    pub fn is_changed(self) -> bool {
        self == WriteOutcome::Changed
    }
}

/// One named, strongly-typed slot of the telemetry store.
///
/// Backed by a `watch` channel: a write is visible through every receiver
/// (`borrow`, `has_changed`) before the writing call returns. Writes never
/// fail, with or without subscribers.
pub struct Slot<T> {
    tx: watch::Sender<T>,
    next_seq: AtomicU64,
    /// Only read and written while the watch write lock is held.
    last_seq: AtomicU64,
    writes: AtomicU64,
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Slot<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            tx,
            next_seq: AtomicU64::new(0),
            last_seq: AtomicU64::new(0),
            writes: AtomicU64::new(0),
        }
    }

    /// Read without cloning. The closure must not write to this slot.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// New receiver; it sees the current value and every later change.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Number of writes that changed the value.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Stamp for one fetch cycle, for use with the `*_if_newer` writes.
    pub fn next_sequence(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: PartialEq> Slot<T> {
    /// Wholesale replacement. Last writer wins.
    pub fn replace(&self, value: T) -> WriteOutcome {
        self.write(None, |current| swap_if_different(current, value))
    }

    /// Replace a single field or owned sub-object; siblings are untouched.
    pub fn assign<V, F>(&self, field: F, value: V) -> WriteOutcome
    where
        V: PartialEq,
        F: FnOnce(&mut T) -> &mut V,
    {
        self.write(None, |current| swap_if_different(field(current), value))
    }

    /// Like [`Slot::replace`], but dropped when `seq` is older than the last
    /// accepted sequenced write.
    pub fn replace_if_newer(&self, seq: u64, value: T) -> WriteOutcome {
        self.write(Some(seq), |current| swap_if_different(current, value))
    }

    /// Like [`Slot::assign`], but dropped when `seq` is older than the last
    /// accepted sequenced write.
    pub fn assign_if_newer<V, F>(&self, seq: u64, field: F, value: V) -> WriteOutcome
    where
        V: PartialEq,
        F: FnOnce(&mut T) -> &mut V,
    {
        self.write(Some(seq), |current| swap_if_different(field(current), value))
    }

    fn write(&self, seq: Option<u64>, apply: impl FnOnce(&mut T) -> bool) -> WriteOutcome {
        let mut outcome = WriteOutcome::Unchanged;
        self.tx.send_if_modified(|current| {
            if let Some(seq) = seq {
                if seq < self.last_seq.load(Ordering::Relaxed) {
                    outcome = WriteOutcome::Stale;
                    return false;
                }
                self.last_seq.store(seq, Ordering::Relaxed);
            }
            if apply(current) {
                outcome = WriteOutcome::Changed;
                true
            } else {
                false
            }
        });
        if outcome.is_changed() {
            self.writes.fetch_add(1, Ordering::Relaxed);
        }
        outcome
    }
}

fn swap_if_different<V: PartialEq>(target: &mut V, value: V) -> bool {
    if *target == value {
        return false;
    }
    *target = value;
    true
}
