//! Edge-event filtering and sequence extension.
//!
//! The extender owns the [`ItemSequence`] and is the only component that
//! mutates it. It receives timestamped edge events from the viewport side,
//! filters out duplicates of a crossing it has already served, and grows the
//! sequence by one batch per accepted event.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sequence::ItemSequence;

/// Which boundary of the loaded range an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// A detected edge-proximity crossing, stamped in seconds since the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeEvent {
    pub side: Side,
    pub timestamp: f64,
}

/// Two same-side events whose timestamps differ by no more than this (in
/// seconds) are treated as one physical crossing: the first is served, the
/// rest are rejected.
pub const EDGE_EVENT_DISTINCT_WINDOW: f64 = 0.05;

/// Result of handing an edge event to the extender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtensionOutcome {
    /// Accepted: the sequence grew by exactly `added` items on the event's
    /// side. The caller applies offset compensation from this count.
    Extended { added: usize },
    /// Duplicate of a recently accepted crossing; nothing changed. The
    /// caller clears the pending flag for that side.
    Rejected,
}

/// Owns the item sequence and turns edge events into batch extensions.
///
/// Cheap to clone - clones share the same underlying state, so the pager
/// facade and test drivers can hold handles to one extender.
#[derive(Clone)]
pub struct SequenceExtender {
    inner: Rc<RefCell<ExtenderInner>>,
}

struct ExtenderInner {
    items: ItemSequence,
    load_size: usize,
    /// Timestamp of the last accepted event, per side (Left = 0, Right = 1).
    last_accepted: [Option<f64>; 2],
}

impl SequenceExtender {
    /// Creates an extender over a fresh centered sequence.
    pub fn new(origin: i64, load_size: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ExtenderInner {
                items: ItemSequence::centered(origin, load_size),
                load_size,
                last_accepted: [None, None],
            })),
        }
    }

    /// Items added per accepted extension.
    pub fn load_size(&self) -> usize {
        self.inner.borrow().load_size
    }

    /// Current item count.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Always false: the sequence never shrinks below its initial batch.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Copies the current labels for rendering or inspection.
    pub fn items_snapshot(&self) -> Vec<i64> {
        self.inner.borrow().items.to_vec()
    }

    /// Runs `f` against the live sequence without copying it.
    pub fn with_items<R>(&self, f: impl FnOnce(&ItemSequence) -> R) -> R {
        f(&self.inner.borrow().items)
    }

    /// Handles one edge event.
    ///
    /// The event is accepted when its side has no previously accepted event
    /// or the timestamps differ by more than [`EDGE_EVENT_DISTINCT_WINDOW`].
    /// On acceptance the timestamp is recorded, the sequence grows by
    /// `load_size` on that side, and the exact count added is returned.
    /// Near-simultaneous repeats are duplicates of a crossing already being
    /// served and are rejected without mutation.
    pub fn on_edge_event(&self, event: EdgeEvent) -> ExtensionOutcome {
        let mut inner = self.inner.borrow_mut();
        let slot = event.side.index();

        if let Some(last) = inner.last_accepted[slot] {
            let delta = (event.timestamp - last).abs();
            if delta <= EDGE_EVENT_DISTINCT_WINDOW {
                log::trace!(
                    "edge event rejected as duplicate: side={:?} dt={delta:.3}s",
                    event.side
                );
                return ExtensionOutcome::Rejected;
            }
        }
        inner.last_accepted[slot] = Some(event.timestamp);

        let count = inner.load_size;
        let added = match event.side {
            Side::Left => inner.items.extend_front(count),
            Side::Right => inner.items.extend_back(count),
        };
        log::debug!(
            "extended {:?} by {added} items, range now {}..={}",
            event.side,
            inner.items.first(),
            inner.items.last()
        );
        ExtensionOutcome::Extended { added }
    }
}
