//! Pager facade wiring the viewport state to the sequence extender.
//!
//! One scroll callback runs the whole loop synchronously: edge detection,
//! duplicate filtering, sequence extension, offset compensation from the
//! returned count, data-updated notification, and flag acknowledgment.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::extender::{ExtensionOutcome, SequenceExtender, Side};
use crate::viewport::{PagerConfig, PagerViewportState};

static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Payload delivered to data-updated callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataUpdate {
    /// Which side grew.
    pub side: Side,
    /// Exactly how many items were added.
    pub added: usize,
    /// Item count after the extension.
    pub item_count: usize,
}

/// Bidirectional infinite pager.
///
/// Clones share state. The host drives it with scroll positions and reads
/// the item snapshot plus the (already compensated) offset back out; the
/// backing sequence extends itself near either edge with no visible jump.
#[derive(Clone)]
pub struct InfinitePager {
    viewport: PagerViewportState,
    extender: SequenceExtender,
    data_updated_callbacks: Rc<RefCell<HashMap<u64, Rc<dyn Fn(&DataUpdate)>>>>,
}

impl InfinitePager {
    pub fn new(config: PagerConfig) -> Self {
        Self {
            viewport: PagerViewportState::new(config),
            extender: SequenceExtender::new(config.origin, config.load_size),
            data_updated_callbacks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn viewport(&self) -> &PagerViewportState {
        &self.viewport
    }

    pub fn extender(&self) -> &SequenceExtender {
        &self.extender
    }

    /// Snapshot of the loaded labels, one page per label.
    pub fn items(&self) -> Vec<i64> {
        self.extender.items_snapshot()
    }

    pub fn len(&self) -> usize {
        self.extender.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extender.is_empty()
    }

    /// Current scroll offset in host units, compensation included.
    pub fn offset(&self) -> f32 {
        self.viewport.offset()
    }

    /// Registers a callback fired after every accepted extension, before the
    /// loading flags are cleared. Returns an id for removal.
    pub fn add_data_updated_callback(&self, callback: Rc<dyn Fn(&DataUpdate)>) -> u64 {
        let id = NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed);
        self.data_updated_callbacks.borrow_mut().insert(id, callback);
        id
    }

    /// Removes a previously registered data-updated callback.
    pub fn remove_data_updated_callback(&self, id: u64) {
        self.data_updated_callbacks.borrow_mut().remove(&id);
    }

    /// Feeds a scroll position stamped with the current wall-clock time.
    pub fn set_scroll_offset(&self, offset: f32) {
        self.set_scroll_offset_at(offset, now_epoch_seconds());
    }

    /// Feeds a scroll position with an explicit timestamp (epoch seconds).
    ///
    /// Test drivers and replay tooling use this to make the duplicate
    /// filter deterministic.
    pub fn set_scroll_offset_at(&self, offset: f32, timestamp: f64) {
        let events = self
            .viewport
            .on_scroll_position_changed(offset, self.extender.len(), timestamp);

        for event in events {
            match self.extender.on_edge_event(event) {
                ExtensionOutcome::Extended { added } => {
                    self.viewport.apply_extension(event.side, added);
                    let update = DataUpdate {
                        side: event.side,
                        added,
                        item_count: self.extender.len(),
                    };
                    self.notify_data_updated(&update);
                    self.viewport.on_data_updated();
                }
                ExtensionOutcome::Rejected => {
                    self.viewport.on_extension_rejected(event.side);
                }
            }
        }
    }

    fn notify_data_updated(&self, update: &DataUpdate) {
        // Clone callbacks to avoid holding the borrow while calling them:
        // a callback may re-enter pager accessors.
        let callbacks: Vec<Rc<dyn Fn(&DataUpdate)>> = self
            .data_updated_callbacks
            .borrow()
            .values()
            .cloned()
            .collect();

        for callback in callbacks {
            callback(update);
        }
    }
}

fn now_epoch_seconds() -> f64 {
    web_time::SystemTime::now()
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
