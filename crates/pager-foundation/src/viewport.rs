//! Viewport-side scroll state: edge detection, load flags, compensation.
//!
//! This is the host-facing half of the pager. The host feeds it every
//! scroll-position update; it reports edge crossings as [`EdgeEvent`]s and
//! keeps one loading flag per side so a crossing is reported once until the
//! resulting load is acknowledged or rejected.

use std::cell::Cell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::extender::{EdgeEvent, Side};

/// Pager configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Items added per extension, and the buffer kept on each side of the
    /// initial position.
    pub load_size: usize,
    /// Label at the center of the initial sequence.
    pub origin: i64,
    /// Host units per page. The default of 1.0 keeps offsets in page units;
    /// pixel-based hosts pass their page width here.
    pub page_extent: f32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            load_size: 5,
            origin: 0,
            page_extent: 1.0,
        }
    }
}

impl PagerConfig {
    /// Initial item count: one center page plus a batch on each side.
    pub fn initial_len(&self) -> usize {
        2 * self.load_size + 1
    }
}

/// Scroll-position holder with per-side loading flags.
///
/// Clones share the same underlying state. All methods are synchronous and
/// cheap enough for scroll-callback frequency.
#[derive(Clone)]
pub struct PagerViewportState {
    inner: Rc<ViewportInner>,
}

struct ViewportInner {
    config: PagerConfig,
    /// Current scroll offset in host units (`page index * page_extent`).
    offset: Cell<f32>,
    /// True from an accepted left-edge event until data-updated or rejection.
    is_left_loading: Cell<bool>,
    /// Same for the right side; the two flags are independent.
    is_right_loading: Cell<bool>,
}

impl PagerViewportState {
    /// Creates the state with the offset already recentered.
    pub fn new(config: PagerConfig) -> Self {
        let state = Self {
            inner: Rc::new(ViewportInner {
                config,
                offset: Cell::new(0.0),
                is_left_loading: Cell::new(false),
                is_right_loading: Cell::new(false),
            }),
        };
        state.recenter();
        state
    }

    /// Places the offset `load_size` pages from the left so a full batch of
    /// buffer exists on each side before any extension is required.
    pub fn recenter(&self) {
        let inner = &self.inner;
        inner
            .offset
            .set(inner.config.load_size as f32 * inner.config.page_extent);
    }

    pub fn config(&self) -> PagerConfig {
        self.inner.config
    }

    /// Current scroll offset in host units.
    pub fn offset(&self) -> f32 {
        self.inner.offset.get()
    }

    /// Writes the scroll position without edge detection.
    pub fn set_offset(&self, offset: f32) {
        self.inner.offset.set(offset);
    }

    pub fn is_left_loading(&self) -> bool {
        self.inner.is_left_loading.get()
    }

    pub fn is_right_loading(&self) -> bool {
        self.inner.is_right_loading.get()
    }

    fn flag(&self, side: Side) -> &Cell<bool> {
        match side {
            Side::Left => &self.inner.is_left_loading,
            Side::Right => &self.inner.is_right_loading,
        }
    }

    /// Records a new scroll position and reports any edge crossings.
    ///
    /// A side whose loading flag is already set emits nothing until the
    /// pending load is acknowledged or rejected - this hard gate sits in
    /// front of the extender's timestamp filter, so duplicate suppression
    /// never depends on timing alone. The offset is stored as-is; left
    /// compensation is applied later via [`apply_extension`] once the
    /// extender reports the exact count added.
    ///
    /// [`apply_extension`]: Self::apply_extension
    pub fn on_scroll_position_changed(
        &self,
        offset: f32,
        item_count: usize,
        timestamp: f64,
    ) -> SmallVec<[EdgeEvent; 2]> {
        let inner = &self.inner;
        inner.offset.set(offset);

        let margin = inner.config.load_size as f32 * inner.config.page_extent;
        let mut events = SmallVec::new();

        if offset < margin && !inner.is_left_loading.get() {
            inner.is_left_loading.set(true);
            events.push(EdgeEvent {
                side: Side::Left,
                timestamp,
            });
        }

        let content_extent = item_count as f32 * inner.config.page_extent;
        if offset > content_extent - margin && !inner.is_right_loading.get() {
            inner.is_right_loading.set(true);
            events.push(EdgeEvent {
                side: Side::Right,
                timestamp,
            });
        }

        events
    }

    /// Applies the offset compensation for a completed extension.
    ///
    /// Prepending shifts all existing content by `added` pages, so the
    /// offset moves forward by the same amount and the visible page stays
    /// put. Appending moves nothing.
    pub fn apply_extension(&self, side: Side, added: usize) {
        if side == Side::Left {
            let shift = added as f32 * self.inner.config.page_extent;
            self.inner.offset.set(self.inner.offset.get() + shift);
            log::trace!("left extension: offset compensated by +{shift}");
        }
    }

    /// Clears the pending flag for a side whose event was a duplicate.
    pub fn on_extension_rejected(&self, side: Side) {
        self.flag(side).set(false);
    }

    /// Acknowledges a data-updated notification by clearing both flags.
    /// A no-op when nothing is pending.
    pub fn on_data_updated(&self) {
        self.inner.is_left_loading.set(false);
        self.inner.is_right_loading.set(false);
    }
}
