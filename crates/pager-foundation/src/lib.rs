//! Bidirectional infinite-scroll pager core.
//!
//! A horizontally paging view scrolls over an ordered sequence of labeled
//! items. When the host reports a scroll position within one batch of either
//! boundary, the sequence transparently grows on that side - prepending
//! shifts the scroll offset by the exact number of items added so the
//! visible page never jumps.
//!
//! Two collaborating pieces, plus a facade that wires them together:
//!
//! - [`PagerViewportState`]: holds the scroll offset and the per-side
//!   loading flags, detects edge proximity, and applies offset compensation
//!   once an extension completes.
//! - [`SequenceExtender`]: owns the [`ItemSequence`], filters duplicate edge
//!   events by timestamp, and performs the batch mutations.
//! - [`InfinitePager`]: runs the control loop for one scroll callback and
//!   notifies registered data-updated callbacks.
//!
//! Everything is single-threaded and synchronous; state handles are cheap
//! `Clone`s over shared interiors, so one pager can be referenced from the
//! host's render and input paths alike.
//!
//! ```
//! use pager_foundation::{InfinitePager, PagerConfig};
//!
//! let pager = InfinitePager::new(PagerConfig::default());
//! assert_eq!(pager.items(), (-5..=5).collect::<Vec<i64>>());
//! assert_eq!(pager.offset(), 5.0);
//!
//! // Scroll into the left trigger zone: five items are prepended and the
//! // offset shifts by five pages, so the visible page does not move.
//! pager.set_scroll_offset_at(4.5, 100.0);
//! assert_eq!(pager.items(), (-10..=5).collect::<Vec<i64>>());
//! assert_eq!(pager.offset(), 9.5);
//! ```

pub mod extender;
pub mod pager;
pub mod sequence;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use extender::{
    EdgeEvent, ExtensionOutcome, SequenceExtender, Side, EDGE_EVENT_DISTINCT_WINDOW,
};
pub use pager::{DataUpdate, InfinitePager};
pub use sequence::ItemSequence;
pub use viewport::{PagerConfig, PagerViewportState};
