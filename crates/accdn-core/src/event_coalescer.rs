#![forbid(unsafe_code)]

//! Resize coalescing for high-frequency viewport events.
//!
//! Browsers fire a resize event for nearly every pixel while a window edge
//! is dragged. Every one of them would re-evaluate the display mode of each
//! accordion on the page. Mode evaluation is idempotent, so only the latest
//! size of a burst matters.
//!
//! [`ResizeCoalescer`] keeps the latest pending resize and passes every
//! other event through immediately. The caller flushes pending resizes at a
//! point of its choosing (end of an input batch, next animation frame).
//!
//! # Usage
//!
//! ```
//! use accdn_core::event_coalescer::ResizeCoalescer;
//! use accdn_core::event::{Event, KeyEvent, KeyCode};
//!
//! let mut coalescer = ResizeCoalescer::new();
//!
//! assert!(coalescer.push(Event::Resize { width: 640, height: 480 }).is_none());
//! assert!(coalescer.push(Event::Resize { width: 900, height: 480 }).is_none());
//!
//! // Non-coalescable events pass through immediately (no auto-flush)
//! let result = coalescer.push(Event::Key(KeyEvent::new(KeyCode::Enter)));
//! assert!(result.is_some());
//!
//! assert_eq!(coalescer.flush(), Some(Event::Resize { width: 900, height: 480 }));
//! assert_eq!(coalescer.flush(), None);
//! ```

use crate::event::Event;

/// Coalesces bursts of resize events, latest size wins.
///
/// Not thread-safe; used from the single event-dispatch thread.
#[derive(Debug, Clone, Default)]
pub struct ResizeCoalescer {
    pending: Option<(u32, u32)>,
    /// Number of resize events folded into the pending one.
    coalesced: u32,
}

impl ResizeCoalescer {
    /// Create a new coalescer with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event into the coalescer.
    ///
    /// Returns `Some(event)` if the event should be processed immediately,
    /// or `None` if it was a resize and is now pending.
    ///
    /// Flush is NOT automatic when a non-resize event arrives; the caller
    /// decides whether pending resizes must be applied first.
    pub fn push(&mut self, event: Event) -> Option<Event> {
        match event {
            Event::Resize { width, height } => {
                if self.pending.is_some() {
                    self.coalesced = self.coalesced.saturating_add(1);
                }
                self.pending = Some((width, height));
                None
            }
            other => Some(other),
        }
    }

    /// Whether a resize is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of resize events dropped in favor of a later one since the last flush.
    #[must_use]
    pub fn coalesced_count(&self) -> u32 {
        self.coalesced
    }

    /// Take the pending resize, if any.
    pub fn flush(&mut self) -> Option<Event> {
        self.coalesced = 0;
        self.pending
            .take()
            .map(|(width, height)| Event::Resize { width, height })
    }
}
