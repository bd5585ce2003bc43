#![forbid(unsafe_code)]

//! `accdn-web` hosts accdn accordions inside a page driven by its embedder.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes input events and size changes.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`. It provides the [`Page`] that
//! owns every accordion instance, the [`BatchToggle`] handles external
//! buttons hold, and [`RevealTransitions`], the animated transition the page
//! installs into each instance.

pub mod page;
pub mod reveal;

use core::time::Duration;

use accdn_widgets::AttachError;

pub use page::{BatchToggle, InstanceId, Page, PageEvent};
pub use reveal::{RevealCompleted, RevealTransitions};

/// Page adapter error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A container with this id is already attached.
    DuplicateContainer(String),
    /// No attached container has this id.
    UnknownContainer(String),
    /// The widget refused the container.
    Attach(AttachError),
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateContainer(id) => write!(f, "container {id:?} is already attached"),
            Self::UnknownContainer(id) => write!(f, "no accordion attached to container {id:?}"),
            Self::Attach(err) => write!(f, "attach failed: {err}"),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Attach(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AttachError> for PageError {
    fn from(err: AttachError) -> Self {
        Self::Attach(err)
    }
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accdn_widgets::ConfigError;

    use pretty_assertions::assert_eq;

    #[test]
    fn deterministic_clock_advances_monotonically() {
        let mut c = DeterministicClock::new();
        assert_eq!(c.now(), Duration::ZERO);

        c.advance(Duration::from_millis(10));
        c.advance(Duration::from_millis(5));
        assert_eq!(c.now(), Duration::from_millis(15));

        // Saturation: don't panic or wrap.
        c.advance(Duration::MAX);
        c.advance(Duration::from_secs(1));
        assert_eq!(c.now(), Duration::MAX);
    }

    #[test]
    fn page_error_messages_and_source() {
        use std::error::Error as _;

        let dup = PageError::DuplicateContainer("faq".into());
        assert_eq!(dup.to_string(), r#"container "faq" is already attached"#);
        assert!(dup.source().is_none());

        let attach = PageError::from(AttachError::Config(ConfigError::ZeroBreakpoint));
        assert!(attach.to_string().starts_with("attach failed: "));
        assert!(attach.source().is_some());
    }
}
