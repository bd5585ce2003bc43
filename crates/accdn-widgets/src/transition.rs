//! Visual transition capability supplied by the rendering layer.
//!
//! The controller decides *what* becomes visible; a [`Transition`] decides
//! *how* it gets there. Transitions are fire-and-forget: the controller never
//! waits for one to finish, and an implementation must let a new transition
//! on a panel interrupt whatever is still running on that panel (stop the
//! current animation, then run the new one).
//!
//! Completion, when a host cares about it, is reported by the
//! implementation itself (see the reveal transitions of the web adapter).

use std::time::Duration;

use crate::accordion::PanelId;

/// How a visibility change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Jump to the final state: initial state correction, layout changes.
    Immediate,
    /// Slide over the configured duration: user-driven changes.
    Animated,
}

/// Target visibility of a panel's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Content region fully visible.
    Shown,
    /// Content region collapsed.
    Hidden,
}

/// Applies visibility changes to panel content regions.
pub trait Transition {
    /// Begin moving `panel`'s content toward `visibility`.
    ///
    /// `duration` is meaningful only for [`TransitionKind::Animated`].
    fn start(
        &mut self,
        panel: PanelId,
        visibility: Visibility,
        kind: TransitionKind,
        duration: Duration,
    );
}

impl<T: Transition + ?Sized> Transition for &mut T {
    fn start(
        &mut self,
        panel: PanelId,
        visibility: Visibility,
        kind: TransitionKind,
        duration: Duration,
    ) {
        (**self).start(panel, visibility, kind, duration);
    }
}

impl<T: Transition + ?Sized> Transition for Box<T> {
    fn start(
        &mut self,
        panel: PanelId,
        visibility: Visibility,
        kind: TransitionKind,
        duration: Duration,
    ) {
        (**self).start(panel, visibility, kind, duration);
    }
}

/// A transition that does nothing; for headless use where only state matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransition;

impl Transition for NoopTransition {
    fn start(&mut self, _: PanelId, _: Visibility, _: TransitionKind, _: Duration) {}
}

/// One recorded [`Transition::start`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCall {
    /// Panel whose content moves.
    pub panel: PanelId,
    /// Where it is heading.
    pub visibility: Visibility,
    /// Immediate or animated.
    pub kind: TransitionKind,
    /// Requested duration.
    pub duration: Duration,
}

/// Records every transition request, in order.
#[derive(Debug, Clone, Default)]
pub struct TransitionLog {
    calls: Vec<TransitionCall>,
}

impl TransitionLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[TransitionCall] {
        &self.calls
    }

    /// Take all recorded calls.
    pub fn drain(&mut self) -> Vec<TransitionCall> {
        std::mem::take(&mut self.calls)
    }

    /// Last requested visibility for `panel`, if any.
    #[must_use]
    pub fn last_visibility(&self, panel: PanelId) -> Option<Visibility> {
        self.calls
            .iter()
            .rev()
            .find(|call| call.panel == panel)
            .map(|call| call.visibility)
    }
}

impl Transition for TransitionLog {
    fn start(
        &mut self,
        panel: PanelId,
        visibility: Visibility,
        kind: TransitionKind,
        duration: Duration,
    ) {
        self.calls.push(TransitionCall {
            panel,
            visibility,
            kind,
            duration,
        });
    }
}
