//! Animated reveal transitions driven by the host clock.
//!
//! [`RevealTransitions`] tracks the visible fraction of every panel's content
//! region (0.0 collapsed, 1.0 fully shown). An animated request slides the
//! fraction toward its target with [`swing`](accdn_core::animation::swing)
//! easing; an immediate one jumps there. A new request on a panel interrupts
//! the running one and resumes from the fraction reached so far.
//!
//! Time only moves when the host calls [`RevealTransitions::tick`].

use std::collections::BTreeMap;
use std::time::Duration;

use accdn_core::animation::{Animation, Reveal};
use accdn_widgets::{PanelId, Transition, TransitionKind, Visibility};

/// A reveal reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCompleted {
    /// Panel whose content settled.
    pub panel: PanelId,
    /// Visibility it settled at.
    pub visibility: Visibility,
}

#[derive(Debug, Clone)]
struct Slot {
    reveal: Reveal,
    visibility: Visibility,
    running: bool,
}

/// [`Transition`] implementation producing per-panel visible fractions.
#[derive(Debug, Clone, Default)]
pub struct RevealTransitions {
    slots: BTreeMap<PanelId, Slot>,
    completed: Vec<RevealCompleted>,
    interrupted: u64,
}

impl RevealTransitions {
    /// No panel tracked yet; untracked panels read as collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visible fraction of `panel`.
    #[must_use]
    pub fn fraction(&self, panel: PanelId) -> f32 {
        self.slots
            .get(&panel)
            .map_or(0.0, |slot| slot.reveal.fraction())
    }

    /// Where `panel` is heading, if it was ever transitioned.
    #[must_use]
    pub fn target(&self, panel: PanelId) -> Option<Visibility> {
        self.slots.get(&panel).map(|slot| slot.visibility)
    }

    /// Whether `panel` is mid-animation.
    #[must_use]
    pub fn is_animating(&self, panel: PanelId) -> bool {
        self.slots.get(&panel).is_some_and(|slot| slot.running)
    }

    /// Number of reveals still running.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.running).count()
    }

    /// Reveals cut short by a newer request since creation.
    #[must_use]
    pub fn interrupted_count(&self) -> u64 {
        self.interrupted
    }

    /// Advance every running reveal by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for (&panel, slot) in &mut self.slots {
            if !slot.running {
                continue;
            }
            slot.reveal.tick(dt);
            if slot.reveal.is_complete() {
                slot.running = false;
                self.completed.push(RevealCompleted {
                    panel,
                    visibility: slot.visibility,
                });
            }
        }
    }

    /// Take the completions reported since the last call, in panel order per tick.
    pub fn drain_completed(&mut self) -> Vec<RevealCompleted> {
        std::mem::take(&mut self.completed)
    }
}

const fn fraction_of(visibility: Visibility) -> f32 {
    match visibility {
        Visibility::Shown => 1.0,
        Visibility::Hidden => 0.0,
    }
}

impl Transition for RevealTransitions {
    fn start(
        &mut self,
        panel: PanelId,
        visibility: Visibility,
        kind: TransitionKind,
        duration: Duration,
    ) {
        // Already shown (or heading there): nothing to animate.
        let heading = self.target(panel).unwrap_or(Visibility::Hidden);
        if kind == TransitionKind::Animated && heading == visibility {
            return;
        }

        let from = self.fraction(panel);
        let to = fraction_of(visibility);
        if self.is_animating(panel) {
            self.interrupted += 1;
        }

        let (reveal, running) = match kind {
            TransitionKind::Animated if !duration.is_zero() => {
                (Reveal::new(from, to, duration), true)
            }
            _ => (Reveal::settled(to), false),
        };
        if !running {
            self.completed.push(RevealCompleted { panel, visibility });
        }
        self.slots.insert(
            panel,
            Slot {
                reveal,
                visibility,
                running,
            },
        );
    }
}
