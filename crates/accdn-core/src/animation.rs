#![forbid(unsafe_code)]

//! Composable animation primitives.
//!
//! Time-based animations that produce normalized `f32` values (0.0–1.0).
//! No allocation during tick; the host advances time explicitly, so the
//! same code runs under a browser frame loop and in deterministic tests.
//!
//! Panel content slides open and closed with a [`Reveal`]: the visible
//! fraction of the content region moving from wherever it currently is
//! toward fully shown or fully hidden.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cosine ease-in-out, the classic "swing" curve of slide effects.
#[inline]
pub fn swing(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - (t * std::f32::consts::PI).cos() / 2.0
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion.
    /// Returns [`Duration::ZERO`] for animations that never complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Linear progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Tracks elapsed time as [`Duration`] internally for precise accumulation
/// (no floating-point drift) and accurate overshoot calculation.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade with the given duration and default linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Total duration of the fade.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

/// Interpolates the visible fraction of a region between `from` and `to`.
///
/// [`Animation::value`] returns the normalized progress; use
/// [`Reveal::fraction`] for the visible fraction (0.0 hidden, 1.0 shown).
///
/// A reveal interrupted part-way is replaced by a new one starting at the
/// interrupted [`fraction`](Reveal::fraction), so a panel reversing
/// direction never jumps.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    from: f32,
    to: f32,
    progress: Fade,
}

impl Reveal {
    /// Create a reveal from `from` to `to` over `duration`, with swing easing.
    ///
    /// Both endpoints are clamped to [0.0, 1.0].
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            progress: Fade::new(duration).easing(swing),
        }
    }

    /// A reveal that is already complete at `fraction`.
    pub fn settled(fraction: f32) -> Self {
        let mut reveal = Self::new(fraction, fraction, Duration::ZERO);
        reveal.progress.tick(Duration::from_nanos(1));
        reveal
    }

    /// Set the easing function (builder).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.progress = self.progress.easing(easing);
        self
    }

    /// Current visible fraction. Exactly the target once complete.
    pub fn fraction(&self) -> f32 {
        if self.progress.is_complete() {
            return self.to;
        }
        let t = self.progress.value();
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }

    /// Target visible fraction.
    pub fn target(&self) -> f32 {
        self.to
    }
}

impl Animation for Reveal {
    fn tick(&mut self, dt: Duration) {
        self.progress.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    fn value(&self) -> f32 {
        self.progress.value()
    }

    fn reset(&mut self) {
        self.progress.reset();
    }

    fn overshoot(&self) -> Duration {
        self.progress.overshoot()
    }
}
