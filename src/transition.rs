//! Time-driven transitions of the slide offset.
//!
//! A [`Transition`] is the single record of an in-flight animated state
//! change: it owns the curve, the clock, and the completion callback. The
//! completion is stored as an `Option` and taken exactly once, whether the
//! transition runs to the end or is superseded, so single-fire semantics do
//! not rely on closure capture discipline at the call sites.

use std::f32::consts::PI;

use crate::side::Side;

/// Callback invoked exactly once when a transition settles or is superseded.
/// The flag is `true` only if the transition ran to completion.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Hook invoked at the peak of a bouncing open/close, when the panel is
/// furthest out.
pub type BounceHook = Box<dyn FnOnce()>;

/// Easing applied to plain slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub(crate) fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Damped oscillation used by bounce previews, normalized to `u ∈ [0, 1]`.
///
/// The angular frequency `(bounces + 0.5) * PI` places a zero exactly at
/// `u = 1`, so a bounce always lands on the closed position regardless of the
/// damping factor; `zeta` scales the exponential decay envelope.
pub(crate) fn damped_oscillation(u: f32, bounces: f32, zeta: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    let omega = (bounces.max(0.0) + 0.5) * PI;
    (-(zeta.max(0.0) * omega * u)).exp() * (omega * u).cos().abs()
}

/// What a transition is doing to its side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TransitionKind {
    /// Slide to the side's open offset and report Open.
    Open,
    /// Slide to zero and report Closed.
    Close,
    /// Re-layout an already-open side to a new size; the side stays Open.
    Resize,
    /// Slide out to `peak`, fire the bounce hook, then settle at the open
    /// offset.
    OpenBouncing { peak: f32 },
    /// Slide out to `peak`, fire the bounce hook, then settle closed.
    CloseBouncing { peak: f32 },
    /// Preview bounce: out to `distance` and back to zero, damped. Never
    /// reports Open.
    PreviewBounce {
        distance: f32,
        bounces: f32,
        damping: f32,
    },
}

pub(crate) enum Progress {
    Running(f32),
    Finished(f32),
}

pub(crate) struct Transition {
    pub side: Side,
    pub kind: TransitionKind,
    pub from: f32,
    pub to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    /// Fraction of the duration spent on the outward phase of a bounce.
    open_fraction: f32,
    /// Whether the gesture controller owns this transition; the panning flag
    /// clears when it settles.
    pub from_pan: bool,
    /// Settle without firing will/did notifications. Used by gesture
    /// snap-backs that restore the pre-gesture state.
    pub silent: bool,
    completion: Option<Completion>,
    hook: Option<BounceHook>,
    peak_polled: bool,
}

impl Transition {
    pub fn new(side: Side, kind: TransitionKind, from: f32, to: f32, duration: f32) -> Self {
        Self {
            side,
            kind,
            from,
            to,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
            open_fraction: 0.5,
            from_pan: false,
            silent: false,
            completion: None,
            hook: None,
            peak_polled: false,
        }
    }

    pub fn with_completion(mut self, completion: Option<Completion>) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_hook(mut self, hook: Option<BounceHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the outward-phase fraction for bouncing kinds, already clamped by
    /// the caller to `[0.01, 0.99]`.
    pub fn with_open_fraction(mut self, fraction: f32) -> Self {
        self.open_fraction = fraction;
        self
    }

    pub fn from_pan(mut self) -> Self {
        self.from_pan = true;
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Takes the completion out of the record; later calls return `None`.
    pub fn take_completion(&mut self) -> Option<Completion> {
        self.completion.take()
    }

    /// Installs a completion on an in-flight transition (request coalescing).
    pub fn set_completion(&mut self, completion: Completion) {
        self.completion = Some(completion);
    }

    /// True while the outward phase of a bounce has not yet peaked.
    fn before_peak(&self) -> bool {
        self.elapsed < self.duration * self.open_fraction
    }

    /// Returns `true` exactly once, on the first call after the outward phase
    /// peaked. The deck turns this into the `did_bounce` notification.
    pub fn poll_peak(&mut self) -> bool {
        if self.peak_polled || self.before_peak() {
            return false;
        }
        self.peak_polled = true;
        true
    }

    /// Advances the clock and returns the offset the side should be at.
    pub fn advance(&mut self, dt: f32) -> Progress {
        self.elapsed += dt.max(0.0);
        let t = (self.elapsed / self.duration).min(1.0);

        if !self.before_peak() {
            if let Some(hook) = self.hook.take() {
                hook();
            }
        }

        let offset = self.offset_at(t);
        if t >= 1.0 {
            Progress::Finished(offset)
        } else {
            Progress::Running(offset)
        }
    }

    fn offset_at(&self, t: f32) -> f32 {
        match self.kind {
            TransitionKind::Open | TransitionKind::Close | TransitionKind::Resize => {
                self.from + (self.to - self.from) * self.easing.apply(t)
            }
            TransitionKind::OpenBouncing { peak } | TransitionKind::CloseBouncing { peak } => {
                let split = self.open_fraction;
                if t < split {
                    let u = t / split;
                    self.from + (peak - self.from) * Easing::EaseOut.apply(u)
                } else {
                    let u = (t - split) / (1.0 - split);
                    peak + (self.to - peak) * Easing::EaseInOut.apply(u)
                }
            }
            TransitionKind::PreviewBounce {
                distance,
                bounces,
                damping,
            } => {
                let split = self.open_fraction;
                if t < split {
                    let u = t / split;
                    self.from + (distance - self.from) * Easing::EaseOut.apply(u)
                } else {
                    let u = (t - split) / (1.0 - split);
                    distance * damped_oscillation(u, bounces, damping)
                }
            }
        }
    }
}
