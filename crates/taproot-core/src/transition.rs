//! Declarative animation descriptions for root swaps.
//!
//! A [`Transition`] says what the swap should look like; it never performs
//! the animation itself. The frontend driver that owns the real rendering
//! surface interprets it (slide, fade, ...) over [`Transition::duration`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the default root swap animation runs.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// The visual style of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// New content pushes the old content out of frame.
    Push,

    /// Old content cross-fades into the new content.
    Fade,

    /// New content slides in over the old content.
    MoveIn,

    /// Old content slides away, revealing the new content beneath.
    Reveal,
}

/// Where directional transitions enter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionDirection {
    /// Enter from the right edge (lateral, forward-feeling).
    FromRight,

    /// Enter from the left edge.
    FromLeft,

    /// Enter from the top edge.
    FromTop,

    /// Enter from the bottom edge.
    FromBottom,
}

/// Pacing of the animation over its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingCurve {
    /// Constant speed.
    Linear,

    /// Slow start, fast finish.
    EaseIn,

    /// Fast start, slow finish.
    EaseOut,

    /// Slow start and finish, fast middle.
    EaseInEaseOut,
}

impl TimingCurve {
    /// Map linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the unit interval is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInEaseOut => {
                if t < 0.5 { 2.0 * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(2) / 2.0 }
            },
        }
    }
}

/// A complete animation description for one root swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Visual style.
    pub kind: TransitionKind,

    /// Entry edge for directional kinds; ignored by [`TransitionKind::Fade`].
    pub direction: TransitionDirection,

    /// How long the animation runs.
    pub duration: Duration,

    /// Pacing over the duration.
    pub curve: TimingCurve,
}

impl Transition {
    /// The default root swap animation: a lateral push from the right over
    /// 300 ms, eased in and out.
    pub fn default_push() -> Self {
        Self {
            kind: TransitionKind::Push,
            direction: TransitionDirection::FromRight,
            duration: DEFAULT_DURATION,
            curve: TimingCurve::EaseInEaseOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_push_shape() {
        let t = Transition::default_push();
        assert_eq!(t.kind, TransitionKind::Push);
        assert_eq!(t.direction, TransitionDirection::FromRight);
        assert_eq!(t.duration, Duration::from_millis(300));
        assert_eq!(t.curve, TimingCurve::EaseInEaseOut);
    }

    #[test]
    fn curves_fix_endpoints() {
        for curve in
            [TimingCurve::Linear, TimingCurve::EaseIn, TimingCurve::EaseOut, TimingCurve::EaseInEaseOut]
        {
            assert!((curve.apply(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn curves_clamp_out_of_range_input() {
        assert!((TimingCurve::EaseIn.apply(-1.0)).abs() < f32::EPSILON);
        assert!((TimingCurve::EaseOut.apply(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transition_roundtrips_through_serde() {
        let t = Transition {
            kind: TransitionKind::Fade,
            direction: TransitionDirection::FromLeft,
            duration: Duration::from_millis(150),
            curve: TimingCurve::Linear,
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
