//! Keyed pending-animation slots on a surface's rendering layer.
//!
//! Mirrors the "add animation under a key" model of native rendering layers:
//! attaching under an occupied key replaces the previous animation instead of
//! stacking a second one, so rapid repeated swaps restart the effect rather
//! than queueing effects. A frontend driver consumes the slot with
//! [`AnimationLayer::take`] when it starts playing the visual.

use std::collections::HashMap;

use crate::transition::Transition;

/// Well-known key the root changer attaches its transition under.
pub const ROOT_TRANSITION_KEY: &str = "taproot.root-transition";

/// Pending animations attached to a surface, one slot per key.
#[derive(Debug, Default)]
pub struct AnimationLayer {
    slots: HashMap<String, Transition>,
}

impl AnimationLayer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `transition` under `key`, replacing any animation already
    /// attached under the same key.
    pub fn attach(&mut self, key: &str, transition: Transition) {
        self.slots.insert(key.to_owned(), transition);
    }

    /// Remove and return the animation attached under `key`, if any.
    ///
    /// Frontends call this once per attachment, when playback starts.
    pub fn take(&mut self, key: &str) -> Option<Transition> {
        self.slots.remove(key)
    }

    /// Peek at the animation attached under `key` without consuming it.
    pub fn pending(&self, key: &str) -> Option<&Transition> {
        self.slots.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{TimingCurve, TransitionDirection, TransitionKind};

    fn fade() -> Transition {
        Transition {
            kind: TransitionKind::Fade,
            direction: TransitionDirection::FromLeft,
            duration: std::time::Duration::from_millis(100),
            curve: TimingCurve::Linear,
        }
    }

    #[test]
    fn attach_then_take_consumes() {
        let mut layer = AnimationLayer::new();
        layer.attach(ROOT_TRANSITION_KEY, Transition::default_push());

        assert!(layer.pending(ROOT_TRANSITION_KEY).is_some());
        assert_eq!(layer.take(ROOT_TRANSITION_KEY), Some(Transition::default_push()));
        assert_eq!(layer.take(ROOT_TRANSITION_KEY), None);
    }

    #[test]
    fn reattach_replaces_instead_of_stacking() {
        let mut layer = AnimationLayer::new();
        layer.attach(ROOT_TRANSITION_KEY, Transition::default_push());
        layer.attach(ROOT_TRANSITION_KEY, fade());

        assert_eq!(layer.take(ROOT_TRANSITION_KEY), Some(fade()));
        assert_eq!(layer.take(ROOT_TRANSITION_KEY), None);
    }

    #[test]
    fn keys_are_independent() {
        let mut layer = AnimationLayer::new();
        layer.attach("a", Transition::default_push());
        layer.attach("b", fade());

        assert_eq!(layer.take("a"), Some(Transition::default_push()));
        assert_eq!(layer.pending("b"), Some(&fade()));
    }
}
