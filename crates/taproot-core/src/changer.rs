//! The stateless swap operation.
//!
//! One call, one atomic-looking root change: pick the transition, attach it
//! to the surface's layer, replace the stack with exactly the new content.
//! No history of prior roots is kept and nothing here blocks on animation
//! completion; the frontend plays the attached transition on its own time.

use crate::{
    flow::RootFlow,
    layer::ROOT_TRANSITION_KEY,
    surface::NavigationSurface,
    transition::Transition,
};

/// Performs the root swap on a navigation surface.
///
/// The trait exists so the runtime's container can be exercised with a
/// recording implementation in tests; production uses
/// [`AnimatedRootChanger`].
pub trait RootChanging<C>: Send + Sync {
    /// Make `flow` the root of `surface`.
    ///
    /// After this returns the surface's stack is exactly
    /// `[flow.content()]`; the previous root's content is released from the
    /// stack. Re-applying the current flow is valid and restarts the
    /// animation.
    ///
    /// # Panics
    ///
    /// If `flow.key()` is empty. An empty key is a programming error in the
    /// host, not a runtime condition, so it fails fast.
    fn change_root(&self, flow: &dyn RootFlow<C>, surface: &mut dyn NavigationSurface<C>);
}

/// Production changer: layer-attached transition plus non-animated stack
/// replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimatedRootChanger;

impl AnimatedRootChanger {
    /// Create a changer.
    pub fn new() -> Self {
        Self
    }
}

impl<C> RootChanging<C> for AnimatedRootChanger {
    fn change_root(&self, flow: &dyn RootFlow<C>, surface: &mut dyn NavigationSurface<C>) {
        assert!(!flow.key().is_empty(), "root flow key must be non-empty");

        // Replacing under the same key restarts the effect on rapid
        // successive swaps rather than stacking animations.
        let transition = flow.transition().unwrap_or_else(Transition::default_push);
        surface.layer_mut().attach(ROOT_TRANSITION_KEY, transition);

        // The layer transition supplies the visual effect, so the built-in
        // stack-change animation stays off.
        surface.set_stack(vec![flow.content()], false);
    }
}
