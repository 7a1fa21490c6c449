//! The mutable target of a root swap.
//!
//! Abstracts over whatever owns the visible screen stack. The runtime's
//! container implements this for its surface state; test harnesses implement
//! it with plain recording types. The changer only ever talks to this trait,
//! so swap logic is testable without any real UI.

use crate::layer::AnimationLayer;

/// A navigation surface: an ordered screen stack plus a rendering layer.
///
/// `C` is the host's screen-content handle type.
pub trait NavigationSurface<C> {
    /// Replace the entire screen stack.
    ///
    /// `animated: false` disables the surface's built-in stack-change
    /// animation; the root changer always passes `false` because the
    /// layer-attached [`crate::Transition`] supplies the visual effect.
    fn set_stack(&mut self, stack: Vec<C>, animated: bool);

    /// The current screen stack, bottom to top.
    fn stack(&self) -> &[C];

    /// The surface's pending-animation layer.
    fn layer_mut(&mut self) -> &mut AnimationLayer;

    /// Show or hide navigation chrome (title bar and the like).
    ///
    /// The container hides chrome on first appearance as a fixed
    /// presentation default, independent of swap logic.
    fn set_chrome_hidden(&mut self, hidden: bool);
}
