//! The contract a candidate app root implements.
//!
//! A root flow is a passive description: its identity, whether the user has
//! seen it before, the content to install as root, and an optional custom
//! transition. It performs no action itself; the runtime's container and the
//! [`crate::changer`] do the work.

use std::sync::Arc;

use crate::transition::Transition;

/// A candidate app root.
///
/// `C` is the host's screen-content handle type; handles must be cheap to
/// clone (typically an `Arc` around the real view). Implementations are pure
/// values: read-only accessors, no side effects.
///
/// `key` identity is a caller contract: it must be non-empty (enforced with
/// a precondition at swap time) and uniqueness across the host's flows is
/// the host's responsibility.
pub trait RootFlow<C>: Send + Sync {
    /// Stable identity for this flow, intended for host-side bookkeeping
    /// and persistence.
    fn key(&self) -> &str;

    /// Whether the user has seen this flow before.
    ///
    /// Semantics and storage belong entirely to the host; the core exposes
    /// the flag and never reads or writes it.
    fn is_visited(&self) -> bool;

    /// The screen content installed as root when this flow wins.
    ///
    /// The container holds a strong handle to the returned content while it
    /// is the root, releasing the previous root's content.
    fn content(&self) -> C;

    /// Custom swap animation, or `None` to use the default push.
    fn transition(&self) -> Option<Transition> {
        None
    }
}

/// Read side of the host's root policy: "which flow is the app root now".
///
/// The core never calls this; it only fixes the shape a policy component
/// should have so frontends and the host agree on it.
pub trait RootState<C> {
    /// The flow currently considered the app root.
    fn current_root(&self) -> Arc<dyn RootFlow<C>>;
}
