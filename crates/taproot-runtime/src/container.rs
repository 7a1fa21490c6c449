//! The container controller that owns the visible navigation surface.
//!
//! A [`RootContainer`] installs its initial content at construction, then on
//! first appearance subscribes to a [`RootBus`] and performs a swap for every
//! delivered flow. The subscription is an owned resource scoped to the
//! container: dropping the container aborts the delivery task, and a delivery
//! racing with teardown is silently discarded through a weak handle.
//!
//! # State machine
//!
//! ```text
//! ┌───────────────┐  new(initial)   ┌──────────────────┐  delivered flow Y
//! │ Uninitialized │────────────────>│ Displaying(X)    │──────────────────┐
//! └───────────────┘                 └──────────────────┘                  │
//!                                        ^  (any Y, including Y == X;     │
//!                                        │   the animation simply reruns) │
//!                                        └──────────────────────────────--┘
//! ```
//!
//! There is no terminal state; the machine ceases to exist when the
//! container is dropped.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use taproot_core::{
    AnimatedRootChanger, AnimationLayer, NavigationSurface, ROOT_TRANSITION_KEY, RootChanging,
    Transition,
};
use tokio::{runtime::Handle, sync::broadcast, task::JoinHandle};

use crate::bus::{FlowHandle, RootBus};

/// Surface state behind the container's lock: the screen stack, the pending
/// animation layer, and presentation flags.
struct SurfaceState<C> {
    stack: Vec<C>,
    layer: AnimationLayer,
    chrome_hidden: bool,
    current_key: Option<String>,
}

impl<C> NavigationSurface<C> for SurfaceState<C> {
    fn set_stack(&mut self, stack: Vec<C>, _animated: bool) {
        // The built-in animation flag is accepted for contract completeness;
        // the terminal frontend only ever plays layer-attached transitions.
        self.stack = stack;
    }

    fn stack(&self) -> &[C] {
        &self.stack
    }

    fn layer_mut(&mut self) -> &mut AnimationLayer {
        &mut self.layer
    }

    fn set_chrome_hidden(&mut self, hidden: bool) {
        self.chrome_hidden = hidden;
    }
}

/// Delivery subscription, aborted when the container goes away.
struct Subscription {
    task: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owner of the visible navigation surface.
///
/// `C` is the host's screen-content handle type. The container always shows
/// content for exactly one flow: the initial content until the first
/// delivery, then the most recently delivered flow's content.
pub struct RootContainer<C> {
    surface: Arc<Mutex<SurfaceState<C>>>,
    changer: Arc<dyn RootChanging<C>>,
    subscription: Option<Subscription>,
}

impl<C> RootContainer<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Create a container displaying `initial` as its sole screen, with the
    /// production [`AnimatedRootChanger`].
    ///
    /// The initial content is installed immediately, before any broadcast is
    /// received; subscription is deferred to [`Self::on_appear`].
    pub fn new(initial: C) -> Self {
        Self::with_changer(initial, Arc::new(AnimatedRootChanger::new()))
    }

    /// Create a container with an injected changer.
    ///
    /// Behaves identically to [`Self::new`] in every other respect; the seam
    /// exists so tests can observe swaps through a recording changer.
    pub fn with_changer(initial: C, changer: Arc<dyn RootChanging<C>>) -> Self {
        let surface = SurfaceState {
            stack: vec![initial],
            layer: AnimationLayer::new(),
            chrome_hidden: false,
            current_key: None,
        };
        Self { surface: Arc::new(Mutex::new(surface)), changer, subscription: None }
    }

    /// First appearance in the UI hierarchy: hide chrome and subscribe.
    ///
    /// Subscribes to `bus` exactly once per container; later calls only
    /// reapply the chrome policy. All deliveries for this container are
    /// processed on `ui`, the runtime the host designates as its single
    /// UI-owning executor, in publish order.
    pub fn on_appear(&mut self, bus: &RootBus<C>, ui: &Handle) {
        lock(&self.surface).set_chrome_hidden(true);

        if self.subscription.is_some() {
            return;
        }

        let rx = bus.subscribe();
        let weak = Arc::downgrade(&self.surface);
        let changer = Arc::clone(&self.changer);
        let task = ui.spawn(deliver(rx, weak, changer));
        self.subscription = Some(Subscription { task });
        tracing::debug!("container subscribed to root bus");
    }

    /// Whether this container is subscribed to a bus.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// The current screen stack, bottom to top. Always length 1.
    pub fn stack(&self) -> Vec<C> {
        lock(&self.surface).stack.clone()
    }

    /// The currently displayed content.
    pub fn visible(&self) -> Option<C> {
        lock(&self.surface).stack.last().cloned()
    }

    /// Key of the most recently delivered flow, or `None` while still on
    /// the initial content.
    pub fn current_key(&self) -> Option<String> {
        lock(&self.surface).current_key.clone()
    }

    /// Whether navigation chrome is suppressed.
    pub fn chrome_hidden(&self) -> bool {
        lock(&self.surface).chrome_hidden
    }

    /// Consume the pending root transition for playback, if one is attached.
    ///
    /// Frontends call this when they start drawing a swap; a repeated swap
    /// before playback replaces the pending transition rather than queueing
    /// a second one.
    pub fn take_pending_transition(&self) -> Option<Transition> {
        lock(&self.surface).layer.take(ROOT_TRANSITION_KEY)
    }
}

/// Delivery loop: one iteration per published flow, running on the UI
/// runtime for the life of the subscription.
async fn deliver<C>(
    mut rx: broadcast::Receiver<FlowHandle<C>>,
    surface: Weak<Mutex<SurfaceState<C>>>,
    changer: Arc<dyn RootChanging<C>>,
) where
    C: Clone + Send + Sync + 'static,
{
    loop {
        match rx.recv().await {
            Ok(flow) => {
                // The container may be torn down between publish and
                // delivery; that race is benign and the delivery is dropped.
                let Some(surface) = surface.upgrade() else {
                    tracing::trace!("container gone, dropping delivery");
                    break;
                };
                let mut state = lock(&surface);
                changer.change_root(flow.as_ref(), &mut *state);
                state.current_key = Some(flow.key().to_owned());
                tracing::debug!(key = flow.key(), "root swapped");
            },
            Err(broadcast::error::RecvError::Closed) => break,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                // No back-pressure by contract; skipping straight to the
                // newest flows still converges on the latest root.
                tracing::trace!(skipped, "delivery lagged behind publishes");
            },
        }
    }
}

/// Lock the surface, recovering the guard if a previous holder panicked.
/// The state itself stays sound: every mutation is a whole-value replace.
fn lock<C>(surface: &Mutex<SurfaceState<C>>) -> MutexGuard<'_, SurfaceState<C>> {
    match surface.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use taproot_harness::Label;

    use super::*;

    #[test]
    fn construction_installs_initial_content_immediately() {
        let container = RootContainer::new(Label::from("splash"));

        assert_eq!(container.stack(), [Label::from("splash")]);
        assert_eq!(container.current_key(), None);
        assert!(!container.is_subscribed());
        assert!(!container.chrome_hidden());
    }

    #[tokio::test]
    async fn injected_changer_performs_the_swaps() {
        let bus: RootBus<Label> = RootBus::new();
        let changer = Arc::new(taproot_harness::RecordingChanger::new());
        // A concrete Arc must coerce to the trait object at the call site.
        let mut container = RootContainer::with_changer(Label::from("splash"), changer.clone());
        container.on_appear(&bus, &Handle::current());

        bus.publish(Arc::new(taproot_harness::StubFlow::new("main", "home")));
        for _ in 0..500 {
            if !changer.swapped_keys().is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }

        assert_eq!(changer.swapped_keys(), ["main"]);
        assert_eq!(container.visible(), Some(Label::from("home")));
    }

    #[tokio::test]
    async fn on_appear_subscribes_exactly_once_and_hides_chrome() {
        let bus: RootBus<Label> = RootBus::new();
        let mut container = RootContainer::new(Label::from("splash"));

        container.on_appear(&bus, &Handle::current());
        container.on_appear(&bus, &Handle::current());

        assert!(container.is_subscribed());
        assert!(container.chrome_hidden());
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn dropping_the_container_releases_the_subscription() {
        let bus: RootBus<Label> = RootBus::new();
        let mut container = RootContainer::new(Label::from("splash"));
        container.on_appear(&bus, &Handle::current());
        assert_eq!(bus.subscriber_count(), 1);

        drop(container);
        // Aborting the delivery task drops its receiver once the runtime
        // reaps the task.
        for _ in 0..100 {
            if bus.subscriber_count() == 0 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(bus.subscriber_count(), 0);
    }
}
