//! Broadcast channel for root-change requests.
//!
//! The bus decouples "who decides the next root" from "who performs the
//! swap": any part of the host can publish a flow without holding a
//! reference to the container. It is an injectable value owned by the
//! host's composition root, not a static singleton, so tests construct
//! isolated instances. Typically one bus lives for the whole process with
//! no teardown.

use std::sync::Arc;

use taproot_core::RootFlow;
use tokio::sync::broadcast;

/// Default buffer per subscriber. Root changes are rare (a handful per
/// session), so a small buffer never lags in practice.
const DEFAULT_CAPACITY: usize = 16;

/// A shared root-change request.
pub type FlowHandle<C> = Arc<dyn RootFlow<C>>;

/// Broadcast channel announcing "make this flow the app root now".
///
/// Clones share the same channel. Every live subscriber receives every
/// published flow independently, in publish order; there is no replay of
/// events published before a subscriber existed, no acknowledgment, and no
/// back-pressure.
pub struct RootBus<C> {
    sender: broadcast::Sender<FlowHandle<C>>,
}

impl<C> Clone for RootBus<C> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<C> Default for RootBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RootBus<C> {
    /// Create a bus with the default per-subscriber buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus with an explicit per-subscriber buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Request a root change.
    ///
    /// Callable from any thread. Never blocks and never fails: publishing
    /// with no live subscriber is a no-op, matching the contract that
    /// events are only seen by containers subscribed at publish time.
    pub fn publish(&self, flow: FlowHandle<C>) {
        tracing::debug!(
            key = flow.key(),
            subscribers = self.sender.receiver_count(),
            "publishing root change"
        );
        // Err here just means nobody is subscribed right now.
        let _ = self.sender.send(flow);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Open a subscription seeing only flows published from now on.
    pub(crate) fn subscribe(&self) -> broadcast::Receiver<FlowHandle<C>> {
        self.sender.subscribe()
    }
}
