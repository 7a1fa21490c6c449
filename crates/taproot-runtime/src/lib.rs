//! Live root-switching plumbing for Taproot.
//!
//! Connects the pure logic in [`taproot_core`] to a running application:
//! a process-wide broadcast bus any code can publish a root-change request
//! to, and the container controller that owns the visible surface state and
//! performs the swap for every delivered request.
//!
//! # Delivery model
//!
//! ```text
//!  any thread            UI runtime (host-designated)
//!  ──────────            ────────────────────────────
//!  bus.publish(flow) ──> delivery task ──> changer.change_root(flow, surface)
//! ```
//!
//! `publish` is fire-and-forget from any thread; every live subscribed
//! container processes its own delivered sequence, in publish order, on the
//! runtime the host passed to [`RootContainer::on_appear`]. That single
//! runtime is the only synchronization mechanism: swaps never race because
//! they all run on it.
//!
//! # Components
//!
//! - [`RootBus`]: Injectable broadcast channel for root-change requests
//! - [`RootContainer`]: Surface owner; subscribes once, swaps on delivery

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bus;
pub mod container;

pub use bus::RootBus;
pub use container::RootContainer;
