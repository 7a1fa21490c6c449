//! Taproot core logic
//!
//! Pure types and logic for switching an application's root screen-flow,
//! completely decoupled from any UI framework or async runtime. This enables
//! deterministic testing: every swap is a plain function call over plain
//! values.
//!
//! # Architecture
//!
//! The core never performs I/O and never schedules anything. A swap is
//! expressed declaratively: the changer attaches a [`Transition`] to the
//! surface's [`AnimationLayer`] and replaces the screen stack, and a frontend
//! driver is responsible for consuming the attached transition and playing
//! the visual effect. This keeps root-switching correctness independent of
//! execution concerns and lets the same code back a production frontend and
//! plain unit tests.
//!
//! The core is generic over `C`, the host's screen-content handle type.
//! Handles must be cheap to clone (typically an `Arc`); the surface holds a
//! strong handle to exactly the current root's content.
//!
//! # Components
//!
//! - [`flow`]: The [`RootFlow`] contract a candidate app root implements
//! - [`transition`]: Declarative animation descriptions
//! - [`layer`]: Keyed pending-animation slots on a surface
//! - [`surface`]: The [`NavigationSurface`] a swap mutates
//! - [`changer`]: The stateless swap operation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod changer;
pub mod flow;
pub mod layer;
pub mod surface;
pub mod transition;

pub use changer::{AnimatedRootChanger, RootChanging};
pub use flow::{RootFlow, RootState};
pub use layer::{AnimationLayer, ROOT_TRANSITION_KEY};
pub use surface::NavigationSurface;
pub use transition::{TimingCurve, Transition, TransitionDirection, TransitionKind};
