//! Terminal host application for Taproot
//!
//! A small ratatui frontend playing the role of "the host app": it owns the
//! UI runtime, builds the [`taproot_runtime::RootBus`] and a
//! [`taproot_runtime::RootContainer`], renders whatever content the
//! container currently shows, and plays the container's pending transitions.
//! All root-switching logic lives in `taproot-core`/`taproot-runtime`; this
//! crate only supplies concrete views and terminal I/O.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod flows;
pub mod terminal;
pub mod ui;
pub mod views;

pub use flows::{HomeFlow, SplashFlow};
pub use terminal::{TerminalDriver, TerminalError};
pub use ui::Playback;
pub use views::{HomeView, Screen, SplashView, View};
