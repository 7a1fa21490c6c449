//! The demo host's root flows.
//!
//! These are the host-side counterpart of the core's flow contract: plain
//! descriptors naming a key, carrying a screen, and optionally customizing
//! the swap animation. The `visited` flag is owned here, by the host, as the
//! core prescribes.

use std::sync::Arc;

use taproot_core::{RootFlow, Transition};

use crate::views::{HomeView, Screen, SplashView};

/// The startup flow.
#[derive(Debug, Default)]
pub struct SplashFlow;

impl RootFlow<Screen> for SplashFlow {
    fn key(&self) -> &str {
        "splash"
    }

    fn is_visited(&self) -> bool {
        false
    }

    fn content(&self) -> Screen {
        Arc::new(SplashView)
    }
}

/// The authenticated main flow.
#[derive(Debug)]
pub struct HomeFlow {
    visited: bool,
    transition: Option<Transition>,
}

impl HomeFlow {
    /// A home flow; `visited` records whether the host has shown it before.
    pub fn new(visited: bool) -> Self {
        Self { visited, transition: None }
    }

    /// Customize the swap animation.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

impl RootFlow<Screen> for HomeFlow {
    fn key(&self) -> &str {
        "main"
    }

    fn is_visited(&self) -> bool {
        self.visited
    }

    fn content(&self) -> Screen {
        Arc::new(HomeView::new(self.visited))
    }

    fn transition(&self) -> Option<Transition> {
        self.transition.clone()
    }
}
