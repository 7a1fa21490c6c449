//! Deterministic test support for Taproot.
//!
//! Plain in-memory implementations of the core contracts so unit and
//! integration tests across the workspace can drive root swaps without any
//! real UI: a cheap content handle, a configurable stub flow, a recording
//! surface, and a recording changer for observing swap order through the
//! live container path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::{Arc, Mutex};

use taproot_core::{
    AnimatedRootChanger, AnimationLayer, NavigationSurface, RootChanging, RootFlow, Transition,
};

/// Cheap content handle used as `C` in tests: a shared string label
/// standing in for real screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(Arc<str>);

impl Label {
    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self(Arc::from(text))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configurable [`RootFlow`] implementation over [`Label`] content.
#[derive(Debug, Clone)]
pub struct StubFlow {
    key: String,
    visited: bool,
    content: Label,
    transition: Option<Transition>,
}

impl StubFlow {
    /// A flow with the given key and content label, not visited, default
    /// transition.
    pub fn new(key: &str, content: &str) -> Self {
        Self { key: key.to_owned(), visited: false, content: Label::from(content), transition: None }
    }

    /// Mark the flow as visited.
    pub fn visited(mut self) -> Self {
        self.visited = true;
        self
    }

    /// Give the flow a custom transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Wrap into the shared handle the bus publishes.
    pub fn shared(self) -> Arc<dyn RootFlow<Label>> {
        Arc::new(self)
    }
}

impl RootFlow<Label> for StubFlow {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_visited(&self) -> bool {
        self.visited
    }

    fn content(&self) -> Label {
        self.content.clone()
    }

    fn transition(&self) -> Option<Transition> {
        self.transition.clone()
    }
}

/// [`NavigationSurface`] that records every mutation for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    stack: Vec<Label>,
    layer: AnimationLayer,
    chrome_hidden: bool,
    animated_flags: Vec<bool>,
}

impl RecordingSurface {
    /// An empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface already displaying `initial`.
    pub fn displaying(initial: &str) -> Self {
        Self { stack: vec![Label::from(initial)], ..Self::default() }
    }

    /// The `animated` flag of every `set_stack` call, in order.
    pub fn animated_flags(&self) -> &[bool] {
        &self.animated_flags
    }

    /// Whether chrome is currently hidden.
    pub fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    /// Direct access to the animation layer.
    pub fn layer(&mut self) -> &mut AnimationLayer {
        &mut self.layer
    }
}

impl NavigationSurface<Label> for RecordingSurface {
    fn set_stack(&mut self, stack: Vec<Label>, animated: bool) {
        self.animated_flags.push(animated);
        self.stack = stack;
    }

    fn stack(&self) -> &[Label] {
        &self.stack
    }

    fn layer_mut(&mut self) -> &mut AnimationLayer {
        &mut self.layer
    }

    fn set_chrome_hidden(&mut self, hidden: bool) {
        self.chrome_hidden = hidden;
    }
}

/// [`RootChanging`] decorator that logs swapped flow keys in delivery order
/// while delegating the actual swap to [`AnimatedRootChanger`].
#[derive(Debug, Default)]
pub struct RecordingChanger {
    log: Mutex<Vec<String>>,
    inner: AnimatedRootChanger,
}

impl RecordingChanger {
    /// A changer with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys of every swap performed so far, in order.
    pub fn swapped_keys(&self) -> Vec<String> {
        match self.log.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<C> RootChanging<C> for RecordingChanger {
    fn change_root(&self, flow: &dyn RootFlow<C>, surface: &mut dyn NavigationSurface<C>) {
        match self.log.lock() {
            Ok(mut guard) => guard.push(flow.key().to_owned()),
            Err(poisoned) => poisoned.into_inner().push(flow.key().to_owned()),
        }
        self.inner.change_root(flow, surface);
    }
}
