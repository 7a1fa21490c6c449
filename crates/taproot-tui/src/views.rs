//! Concrete screen content for the demo host.
//!
//! The content handle type this host plugs into the core's `C` parameter is
//! [`Screen`], a shared trait object. Views are passive: they only describe
//! what to draw.

use std::sync::Arc;

use ratatui::text::{Line, Text};

/// Renderable screen content.
pub trait View: Send + Sync {
    /// Title shown in navigation chrome (when chrome is not suppressed).
    fn title(&self) -> &str;

    /// The body text of the screen.
    fn body(&self) -> Text<'static>;
}

/// The content handle installed into the navigation surface.
pub type Screen = Arc<dyn View>;

/// First screen shown at startup.
#[derive(Debug, Default)]
pub struct SplashView;

impl View for SplashView {
    fn title(&self) -> &str {
        "Splash"
    }

    fn body(&self) -> Text<'static> {
        Text::from(vec![
            Line::from("taproot"),
            Line::from(""),
            Line::from("press any key to enter, q to quit"),
        ])
    }
}

/// Main screen after the root switch.
#[derive(Debug)]
pub struct HomeView {
    greeting: String,
}

impl HomeView {
    /// A home screen with a greeting tailored to whether the user has been
    /// here before.
    pub fn new(returning: bool) -> Self {
        let greeting =
            if returning { "welcome back".to_owned() } else { "welcome to Home".to_owned() };
        Self { greeting }
    }
}

impl View for HomeView {
    fn title(&self) -> &str {
        "Home"
    }

    fn body(&self) -> Text<'static> {
        Text::from(vec![
            Line::from("Home"),
            Line::from(""),
            Line::from(self.greeting.clone()),
            Line::from("any key re-enters, q quits"),
        ])
    }
}
