//! Rendering through the full stack: bus publish, container swap, frame
//! draw into a test backend.

use std::{sync::Arc, time::Duration};

use ratatui::{Terminal, backend::TestBackend, layout::Position};
use taproot_core::RootFlow;
use taproot_runtime::{RootBus, RootContainer};
use taproot_tui::{HomeFlow, Screen, SplashFlow, ui};
use tokio::runtime::Handle;

/// Flatten the drawn buffer into one string for containment checks.
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell(Position::new(x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn splash_renders_without_chrome() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
    let screen = SplashFlow.content();

    terminal.draw(|frame| ui::draw(frame, screen.as_ref(), true, None)).expect("draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("taproot"));
    // Chrome hidden: no reversed title bar with the flow title.
    assert!(!text.contains("Splash"));
}

#[test]
fn chrome_shows_the_view_title() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
    let screen = SplashFlow.content();

    terminal.draw(|frame| ui::draw(frame, screen.as_ref(), false, None)).expect("draw");

    assert!(buffer_text(&terminal).contains("Splash"));
}

#[tokio::test]
async fn published_home_flow_reaches_the_frame() {
    let bus: RootBus<Screen> = RootBus::new();
    let mut container: RootContainer<Screen> = RootContainer::new(SplashFlow.content());
    container.on_appear(&bus, &Handle::current());

    bus.publish(Arc::new(HomeFlow::new(false)));
    for _ in 0..500 {
        if container.current_key().as_deref() == Some("main") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    assert_eq!(container.current_key().as_deref(), Some("main"));

    let screen = container.visible().expect("visible screen");
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
    terminal
        .draw(|frame| ui::draw(frame, screen.as_ref(), container.chrome_hidden(), None))
        .expect("draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("Home"));
    assert!(!text.contains("taproot"));
}

#[test]
fn mid_swap_slide_draws_content_partially_entered() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
    let screen = SplashFlow.content();
    let transition = taproot_core::Transition::default_push();

    terminal
        .draw(|frame| ui::draw(frame, screen.as_ref(), true, Some((&transition, 0.0))))
        .expect("draw");
    // Nothing entered yet.
    assert!(!buffer_text(&terminal).contains("taproot"));

    terminal
        .draw(|frame| ui::draw(frame, screen.as_ref(), true, Some((&transition, 1.0))))
        .expect("draw");
    assert!(buffer_text(&terminal).contains("taproot"));
}
