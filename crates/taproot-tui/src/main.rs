//! Demo host binary: splash flow at startup, home flow on any key.
//!
//! Runs a current-thread tokio runtime as the single UI-owning executor, so
//! every delivered root change is processed interleaved with the render
//! loop, never racing it. `--auto-advance-ms` additionally publishes the
//! home flow from a plain OS thread, exercising publish-from-anywhere.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use taproot_core::RootFlow;
use taproot_runtime::{RootBus, RootContainer};
use taproot_tui::{HomeFlow, Playback, Screen, SplashFlow, TerminalDriver, TerminalError, ui};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

/// Taproot demo host.
#[derive(Debug, Parser)]
#[command(name = "taproot-tui", about = "Runtime app-root switching demo")]
struct Args {
    /// Render tick in milliseconds.
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Publish the home flow automatically after this many milliseconds,
    /// from a background thread.
    #[arg(long)]
    auto_advance_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TerminalError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let bus: RootBus<Screen> = RootBus::new();
    let mut container: RootContainer<Screen> = RootContainer::new(SplashFlow.content());
    container.on_appear(&bus, &Handle::current());

    if let Some(delay_ms) = args.auto_advance_ms {
        let publisher = bus.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(delay_ms));
            publisher.publish(Arc::new(HomeFlow::new(false)));
        });
    }

    let mut driver = TerminalDriver::new()?;
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(args.tick_ms.max(1)));
    let mut playback: Option<Playback> = None;
    let mut seen_home = false;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                if let Some(transition) = container.take_pending_transition() {
                    playback = Some(Playback::start(transition));
                }
                let now = Instant::now();
                if playback.as_ref().is_some_and(|p| p.finished(now)) {
                    playback = None;
                }

                if let Some(screen) = container.visible() {
                    let chrome_hidden = container.chrome_hidden();
                    let swap = playback
                        .as_ref()
                        .map(|p| (p.transition().clone(), p.progress(now)));
                    driver.draw(|frame| {
                        ui::draw(
                            frame,
                            screen.as_ref(),
                            chrome_hidden,
                            swap.as_ref().map(|(t, progress)| (t, *progress)),
                        );
                    })?;
                }
            },
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            _ => {
                                tracing::debug!(seen_home, "publishing home flow");
                                bus.publish(Arc::new(HomeFlow::new(seen_home)));
                                seen_home = true;
                            },
                        }
                    },
                    Some(Ok(_)) => {},
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            },
        }
    }

    Ok(())
}
