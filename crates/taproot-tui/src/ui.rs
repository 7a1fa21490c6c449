//! Rendering: the container's visible screen plus transition playback.
//!
//! The runtime leaves a pending [`Transition`] on the container after every
//! swap; this module turns it into frames. Directional kinds play as a slide
//! across the transition's duration, `Fade` as a dim ramp. Playback never
//! blocks anything: each tick just asks "how far along are we" and draws.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Paragraph},
};
use taproot_core::{Transition, TransitionDirection, TransitionKind};

use crate::views::View;

/// An in-flight swap animation.
#[derive(Debug)]
pub struct Playback {
    transition: Transition,
    started: Instant,
}

impl Playback {
    /// Begin playing `transition` now.
    pub fn start(transition: Transition) -> Self {
        Self { transition, started: Instant::now() }
    }

    /// The transition being played.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Eased progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let duration = self.transition.duration.as_secs_f32();
        if duration <= f32::EPSILON {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        self.transition.curve.apply(elapsed / duration)
    }

    /// Whether the animation has run its full duration at `now`.
    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.transition.duration
    }
}

/// Draw one frame: `screen` inside optional chrome, offset or dimmed
/// according to the in-flight swap.
pub fn draw(frame: &mut Frame, screen: &dyn View, chrome_hidden: bool, swap: Option<(&Transition, f32)>) {
    let area = frame.area();

    let content_area = if chrome_hidden {
        area
    } else {
        // Chrome: a one-line title bar above the content.
        let title = Paragraph::new(screen.title().to_owned()).style(Style::new().reversed());
        let bar = Rect { height: area.height.min(1), ..area };
        frame.render_widget(title, bar);
        Rect {
            y: area.y.saturating_add(1),
            height: area.height.saturating_sub(1),
            ..area
        }
    };

    let (target, style) = match swap {
        Some((transition, progress)) => match transition.kind {
            TransitionKind::Push | TransitionKind::MoveIn => {
                (slide_rect(content_area, transition.direction, progress), Style::new())
            },
            // The old content is gone from the stack, so reveal and fade
            // both read as the new content materializing in place.
            TransitionKind::Fade | TransitionKind::Reveal => {
                let style =
                    if progress < 1.0 { Style::new().dim() } else { Style::new() };
                (content_area, style)
            },
        },
        None => (content_area, Style::new()),
    };

    let body = Paragraph::new(screen.body()).style(style).block(Block::bordered());
    frame.render_widget(body, target);
}

/// Where sliding content sits at eased `progress`, entering from
/// `direction`'s edge of `area`.
fn slide_rect(area: Rect, direction: TransitionDirection, progress: f32) -> Rect {
    let progress = progress.clamp(0.0, 1.0);
    let remaining_x = ((1.0 - progress) * f32::from(area.width)) as u16;
    let remaining_y = ((1.0 - progress) * f32::from(area.height)) as u16;

    match direction {
        TransitionDirection::FromRight => Rect {
            x: area.x.saturating_add(remaining_x),
            width: area.width.saturating_sub(remaining_x),
            ..area
        },
        TransitionDirection::FromLeft => {
            Rect { width: area.width.saturating_sub(remaining_x), ..area }
        },
        TransitionDirection::FromTop => {
            Rect { height: area.height.saturating_sub(remaining_y), ..area }
        },
        TransitionDirection::FromBottom => Rect {
            y: area.y.saturating_add(remaining_y),
            height: area.height.saturating_sub(remaining_y),
            ..area
        },
    }
}
