//! The frame loop.
//!
//! Single-threaded: input, state changes and rendering all happen here. While
//! any animator is mid-transition the loop wakes once per frame; otherwise it
//! blocks until the next input event.

use std::time::Instant;

use tuimotion::event::process_events;
use tuimotion::Terminal;

use crate::config::Config;
use crate::error::Result;
use crate::screen::{Action, DemoScreen};

pub fn run(config: &Config) -> Result<()> {
    let mut screen = DemoScreen::new(config);
    let frame_interval = config.frame_interval();
    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size();
    log::info!("showcase started at {width}x{height}, frame interval {frame_interval:?}");

    let mut frames: u64 = 0;
    loop {
        let now = Instant::now();
        screen.settle(now);
        let root = screen.view(now);
        terminal.render(&root)?;
        frames += 1;

        let timeout = screen.is_animating(now).then_some(frame_interval);
        let raw = terminal.poll(timeout)?;
        let events = process_events(&raw, &root, terminal.layout());

        let now = Instant::now();
        for event in &events {
            if screen.handle_event(event, now) == Action::Quit {
                log::info!("quit after {frames} frames");
                return Ok(());
            }
        }
    }
}
