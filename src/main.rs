//! Terminal runner for the well.
//!
//! Reads key events with crossterm, steps a [`Session`] at a fixed 60 Hz and
//! presents the framebuffer after every step.
//!
//! Environment:
//! - `TETRIS_WELL_CONFIG`: path to a JSON `WellConfig` (missing fields use defaults)
//! - `TETRIS_WELL_SEED`: piece queue seed (defaults to the clock)

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tetris_well::core::{Session, WellConfig};
use tetris_well::input::{should_quit, KeyTracker};
use tetris_well::term::{FrameBuffer, GameView, TerminalPresenter, Viewport};
use tetris_well::types::{InputEvent, FRAME_DURATION_60HZ};

fn load_config() -> Result<WellConfig> {
    let Ok(path) = std::env::var("TETRIS_WELL_CONFIG") else {
        eprintln!("[Well] using default config");
        return Ok(WellConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("read config {path}"))?;
    let config = WellConfig::from_json(&text).with_context(|| format!("parse config {path}"))?;
    eprintln!("[Well] config loaded from {path}");
    Ok(config)
}

fn load_seed() -> Result<u32> {
    match std::env::var("TETRIS_WELL_SEED") {
        Ok(text) => text
            .trim()
            .parse()
            .with_context(|| format!("TETRIS_WELL_SEED is not a number: {text:?}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1)),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;
    let seed = load_seed()?;
    eprintln!("[Well] seed {seed}");

    let mut session = Session::with_config(config, seed);
    let mut term = TerminalPresenter::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[Session] {} lines, {} pieces{}",
        session.lines(),
        session.pieces(),
        if session.game_over() { ", game over" } else { "" }
    );
    result
}

fn run(term: &mut TerminalPresenter, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut keys = KeyTracker::new();
    let mut inputs: Vec<InputEvent> = Vec::with_capacity(16);

    session.start();
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Collect key edges until the next frame is due.
        let deadline = last_frame + FRAME_DURATION_60HZ;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    inputs.extend(keys.handle_key_event(key, Instant::now()));
                }
                // Releases may never arrive once the window is unfocused.
                Event::FocusLost => inputs.extend(keys.reset()),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        inputs.extend(keys.expire(now));

        // Fixed step; catch up at most a few frames after a stall.
        let mut steps = 0;
        while now.duration_since(last_frame) >= FRAME_DURATION_60HZ && steps < 4 {
            session.update(&inputs, FRAME_DURATION_60HZ);
            inputs.clear();
            last_frame += FRAME_DURATION_60HZ;
            steps += 1;
        }
        if now.duration_since(last_frame) > Duration::from_millis(250) {
            last_frame = now;
        }
    }
}
