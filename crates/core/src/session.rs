//! Session - a minimal game loop around a [`Well`]
//!
//! The well only asks for pieces through events. A session answers them: it feeds
//! the next piece from a [`PieceQueue`] on `NextRequested`, swaps with the hold
//! slot on `HoldRequested` (once per piece), and keeps a cleared-lines total.
//! Events are collected during the step and handled after it returns, so a piece
//! requested during an update spawns at the end of it. Its first input, gravity
//! and lock-delay step happen on the following update.

use std::time::Duration;

use crate::config::WellConfig;
use crate::events::EventLog;
use crate::queue::PieceQueue;
use crate::types::{InputEvent, PieceKind, WellEvent};
use crate::well::Well;

#[derive(Debug)]
pub struct Session {
    well: Well,
    queue: PieceQueue,
    events: EventLog,
    hold: Option<PieceKind>,
    hold_used: bool,
    lines: u32,
    pieces: u32,
    started: bool,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self::with_config(WellConfig::default(), seed)
    }

    pub fn with_config(config: WellConfig, seed: u32) -> Self {
        let mut well = Well::with_config(config);
        let events = well.observers_mut().collect_all();
        Self {
            well,
            queue: PieceQueue::new(seed),
            events,
            hold: None,
            hold_used: false,
            lines: 0,
            pieces: 0,
            started: false,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn well(&self) -> &Well {
        &self.well
    }

    pub fn well_mut(&mut self) -> &mut Well {
        &mut self.well
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Pieces spawned so far (hold swaps excluded)
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn game_over(&self) -> bool {
        self.well.is_game_over()
    }

    /// Step the well, then react to what it emitted. Returns those events.
    pub fn update(&mut self, inputs: &[InputEvent], elapsed: Duration) -> Vec<WellEvent> {
        if !self.started {
            return Vec::new();
        }

        self.well.update(inputs, elapsed);

        let events = self.events.drain();
        for event in &events {
            match event {
                WellEvent::NextRequested => self.spawn_next(),
                WellEvent::HoldRequested => self.swap_hold(),
                WellEvent::LineClear { count } => self.lines += *count as u32,
                WellEvent::PieceLocked => {}
            }
        }
        events
    }

    fn spawn_next(&mut self) {
        if self.well.is_game_over() || self.well.active_piece().is_some() {
            return;
        }
        let kind = self.queue.next();
        self.pieces += 1;
        self.hold_used = false;
        self.well.add_piece(kind);
    }

    fn swap_hold(&mut self) {
        if self.hold_used || self.well.is_game_over() {
            return;
        }
        let Some(current) = self.well.release_piece() else {
            return;
        };

        let next = match self.hold.replace(current.kind()) {
            Some(held) => held,
            None => {
                self.pieces += 1;
                self.queue.next()
            }
        };
        self.well.add_piece(next);
        self.hold_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{frames, InputType};

    fn frame(session: &mut Session, inputs: &[InputEvent]) -> Vec<WellEvent> {
        session.update(inputs, frames(1))
    }

    #[test]
    fn test_start_spawns_first_preview_piece() {
        let mut session = Session::new(99);
        let first = session.queue().preview().next();
        session.start();
        assert_eq!(session.well().active_piece().map(|p| p.kind()), first);
        assert_eq!(session.pieces(), 1);
    }

    #[test]
    fn test_hold_swaps_once_per_piece() {
        let mut session = Session::new(5);
        session.start();
        let first = session.well().active_piece().map(|p| p.kind());

        frame(&mut session, &[InputEvent::press(InputType::Hold)]);
        assert_eq!(session.hold_piece(), first);
        assert!(!session.can_hold());
        let second = session.well().active_piece().map(|p| p.kind());

        frame(&mut session, &[InputEvent::release(InputType::Hold)]);
        frame(&mut session, &[InputEvent::press(InputType::Hold)]);
        assert_eq!(session.hold_piece(), first);
        assert_eq!(session.well().active_piece().map(|p| p.kind()), second);
    }

    #[test]
    fn test_hard_drop_requests_and_spawns_next() {
        let mut session = Session::new(1);
        session.start();
        let events = frame(&mut session, &[InputEvent::press(InputType::HardDrop)]);
        assert_eq!(
            events,
            vec![WellEvent::PieceLocked, WellEvent::NextRequested]
        );
        assert!(session.well().active_piece().is_some());
        assert_eq!(session.pieces(), 2);
        assert!(session.can_hold());
    }

    #[test]
    fn test_spawned_piece_waits_for_next_update() {
        let mut session = Session::new(3);
        session.start();
        session.update(&[InputEvent::press(InputType::HardDrop)], frames(200));
        assert_eq!(session.well().active_position(), Some((3, 2)));

        session.update(&[], frames(64));
        assert_eq!(session.well().active_position(), Some((3, 3)));
    }

    #[test]
    fn test_update_before_start_is_inert() {
        let mut session = Session::new(1);
        assert!(frame(&mut session, &[InputEvent::press(InputType::HardDrop)]).is_empty());
        assert!(session.well().active_piece().is_none());
    }
}
