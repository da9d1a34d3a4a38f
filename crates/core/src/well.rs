//! Well module - the playfield simulation
//!
//! The well owns the matrix, the active piece and every timer that decides how the
//! piece moves. It is stepped once per frame with the input events of that frame
//! and the elapsed time:
//!
//! 1. advance the lock flashes and line clear effects
//! 2. stop here after game over
//! 3. while cleared rows are pending, wait for the blocking effects, then compact
//!    the matrix and request the next piece
//! 4. otherwise apply input (hard drop, hold, rotation, DAS, soft drop), gravity
//!    and lock delay
//!
//! Expected refusals (blocked moves, rotations without a valid kick) are silent and
//! only reported through the `bool` results. Calls that break the geometry
//! contract (collision queries outside the piece envelope, locking without a piece,
//! more than four full rows) panic.

use std::fmt;
use std::time::Duration;

use arrayvec::ArrayVec;

use crate::anim::{CellLockAnim, LineClearAnim, WellAnimation};
use crate::config::WellConfig;
use crate::events::Observers;
use crate::matrix::Matrix;
use crate::piece::{kick_rule, Piece, PieceShape};
use crate::render::{DrawSurface, Rect, Texture};
use crate::timer::{tick_down, Countdown};
use crate::types::*;

/// Held/not-held table for the current and the previous frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KeyStates {
    current: [bool; InputType::COUNT],
    previous: [bool; InputType::COUNT],
}

impl KeyStates {
    fn advance(&mut self, events: &[InputEvent]) {
        self.previous = self.current;
        for event in events {
            self.current[event.input.index()] = event.down;
        }
    }

    fn held(&self, input: InputType) -> bool {
        self.current[input.index()]
    }

    fn held_before(&self, input: InputType) -> bool {
        self.previous[input.index()]
    }

    fn release_all(&mut self) {
        self.current = [false; InputType::COUNT];
    }
}

pub struct Well {
    config: WellConfig,
    matrix: Matrix,
    active: Option<Box<dyn PieceShape>>,
    active_x: i32,
    active_y: i32,
    ghost_y: i32,
    game_over: bool,

    gravity_delay: Duration,
    gravity_timer: Duration,
    horizontal_delay_current: Duration,
    horizontal_timer: Duration,
    /// Remaining DAS charge; once it would go negative, repeats switch to turbo
    das_charge: Duration,
    softdrop_delay: Duration,
    softdrop_timer: Duration,
    rotation_timer: Duration,
    skip_gravity: bool,
    lock_countdown: Countdown,

    keys: KeyStates,
    pending_cleared_rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
    animations: Vec<Box<dyn WellAnimation>>,
    blocking_anims: Vec<Box<dyn WellAnimation>>,
    observers: Observers,
}

impl Well {
    pub fn new() -> Self {
        Self::with_config(WellConfig::default())
    }

    pub fn with_config(mut config: WellConfig) -> Self {
        config.gravity = config.gravity.max(GRAVITY_20G);
        let gravity_delay = config.gravity;
        Self {
            config,
            matrix: Matrix::new(),
            active: None,
            active_x: 0,
            active_y: 0,
            ghost_y: 0,
            game_over: false,
            gravity_delay,
            gravity_timer: Duration::ZERO,
            horizontal_delay_current: config.das_normal,
            horizontal_timer: Duration::ZERO,
            das_charge: config.das_normal,
            softdrop_delay: gravity_delay / SOFT_DROP_DIVISOR,
            softdrop_timer: Duration::ZERO,
            rotation_timer: Duration::ZERO,
            skip_gravity: false,
            lock_countdown: Countdown::new(config.lock_delay),
            keys: KeyStates::default(),
            pending_cleared_rows: ArrayVec::new(),
            animations: Vec::new(),
            blocking_anims: Vec::new(),
            observers: Observers::new(),
        }
    }

    pub fn config(&self) -> &WellConfig {
        &self.config
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Direct matrix access for debug loaders and tests.
    ///
    /// Call [`Well::calculate_ghost_offset`] afterwards if a piece is active.
    pub fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }

    pub fn active_piece(&self) -> Option<&dyn PieceShape> {
        self.active.as_deref()
    }

    /// Board coordinates of the active piece box
    pub fn active_position(&self) -> Option<(i32, i32)> {
        self.active.as_ref().map(|_| (self.active_x, self.active_y))
    }

    pub fn ghost_y(&self) -> Option<i32> {
        self.active.as_ref().map(|_| self.ghost_y)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn pending_cleared_rows(&self) -> &[usize] {
        &self.pending_cleared_rows
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn blocking_animation_count(&self) -> usize {
        self.blocking_anims.len()
    }

    pub fn lock_countdown(&self) -> &Countdown {
        &self.lock_countdown
    }

    /// Current horizontal repeat interval (normal until DAS is charged, then turbo)
    pub fn horizontal_delay(&self) -> Duration {
        self.horizontal_delay_current
    }

    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    pub fn gravity(&self) -> Duration {
        self.gravity_delay
    }

    /// Set the gravity interval, never faster than 20G. Soft drop follows at 1/20.
    pub fn set_gravity(&mut self, gravity: Duration) {
        self.gravity_delay = gravity.max(GRAVITY_20G);
        self.config.gravity = self.gravity_delay;
        self.softdrop_delay = self.gravity_delay / SOFT_DROP_DIVISOR;
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self, events: &[InputEvent], elapsed: Duration) {
        self.update_animations(elapsed);

        if self.game_over {
            return;
        }

        if !self.pending_cleared_rows.is_empty() {
            if self.blocking_anims.is_empty() {
                self.remove_empty_rows();
                self.lock_countdown.stop();
                self.notify(WellEvent::NextRequested);
            }
            return;
        }

        self.keys.advance(events);
        self.handle_keys(events, elapsed);

        if self.active.is_none() {
            return;
        }

        self.update_gravity(elapsed);
        self.update_lock_delay(elapsed);
    }

    fn update_animations(&mut self, elapsed: Duration) {
        for anim in self.animations.iter_mut() {
            anim.update(elapsed);
        }
        self.animations.retain(|anim| anim.is_active());

        for anim in self.blocking_anims.iter_mut() {
            anim.update(elapsed);
        }
        self.blocking_anims.retain(|anim| anim.is_active());
    }

    fn handle_keys(&mut self, events: &[InputEvent], elapsed: Duration) {
        // Gravity only yields to a soft drop that was already held last frame.
        self.skip_gravity = self.keys.held(InputType::Down) && self.keys.held_before(InputType::Down);

        for event in events {
            match (event.input, event.down) {
                (InputType::Up | InputType::HardDrop, true) => {
                    if self.active.is_some() {
                        self.hard_drop();
                    }
                    self.skip_gravity = true;
                }
                (InputType::Hold, true) => {
                    self.notify(WellEvent::HoldRequested);
                    self.skip_gravity = true;
                }
                (InputType::Left | InputType::Right, false) => self.reset_das(),
                _ => {}
            }
        }

        let rotation_ready = tick_down(&mut self.rotation_timer, elapsed);
        let ccw = self.keys.held(InputType::RotateCcw);
        let cw = self.keys.held(InputType::RotateCw);
        if rotation_ready && ccw != cw {
            if ccw {
                self.rotate_ccw_now();
            } else {
                self.rotate_cw_now();
            }
            self.rotation_timer = self.config.rotation_repeat;
        }

        let horizontal_ready = tick_down(&mut self.horizontal_timer, elapsed);
        let left = self.keys.held(InputType::Left);
        let right = self.keys.held(InputType::Right);
        if horizontal_ready && left != right {
            if left {
                self.move_left_now();
            } else {
                self.move_right_now();
            }

            match self.das_charge.checked_sub(self.config.das_normal) {
                Some(charge) => self.das_charge = charge,
                None => self.horizontal_delay_current = self.config.das_turbo,
            }
            self.horizontal_timer = self.horizontal_delay_current;
        }

        let softdrop_ready = tick_down(&mut self.softdrop_timer, elapsed);
        if self.keys.held(InputType::Down) && softdrop_ready {
            self.move_down_now();
            self.skip_gravity = true;
            self.softdrop_timer = self.softdrop_delay;
        }
    }

    fn reset_das(&mut self) {
        self.das_charge = self.config.das_normal;
        self.horizontal_delay_current = self.config.das_normal;
    }

    fn reset_input(&mut self) {
        self.reset_das();
        self.keys.release_all();
    }

    fn update_gravity(&mut self, elapsed: Duration) {
        self.gravity_timer += elapsed;
        while self.gravity_timer >= self.gravity_delay {
            self.gravity_timer -= self.gravity_delay;

            if !self.skip_gravity {
                self.apply_gravity();
            }
        }
    }

    fn update_lock_delay(&mut self, elapsed: Duration) {
        // A sonic drop during gravity may already have locked the piece.
        if self.active.is_none() {
            return;
        }

        if self.is_on_ground() {
            self.lock_countdown.unpause();
        } else {
            self.lock_countdown.stop();
        }

        if self.lock_countdown.update(elapsed) {
            self.lock_then_request_next();
        }
    }

    /// Put a standard piece of `kind` under player control.
    ///
    /// Returns false if it could not be placed, which ends the game.
    pub fn add_piece(&mut self, kind: PieceKind) -> bool {
        self.spawn(Box::new(Piece::new(kind)))
    }

    /// Put `piece` under player control at the spawn column.
    ///
    /// Rows 2, 1 and 0 are tried in that order. If none fits, the piece is locked
    /// where it overlaps and the well enters its terminal game-over state.
    pub fn spawn(&mut self, piece: Box<dyn PieceShape>) -> bool {
        assert!(
            self.active.is_none(),
            "the player can only control one piece at a time"
        );

        self.active = Some(piece);
        self.active_x = SPAWN_X;
        self.lock_countdown.stop();
        self.reset_das();

        for y in (0..SPAWN_START_Y).rev() {
            self.active_y = y;
            if !self.has_collision_at(self.active_x, y) {
                self.calculate_ghost_offset();
                return true;
            }
        }

        self.lock_and_release_piece();
        self.game_over = true;
        false
    }

    /// Take the active piece away from the player without locking it
    pub fn release_piece(&mut self) -> Option<Box<dyn PieceShape>> {
        self.lock_countdown.stop();
        self.active.take()
    }

    /// Would the active piece overlap the stack or a wall with its box at (x, y)?
    ///
    /// Cells outside the matrix count as filled. At least one column of the box must
    /// be on the board (`-3 < x + 1`, `x < width`) and `y` must be a valid row.
    pub fn has_collision_at(&self, x: i32, y: i32) -> bool {
        assert!(
            x + 3 >= 0 && x < WELL_WIDTH as i32,
            "piece box at column {x} does not touch the board"
        );
        assert!(
            (0..WELL_HEIGHT as i32).contains(&y),
            "piece box at row {y} is outside the board"
        );
        let Some(piece) = self.active.as_deref() else {
            panic!("collision query without an active piece");
        };

        for row in 0..PIECE_GRID_SIZE {
            for col in 0..PIECE_GRID_SIZE {
                if !piece.is_filled(row, col) {
                    continue;
                }
                let bx = x + col as i32;
                let by = y + row as i32;
                if !self.matrix.in_bounds(bx, by) || self.matrix.is_occupied(bx, by) {
                    return true;
                }
            }
        }
        false
    }

    /// Collision test that treats positions outside the query envelope as blocked
    fn fits_at(&self, x: i32, y: i32) -> bool {
        let in_envelope =
            x + 3 >= 0 && x < WELL_WIDTH as i32 && (0..WELL_HEIGHT as i32).contains(&y);
        in_envelope && !self.has_collision_at(x, y)
    }

    /// Recompute the landing row of the active piece
    pub fn calculate_ghost_offset(&mut self) {
        assert!(self.active.is_some(), "ghost requested without an active piece");

        let mut ghost = self.active_y;
        while ghost + 1 < WELL_HEIGHT as i32 && !self.has_collision_at(self.active_x, ghost + 1) {
            ghost += 1;
        }
        self.ghost_y = ghost;
    }

    /// Is the active piece resting on the stack or the floor?
    pub fn is_on_ground(&self) -> bool {
        assert!(self.active.is_some(), "ground check without an active piece");

        self.active_y + 1 >= WELL_HEIGHT as i32
            || self.has_collision_at(self.active_x, self.active_y + 1)
    }

    fn after_successful_shift(&mut self) {
        self.calculate_ghost_offset();

        if self.config.lock_infinity {
            self.lock_countdown.stop();
        }
    }

    pub fn move_left_now(&mut self) -> bool {
        if self.active.is_none() || self.active_x - 1 <= -3 {
            return false;
        }
        if self.has_collision_at(self.active_x - 1, self.active_y) {
            return false;
        }

        self.active_x -= 1;
        self.after_successful_shift();
        true
    }

    pub fn move_right_now(&mut self) -> bool {
        if self.active.is_none() || self.active_x + 1 >= WELL_WIDTH as i32 {
            return false;
        }
        if self.has_collision_at(self.active_x + 1, self.active_y) {
            return false;
        }

        self.active_x += 1;
        self.after_successful_shift();
        true
    }

    /// Step the piece down one row.
    ///
    /// On the ground with instant lock off and the lock delay already running, this
    /// locks the piece on demand instead.
    pub fn move_down_now(&mut self) -> bool {
        if self.active.is_none() || self.active_y + 1 >= WELL_HEIGHT as i32 {
            return false;
        }

        if !self.is_on_ground() {
            self.active_y += 1;
            return true;
        }

        if !self.config.harddrop_locks_instantly && self.lock_countdown.running() {
            self.lock_then_request_next();
        }
        false
    }

    pub fn apply_gravity(&mut self) {
        self.move_down_now();
    }

    pub fn hard_drop(&mut self) {
        assert!(self.active.is_some(), "hard drop without an active piece");

        self.active_y = self.ghost_y;
        self.move_down_now();
        if self.config.harddrop_locks_instantly {
            self.lock_then_request_next();
        }
    }

    pub fn rotate_cw_now(&mut self) -> bool {
        self.rotate_now(true)
    }

    pub fn rotate_ccw_now(&mut self) -> bool {
        self.rotate_now(false)
    }

    fn rotate_now(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if clockwise {
            piece.rotate_cw();
        } else {
            piece.rotate_ccw();
        }

        if self.has_collision_at(self.active_x, self.active_y) && !self.place_by_wall_kick() {
            if let Some(piece) = self.active.as_mut() {
                if clockwise {
                    piece.rotate_ccw();
                } else {
                    piece.rotate_cw();
                }
            }
            return false;
        }

        self.after_successful_shift();
        true
    }

    /// Try the kick table for the freshly rotated piece.
    ///
    /// Per floor offset: one column right, one left, then two right and two left for
    /// wide-kicking kinds. The first free spot is committed.
    fn place_by_wall_kick(&mut self) -> bool {
        const NARROW: [i32; 2] = [1, -1];
        const WIDE: [i32; 4] = [1, -1, 2, -2];

        let Some(piece) = self.active.as_deref() else {
            return false;
        };
        let rule = kick_rule(piece.kind());
        let shifts: &[i32] = if rule.wide { &WIDE } else { &NARROW };

        for floor in 0..rule.floor_kicks {
            let y = self.active_y - floor;
            for &dx in shifts {
                let x = self.active_x + dx;
                if dx.abs() == 2 && !(0..WELL_WIDTH as i32).contains(&x) {
                    continue;
                }
                if self.fits_at(x, y) {
                    self.active_x = x;
                    self.active_y = y;
                    return true;
                }
            }
        }
        false
    }

    fn lock_then_request_next(&mut self) {
        self.lock_and_release_piece();

        // With rows pending, compaction requests the next piece itself.
        if !self.game_over && self.blocking_anims.is_empty() && self.pending_cleared_rows.is_empty()
        {
            self.notify(WellEvent::NextRequested);
        }
    }

    /// Move the active piece's minos into the matrix and drop the piece.
    pub fn lock_and_release_piece(&mut self) {
        let Some(mut piece) = self.active.take() else {
            panic!("lock without an active piece");
        };

        for row in 0..PIECE_GRID_SIZE {
            for col in 0..PIECE_GRID_SIZE {
                let bx = self.active_x + col as i32;
                let by = self.active_y + row as i32;
                let Some(slot) = self.matrix.get_mut(bx, by) else {
                    continue;
                };
                let cell = &mut piece.grid_mut()[row][col];
                if cell.is_none() {
                    continue;
                }

                std::mem::swap(slot, cell);

                if by >= HIDDEN_ROWS as i32 {
                    self.animations.push(Box::new(CellLockAnim::new(
                        by as usize - HIDDEN_ROWS,
                        bx as usize,
                    )));
                }
            }
        }

        self.lock_countdown.stop();
        self.notify(WellEvent::PieceLocked);
        self.check_lineclear();
    }

    fn check_lineclear(&mut self) {
        assert!(self.active.is_none());

        self.pending_cleared_rows = self.matrix.full_rows();
        if self.pending_cleared_rows.is_empty() {
            return;
        }

        for &row in &self.pending_cleared_rows {
            self.matrix.clear_row(row);

            if row >= HIDDEN_ROWS {
                self.blocking_anims
                    .push(Box::new(LineClearAnim::new(row - HIDDEN_ROWS)));
            }
        }

        // Held keys must not carry over into the next piece.
        self.reset_input();
    }

    /// Collapse the emptied rows, shifting everything above them down.
    fn remove_empty_rows(&mut self) {
        assert!(!self.pending_cleared_rows.is_empty());

        self.notify(WellEvent::LineClear {
            count: self.pending_cleared_rows.len(),
        });

        let mut pending = [false; WELL_HEIGHT];
        for &row in &self.pending_cleared_rows {
            pending[row] = true;
        }

        for row in (0..WELL_HEIGHT).rev() {
            if !pending[row] {
                continue;
            }
            let Some(source) = (0..row).rev().find(|&r| !pending[r]) else {
                break;
            };
            self.matrix.swap_rows(row, source);
            pending[source] = true;
        }

        self.pending_cleared_rows.clear();
    }

    fn notify(&mut self, event: WellEvent) {
        self.observers.notify(event);
    }

    /// Draw the visible rows with their top-left corner at pixel (x, y)
    pub fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) {
        let cell_px = |col: i32, row: i32| (x + col * CELL_SIZE_PX, y + row * CELL_SIZE_PX);

        for row in 0..VISIBLE_ROWS as i32 {
            for col in 0..WELL_WIDTH as i32 {
                let (px, py) = cell_px(col, row);
                surface.draw_texture(Texture::MatrixBg, Rect::cell(px, py));
            }
        }

        for row in 0..VISIBLE_ROWS {
            for (col, cell) in self.matrix.row(row + HIDDEN_ROWS).iter().enumerate() {
                if let Some(mino) = cell {
                    let (px, py) = cell_px(col as i32, row as i32);
                    mino.draw(surface, px, py);
                }
            }
        }

        if let Some(piece) = self.active.as_deref() {
            for row in 0..PIECE_GRID_SIZE {
                let ghost_row = self.ghost_y + row as i32 - HIDDEN_ROWS as i32;
                if ghost_row < 0 {
                    continue;
                }
                for col in 0..PIECE_GRID_SIZE {
                    if piece.is_filled(row, col) {
                        let (px, py) = cell_px(self.active_x + col as i32, ghost_row);
                        surface.draw_texture(Texture::Ghost, Rect::cell(px, py));
                    }
                }
            }

            for (row, cells) in piece.grid().iter().enumerate() {
                let piece_row = self.active_y + row as i32 - HIDDEN_ROWS as i32;
                if piece_row < 0 {
                    continue;
                }
                for (col, cell) in cells.iter().enumerate() {
                    if let Some(mino) = cell {
                        let (px, py) = cell_px(self.active_x + col as i32, piece_row);
                        mino.draw(surface, px, py);
                    }
                }
            }
        }

        for anim in self.animations.iter().chain(self.blocking_anims.iter()) {
            anim.draw(surface, x, y);
        }
    }
}

impl Default for Well {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Well")
            .field("active", &self.active.as_deref().map(|p| p.kind()))
            .field("active_x", &self.active_x)
            .field("active_y", &self.active_y)
            .field("ghost_y", &self.ghost_y)
            .field("game_over", &self.game_over)
            .field("pending_cleared_rows", &self.pending_cleared_rows)
            .field("lock_countdown", &self.lock_countdown)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Mino;

    fn fill(well: &mut Well, col: i32, row: i32) {
        well.matrix_mut().set(col, row, Some(Mino::new(PieceKind::Z)));
    }

    #[test]
    fn test_spawn_on_empty_board_uses_row_two() {
        let mut well = Well::new();
        assert!(well.add_piece(PieceKind::T));
        assert_eq!(well.active_position(), Some((SPAWN_X, 2)));
        // T occupies rows 0-1 of its box, so it lands with its box at row 20.
        assert_eq!(well.ghost_y(), Some(20));
    }

    #[test]
    fn test_spawn_moves_up_when_blocked() {
        let mut well = Well::new();
        // T North has minos in box rows 0 and 1; block board row 3 under its middle.
        fill(&mut well, 4, 3);
        assert!(well.add_piece(PieceKind::T));
        assert_eq!(well.active_position(), Some((SPAWN_X, 1)));
    }

    #[test]
    fn test_spawn_failure_locks_and_ends_game() {
        let mut well = Well::new();
        for row in 0..4 {
            fill(&mut well, 4, row);
        }
        assert!(!well.add_piece(PieceKind::T));
        assert!(well.is_game_over());
        assert!(well.active_piece().is_none());
        // The overlapping piece was merged anyway.
        assert!(well.matrix().is_occupied(3, 1));
        assert!(well.matrix().is_occupied(5, 1));
    }

    #[test]
    #[should_panic(expected = "one piece at a time")]
    fn test_double_spawn_is_a_contract_violation() {
        let mut well = Well::new();
        well.add_piece(PieceKind::T);
        well.add_piece(PieceKind::O);
    }

    #[test]
    #[should_panic(expected = "does not touch the board")]
    fn test_collision_query_outside_envelope_panics() {
        let mut well = Well::new();
        well.add_piece(PieceKind::T);
        well.has_collision_at(-4, 5);
    }

    #[test]
    fn test_horizontal_limits() {
        let mut well = Well::new();
        well.add_piece(PieceKind::I);
        let mut moves = 0;
        while well.move_left_now() {
            moves += 1;
        }
        assert_eq!(moves, 3);
        assert_eq!(well.active_position(), Some((0, 2)));

        while well.move_right_now() {}
        assert_eq!(well.active_position(), Some((6, 2)));
    }

    #[test]
    fn test_vertical_i_reaches_negative_columns() {
        let mut well = Well::new();
        well.add_piece(PieceKind::I);
        // West orientation keeps its minos in box column 1.
        assert!(well.rotate_ccw_now());
        while well.move_left_now() {}
        assert_eq!(well.active_position().map(|p| p.0), Some(-1));
    }

    #[test]
    fn test_wall_kick_prefers_right() {
        let mut well = Well::new();
        well.add_piece(PieceKind::T);
        assert!(well.rotate_cw_now());
        // East T: minos in box columns 1-2. Push the box against the left wall.
        while well.move_left_now() {}
        assert_eq!(well.active_position(), Some((-1, 2)));

        // Rotating back needs box column 0, which is off the board: kick right.
        assert!(well.rotate_ccw_now());
        assert_eq!(well.active_position(), Some((0, 2)));
    }

    #[test]
    fn test_i_piece_kicks_one_left_off_right_wall() {
        let mut well = Well::new();
        well.add_piece(PieceKind::I);
        assert!(well.rotate_cw_now()); // East: column 2 of the box
        while well.move_right_now() {}
        assert_eq!(well.active_position(), Some((7, 2)));

        // South needs board columns 7-10; one right fails, one left fits.
        assert!(well.rotate_cw_now());
        assert_eq!(well.active_position(), Some((6, 2)));
    }

    #[test]
    fn test_i_piece_wide_kick_off_left_wall() {
        let mut well = Well::new();
        well.add_piece(PieceKind::I);
        assert!(well.rotate_cw_now());
        while well.move_left_now() {}
        assert_eq!(well.active_position(), Some((-2, 2)));

        // North at -1 and -3 both leave the board; only the two-column kick fits.
        assert!(well.rotate_ccw_now());
        assert_eq!(well.active_position(), Some((0, 2)));
    }

    #[test]
    fn test_floor_kick_lifts_piece() {
        let mut well = Well::new();
        well.add_piece(PieceKind::I);
        assert!(well.rotate_cw_now());
        while well.move_left_now() {}
        // Block the row North would use at every column a same-row kick could reach.
        fill(&mut well, 3, 3);
        fill(&mut well, 4, 3);

        assert!(well.rotate_ccw_now());
        assert_eq!(well.active_position(), Some((0, 1)));
    }

    #[test]
    fn test_compaction_keeps_order_of_remaining_rows() {
        let mut well = Well::new();
        fill(&mut well, 0, 17);
        fill(&mut well, 1, 19);
        well.pending_cleared_rows.push(18);
        well.pending_cleared_rows.push(20);
        well.remove_empty_rows();

        assert!(well.matrix().is_occupied(0, 19));
        assert!(well.matrix().is_occupied(1, 20));
        assert_eq!(well.matrix().occupied_count(), 2);
        assert!(well.pending_cleared_rows().is_empty());
    }

    #[test]
    fn test_set_gravity_clamps_to_20g() {
        let mut well = Well::new();
        well.set_gravity(Duration::ZERO);
        assert_eq!(well.gravity(), GRAVITY_20G);
        assert_eq!(well.softdrop_delay, GRAVITY_20G / SOFT_DROP_DIVISOR);
    }
}
