//! Shared types for the well simulation.
//!
//! Everything here is plain data with no external dependencies, so the types can be
//! used from the simulation core, the terminal front-end and tests alike.
//!
//! # Well Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Hidden rows**: rows 0-1 sit above the visible area and are never drawn
//! - **Spawn column**: 3 (left edge of the 4x4 piece box)
//!
//! # Timing
//!
//! All timing is expressed as [`Duration`] and derived from 60 Hz frames:
//!
//! | Constant | Frames | Description |
//! |----------|--------|-------------|
//! | `GRAVITY_FRAMES` | 64 | Default gravity interval |
//! | `DAS_NORMAL_FRAMES` | 14 | Horizontal repeat before turbo kicks in |
//! | `DAS_TURBO_FRAMES` | 4 | Horizontal repeat once DAS is charged |
//! | `ROTATION_REPEAT_FRAMES` | 12 | Repeat rate of a held rotate key |
//! | `LOCK_DELAY_FRAMES` | 30 | Grace period on the ground before locking |
//!
//! Soft drop runs at `gravity / SOFT_DROP_DIVISOR`, and gravity never goes below
//! [`GRAVITY_20G`].
//!
//! # Examples
//!
//! ```
//! use tetris_well_types::{frames, PieceKind, Rotation, WELL_HEIGHT, WELL_WIDTH};
//!
//! assert_eq!(PieceKind::from_ascii('t'), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.as_ascii(), 'T');
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(WELL_WIDTH, 10);
//! assert_eq!(WELL_HEIGHT, 22);
//! assert_eq!(frames(60).as_millis(), 1000);
//! ```

use std::time::Duration;

/// Well width in cells (10 columns)
pub const WELL_WIDTH: usize = 10;

/// Rows drawn on screen
pub const VISIBLE_ROWS: usize = 20;

/// Buffer rows above the visible area
pub const HIDDEN_ROWS: usize = 2;

/// Total matrix height (visible + hidden)
pub const WELL_HEIGHT: usize = VISIBLE_ROWS + HIDDEN_ROWS;

/// Side length of the square piece box
pub const PIECE_GRID_SIZE: usize = 4;

/// Column where new pieces appear
pub const SPAWN_X: i32 = 3;

/// Spawning tries the rows below this one, moving upwards
pub const SPAWN_START_Y: i32 = 3;

/// Pixel size of a single mino texture
pub const CELL_SIZE_PX: i32 = 30;

/// Most rows a single lock can complete
pub const MAX_CLEARED_ROWS: usize = 4;

/// One 60 Hz frame, rounded to the nanosecond
pub const FRAME_DURATION_60HZ: Duration = Duration::from_nanos(16_666_667);

pub const GRAVITY_FRAMES: u32 = 64;
pub const DAS_NORMAL_FRAMES: u32 = 14;
pub const DAS_TURBO_FRAMES: u32 = 4;
pub const ROTATION_REPEAT_FRAMES: u32 = 12;
pub const LOCK_DELAY_FRAMES: u32 = 30;

/// Soft drop is this many times faster than gravity
pub const SOFT_DROP_DIVISOR: u32 = 20;

/// Fastest allowed gravity: 20 rows per frame
pub const GRAVITY_20G: Duration = Duration::from_nanos(16_666_667 / 20);

/// Lifetime of the flash drawn over a freshly locked cell
pub const LANDING_FLASH_MS: u64 = 120;

/// Lifetime of the line clear effect; row removal waits for it
pub const LINE_CLEAR_PAUSE_MS: u64 = 180;

/// Duration of `n` frames at 60 Hz.
pub const fn frames(n: u32) -> Duration {
    Duration::from_nanos(16_666_667 * n as u64)
}


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse a piece letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_well_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_ascii('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_ascii('o'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_ascii('x'), None);
    /// ```
    pub fn from_ascii(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used for locked minos in debug dumps
    pub fn as_ascii(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Rotation states of a piece box
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_well_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Logical inputs understood by the well
///
/// Key decoding lives elsewhere; the well only sees these ids with a pressed or
/// released flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Left,
    Right,
    Down,
    /// Hard drop on the directional pad
    Up,
    /// Rotate counter-clockwise
    RotateCcw,
    /// Rotate clockwise
    RotateCw,
    HardDrop,
    Hold,
}

impl InputType {
    pub const COUNT: usize = 8;

    pub const ALL: [InputType; InputType::COUNT] = [
        InputType::Left,
        InputType::Right,
        InputType::Down,
        InputType::Up,
        InputType::RotateCcw,
        InputType::RotateCw,
        InputType::HardDrop,
        InputType::Hold,
    ];

    /// Dense index for table lookups
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A single key-down or key-up of a logical input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub input: InputType,
    pub down: bool,
}

impl InputEvent {
    pub fn press(input: InputType) -> Self {
        Self { input, down: true }
    }

    pub fn release(input: InputType) -> Self {
        Self { input, down: false }
    }
}

/// Notifications sent from the well to the surrounding game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellEvent {
    /// The active piece was merged into the matrix
    PieceLocked,
    /// Full rows were removed
    LineClear { count: usize },
    /// The well has no piece and wants a new one
    NextRequested,
    /// The player asked to swap the active piece with the hold slot
    HoldRequested,
}

impl WellEvent {
    pub fn kind(&self) -> WellEventKind {
        match self {
            WellEvent::PieceLocked => WellEventKind::PieceLocked,
            WellEvent::LineClear { .. } => WellEventKind::LineClear,
            WellEvent::NextRequested => WellEventKind::NextRequested,
            WellEvent::HoldRequested => WellEventKind::HoldRequested,
        }
    }
}

/// Payload-free event tag used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellEventKind {
    PieceLocked,
    LineClear,
    NextRequested,
    HoldRequested,
}

impl WellEventKind {
    pub const COUNT: usize = 4;

    pub const ALL: [WellEventKind; WellEventKind::COUNT] = [
        WellEventKind::PieceLocked,
        WellEventKind::LineClear,
        WellEventKind::NextRequested,
        WellEventKind::HoldRequested,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}
