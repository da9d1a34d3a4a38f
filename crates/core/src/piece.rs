//! Pieces module - minos, the piece provider seam and the standard tetrominoes
//!
//! The well only talks to pieces through [`PieceShape`]: a kind, a 4x4 grid of
//! optional minos and in-place rotation. [`Piece`] is the stock provider built from
//! the classic seven shapes.

use crate::render::{DrawSurface, Rect, Texture};
use crate::types::{PieceKind, Rotation, PIECE_GRID_SIZE};

/// A single block, owned by exactly one matrix or piece cell.
///
/// Deliberately not `Copy`: locking moves minos from the piece into the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mino {
    kind: PieceKind,
}

impl Mino {
    pub fn new(kind: PieceKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn as_ascii(&self) -> char {
        self.kind.as_ascii()
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) {
        surface.draw_texture(Texture::Mino(self.kind), Rect::cell(x, y));
    }
}

/// Occupancy grid of a piece box, indexed `[row][col]`
pub type PieceGrid = [[Option<Mino>; PIECE_GRID_SIZE]; PIECE_GRID_SIZE];

/// Wall kick allowance of a piece kind.
///
/// Candidates are tried per floor offset `0..floor_kicks`: one column right, one
/// column left, then (if `wide`) two right and two left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickRule {
    pub floor_kicks: i32,
    pub wide: bool,
}

/// Kick rules are keyed by piece type, not by the actual box dimensions.
pub fn kick_rule(kind: PieceKind) -> KickRule {
    match kind {
        PieceKind::I => KickRule {
            floor_kicks: 3,
            wide: true,
        },
        _ => KickRule {
            floor_kicks: 2,
            wide: false,
        },
    }
}

/// Anything the well can control as its active piece
pub trait PieceShape {
    fn kind(&self) -> PieceKind;

    fn grid(&self) -> &PieceGrid;

    /// Mutable access, used to move minos out when locking
    fn grid_mut(&mut self) -> &mut PieceGrid;

    fn rotate_cw(&mut self);

    fn rotate_ccw(&mut self);

    fn is_filled(&self, row: usize, col: usize) -> bool {
        self.grid()[row][col].is_some()
    }
}

/// Offset of a single mino inside the 4x4 box, as (col, row)
type MinoOffset = (usize, usize);

/// Mino offsets for a kind and rotation
pub fn shape_offsets(kind: PieceKind, rotation: Rotation) -> [MinoOffset; 4] {
    use Rotation::*;
    match (kind, rotation) {
        (PieceKind::I, North) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (PieceKind::I, East) => [(2, 0), (2, 1), (2, 2), (2, 3)],
        (PieceKind::I, South) => [(0, 2), (1, 2), (2, 2), (3, 2)],
        (PieceKind::I, West) => [(1, 0), (1, 1), (1, 2), (1, 3)],

        (PieceKind::O, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (PieceKind::T, North) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::T, East) => [(1, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, South) => [(0, 1), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, West) => [(1, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::S, North) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (PieceKind::S, East) => [(1, 0), (1, 1), (2, 1), (2, 2)],
        (PieceKind::S, South) => [(1, 1), (2, 1), (0, 2), (1, 2)],
        (PieceKind::S, West) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::Z, North) => [(0, 0), (1, 0), (1, 1), (2, 1)],
        (PieceKind::Z, East) => [(2, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::Z, South) => [(0, 1), (1, 1), (1, 2), (2, 2)],
        (PieceKind::Z, West) => [(1, 0), (0, 1), (1, 1), (0, 2)],

        (PieceKind::J, North) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::J, East) => [(1, 0), (2, 0), (1, 1), (1, 2)],
        (PieceKind::J, South) => [(0, 1), (1, 1), (2, 1), (2, 2)],
        (PieceKind::J, West) => [(1, 0), (1, 1), (0, 2), (1, 2)],

        (PieceKind::L, North) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::L, East) => [(1, 0), (1, 1), (1, 2), (2, 2)],
        (PieceKind::L, South) => [(0, 1), (1, 1), (2, 1), (0, 2)],
        (PieceKind::L, West) => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

fn build_grid(kind: PieceKind, rotation: Rotation) -> PieceGrid {
    const EMPTY: Option<Mino> = None;
    const EMPTY_ROW: [Option<Mino>; PIECE_GRID_SIZE] = [EMPTY; PIECE_GRID_SIZE];
    let mut grid = [EMPTY_ROW; PIECE_GRID_SIZE];
    for (col, row) in shape_offsets(kind, rotation) {
        grid[row][col] = Some(Mino::new(kind));
    }
    grid
}

/// Standard tetromino, spawning in the North orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    grid: PieceGrid,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            grid: build_grid(kind, Rotation::North),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Draw the whole box with its top-left corner at (x, y)
    pub fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) {
        use crate::types::CELL_SIZE_PX;
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(mino) = cell {
                    mino.draw(
                        surface,
                        x + col as i32 * CELL_SIZE_PX,
                        y + row as i32 * CELL_SIZE_PX,
                    );
                }
            }
        }
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.grid = build_grid(self.kind, rotation);
    }
}

impl PieceShape for Piece {
    fn kind(&self) -> PieceKind {
        self.kind
    }

    fn grid(&self) -> &PieceGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut PieceGrid {
        &mut self.grid
    }

    fn rotate_cw(&mut self) {
        self.set_rotation(self.rotation.rotate_cw());
    }

    fn rotate_ccw(&mut self) {
        self.set_rotation(self.rotation.rotate_ccw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(piece: &Piece) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..PIECE_GRID_SIZE {
            for col in 0..PIECE_GRID_SIZE {
                if piece.is_filled(row, col) {
                    out.push((col, row));
                }
            }
        }
        out
    }

    #[test]
    fn test_every_shape_has_four_minos() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::new(kind);
            for _ in 0..4 {
                assert_eq!(filled(&piece).len(), 4, "{kind:?} {:?}", piece.rotation());
                assert!(piece
                    .grid()
                    .iter()
                    .flatten()
                    .flatten()
                    .all(|m| m.kind() == kind));
                piece.rotate_cw();
            }
        }
    }

    #[test]
    fn test_rotation_cycle_returns_to_spawn() {
        let mut piece = Piece::new(PieceKind::T);
        let spawn = filled(&piece);
        piece.rotate_cw();
        assert_eq!(piece.rotation(), Rotation::East);
        assert_ne!(filled(&piece), spawn);
        piece.rotate_ccw();
        assert_eq!(filled(&piece), spawn);
    }

    #[test]
    fn test_o_piece_sits_in_middle_columns() {
        let piece = Piece::new(PieceKind::O);
        assert_eq!(filled(&piece), vec![(1, 0), (2, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_kick_rules_by_type() {
        assert_eq!(
            kick_rule(PieceKind::I),
            KickRule {
                floor_kicks: 3,
                wide: true
            }
        );
        for kind in [PieceKind::T, PieceKind::O, PieceKind::L] {
            assert_eq!(kick_rule(kind).floor_kicks, 2);
            assert!(!kick_rule(kind).wide);
        }
    }
}
