//! Text dumps of the well, for debugging and tests.
//!
//! One line per matrix row, each `WELL_WIDTH` characters followed by `\n`:
//!
//! - `.` empty cell
//! - `I`, `O`, `T`, `S`, `Z`, `J`, `L` locked minos
//! - the same letters in lowercase for the active piece
//! - `g` for the ghost
//!
//! The active piece is drawn over its ghost, and both over the matrix.
//!
//! ```
//! use tetris_well_core::{ascii, Well};
//! use tetris_well_core::types::{PieceKind, WELL_HEIGHT, WELL_WIDTH};
//!
//! let mut well = Well::new();
//! well.add_piece(PieceKind::O);
//! let dump = ascii::well_to_ascii(&well);
//! assert_eq!(dump.len(), (WELL_WIDTH + 1) * WELL_HEIGHT);
//! assert_eq!(dump.lines().nth(2), Some("....oo...."));
//! assert_eq!(dump.lines().last(), Some("....gg...."));
//! ```

use crate::matrix::Matrix;
use crate::piece::Mino;
use crate::types::{PieceKind, WELL_HEIGHT, WELL_WIDTH};
use crate::well::Well;

/// Expected length of a full dump
pub const ASCII_LEN: usize = (WELL_WIDTH + 1) * WELL_HEIGHT;

/// Matrix contents only
pub fn matrix_to_ascii(matrix: &Matrix) -> String {
    let mut out = String::with_capacity(ASCII_LEN);
    for row in matrix.rows() {
        for cell in row {
            out.push(cell.as_ref().map_or('.', Mino::as_ascii));
        }
        out.push('\n');
    }
    out
}

/// Matrix with the active piece and its ghost layered on top
pub fn well_to_ascii(well: &Well) -> String {
    let mut grid: Vec<Vec<char>> = matrix_to_ascii(well.matrix())
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    if let (Some(piece), Some((x, y)), Some(ghost_y)) =
        (well.active_piece(), well.active_position(), well.ghost_y())
    {
        assert!(
            x + 3 >= 0 && x < WELL_WIDTH as i32,
            "active piece at column {x} is off the board"
        );

        let mut stamp = |top: i32, glyph: &dyn Fn(&Mino) -> char| {
            for (row, cells) in piece.grid().iter().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    let (bx, by) = (x + col as i32, top + row as i32);
                    let in_bounds = (0..WELL_WIDTH as i32).contains(&bx)
                        && (0..WELL_HEIGHT as i32).contains(&by);
                    if let (true, Some(mino)) = (in_bounds, cell) {
                        grid[by as usize][bx as usize] = glyph(mino);
                    }
                }
            }
        };

        stamp(ghost_y, &|_| 'g');
        stamp(y, &|mino| mino.as_ascii().to_ascii_lowercase());
    }

    let mut out = String::with_capacity(ASCII_LEN);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

/// Replace the matrix contents from a dump.
///
/// Panics unless `text` is exactly [`ASCII_LEN`] characters of `.` and uppercase
/// piece letters with a separator closing every row.
pub fn load_matrix(matrix: &mut Matrix, text: &str) {
    assert_eq!(
        text.chars().count(),
        ASCII_LEN,
        "debug text must be {WELL_HEIGHT} rows of {WELL_WIDTH} cells plus separators"
    );

    let mut chars = text.chars();
    for row in 0..WELL_HEIGHT as i32 {
        for col in 0..WELL_WIDTH as i32 {
            let cell = match chars.next() {
                Some('.') | None => None,
                Some(c) => {
                    let Some(kind) = PieceKind::from_ascii(c).filter(|_| c.is_ascii_uppercase())
                    else {
                        panic!("unexpected character {c:?} at row {row}, column {col}");
                    };
                    Some(Mino::new(kind))
                }
            };
            matrix.set(col, row, cell);
        }
        // row separator
        chars.next();
    }
}

/// Load a dump into the well's matrix and refresh the ghost of any active piece
pub fn load_well(well: &mut Well, text: &str) {
    load_matrix(well.matrix_mut(), text);
    if well.active_piece().is_some() {
        well.calculate_ghost_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_dump() -> String {
        format!("{}\n", ".".repeat(WELL_WIDTH)).repeat(WELL_HEIGHT)
    }

    #[test]
    fn test_empty_matrix_dump() {
        assert_eq!(matrix_to_ascii(&Matrix::new()), empty_dump());
    }

    #[test]
    fn test_load_then_dump_reproduces_text() {
        let mut text = empty_dump();
        let last = ASCII_LEN - (WELL_WIDTH + 1);
        text.replace_range(last..last + WELL_WIDTH, "IJLOSTZ.IO");

        let mut matrix = Matrix::new();
        load_matrix(&mut matrix, &text);
        assert_eq!(matrix_to_ascii(&matrix), text);
        assert_eq!(matrix.occupied_count(), 9);
    }

    #[test]
    #[should_panic(expected = "debug text must be")]
    fn test_wrong_length_panics() {
        load_matrix(&mut Matrix::new(), "....\n");
    }

    #[test]
    #[should_panic(expected = "unexpected character")]
    fn test_lowercase_is_not_a_locked_mino() {
        let mut text = empty_dump();
        text.replace_range(0..1, "t");
        load_matrix(&mut Matrix::new(), &text);
    }

    #[test]
    fn test_piece_drawn_over_ghost_and_board() {
        let mut well = Well::new();
        well.add_piece(PieceKind::T);
        let dump = well_to_ascii(&well);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[2], "....t.....");
        assert_eq!(lines[3], "...ttt....");
        assert_eq!(lines[20], "....g.....");
        assert_eq!(lines[21], "...ggg....");
    }
}
