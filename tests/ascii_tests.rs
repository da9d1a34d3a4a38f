//! Debug text dump tests

use tetris_well::core::ascii::{load_matrix, load_well, matrix_to_ascii, well_to_ascii, ASCII_LEN};
use tetris_well::core::{Matrix, Well};
use tetris_well::types::{PieceKind, WELL_HEIGHT, WELL_WIDTH};

fn board(rows_from_bottom: &[&str]) -> String {
    let mut lines = vec![".".repeat(WELL_WIDTH); WELL_HEIGHT - rows_from_bottom.len()];
    lines.extend(rows_from_bottom.iter().rev().map(|s| s.to_string()));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[test]
fn test_dump_has_fixed_shape() {
    let dump = well_to_ascii(&Well::new());
    assert_eq!(dump.len(), ASCII_LEN);
    assert_eq!(dump.lines().count(), WELL_HEIGHT);
    assert!(dump.lines().all(|l| l.len() == WELL_WIDTH));
    assert!(dump.ends_with('\n'));
}

#[test]
fn test_loaded_board_round_trips_through_dump() {
    let text = board(&["IIII.OOSSZ", "..T..OO..Z", ".TTT.....Z"]);
    let mut matrix = Matrix::new();
    load_matrix(&mut matrix, &text);
    assert_eq!(matrix_to_ascii(&matrix), text);
    assert!(matrix.is_occupied(0, 21));
    assert!(!matrix.is_occupied(4, 21));
}

#[test]
fn test_load_well_moves_the_ghost() {
    let mut well = Well::new();
    well.add_piece(PieceKind::O);
    assert_eq!(well.ghost_y(), Some(20));

    load_well(&mut well, &board(&["JJJJJJJJJ.", "....J....."]));
    assert_eq!(well.ghost_y(), Some(18));

    let dump = well_to_ascii(&well);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[2], "....oo....");
    assert_eq!(lines[18], "....gg....");
    assert_eq!(lines[19], "....gg....");
    assert_eq!(lines[20], "....J.....");
}

#[test]
fn test_piece_hides_ghost_when_resting() {
    let mut well = Well::new();
    well.add_piece(PieceKind::O);
    while well.move_down_now() {}

    let dump = well_to_ascii(&well);
    assert!(!dump.contains('g'));
    assert_eq!(dump.lines().last(), Some("....oo...."));
}

#[test]
fn test_active_piece_is_lowercase() {
    let mut well = Well::new();
    well.add_piece(PieceKind::J);
    let dump = well_to_ascii(&well);
    assert_eq!(dump.lines().nth(2), Some("...j......"));
    assert_eq!(dump.lines().nth(3), Some("...jjj...."));
}

#[test]
#[should_panic(expected = "unexpected character")]
fn test_ghost_letter_cannot_be_loaded() {
    let mut text = board(&[]);
    text.replace_range(0..1, "g");
    load_matrix(&mut Matrix::new(), &text);
}
