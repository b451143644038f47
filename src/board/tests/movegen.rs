//! Move generation tests at fixed squares.

use crate::board::movegen::{cast_rays, ALL_DIRECTIONS};
use crate::board::{construct_piece, Piece, PieceKind, Square};

fn sorted_moves(kind: PieceKind, cell: &str) -> Vec<String> {
    let piece = construct_piece(kind, cell).unwrap();
    let mut moves = piece.possible_moves();
    moves.sort();
    moves
}

fn sorted(cells: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = cells.iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}

#[test]
fn test_pawn_steps_forward() {
    assert_eq!(sorted_moves(PieceKind::Pawn, "G1"), ["G2"]);
    assert_eq!(sorted_moves(PieceKind::Pawn, "a4"), ["A5"]);
    assert_eq!(sorted_moves(PieceKind::Pawn, "H7"), ["H8"]);
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    assert!(sorted_moves(PieceKind::Pawn, "E8").is_empty());
    assert!(sorted_moves(PieceKind::Pawn, "a8").is_empty());
}

#[test]
fn test_king_center() {
    assert_eq!(
        sorted_moves(PieceKind::King, "D5"),
        sorted(&["C4", "C5", "C6", "D4", "D6", "E4", "E5", "E6"])
    );
}

#[test]
fn test_king_corner() {
    assert_eq!(sorted_moves(PieceKind::King, "A1"), ["A2", "B1", "B2"]);
    assert_eq!(sorted_moves(PieceKind::King, "H8"), ["G7", "G8", "H7"]);
}

#[test]
fn test_king_edge() {
    assert_eq!(
        sorted_moves(PieceKind::King, "E1"),
        sorted(&["D1", "D2", "E2", "F1", "F2"])
    );
}

#[test]
fn test_king_generation_order() {
    let king = Piece::king("D5").unwrap();
    assert_eq!(
        king.possible_moves(),
        ["C4", "D4", "E4", "C5", "E5", "C6", "D6", "E6"]
    );
}

#[test]
fn test_queen_corner() {
    assert_eq!(
        sorted_moves(PieceKind::Queen, "A1"),
        sorted(&[
            "A2", "A3", "A4", "A5", "A6", "A7", "A8", "B1", "C1", "D1", "E1", "F1", "G1", "H1",
            "B2", "C3", "D4", "E5", "F6", "G7", "H8",
        ])
    );
}

#[test]
fn test_queen_middle() {
    let moves = sorted_moves(PieceKind::Queen, "E4");
    assert_eq!(moves.len(), 27);
    assert_eq!(
        moves,
        sorted(&[
            "A4", "B4", "C4", "D4", "F4", "G4", "H4", "E1", "E2", "E3", "E5", "E6", "E7", "E8",
            "A8", "B7", "C6", "D5", "F3", "G2", "H1", "B1", "C2", "D3", "F5", "G6", "H7",
        ])
    );
}

#[test]
fn test_queen_edge_row() {
    assert_eq!(
        sorted_moves(PieceKind::Queen, "D1"),
        sorted(&[
            "A1", "B1", "C1", "E1", "F1", "G1", "H1", "D2", "D3", "D4", "D5", "D6", "D7", "D8",
            "A4", "B3", "C2", "E2", "F3", "G4", "H5",
        ])
    );
}

#[test]
fn test_queen_generation_order_starts_down_left() {
    let queen = Piece::queen("C3").unwrap();
    let moves = queen.possible_moves();
    assert_eq!(&moves[..2], ["B2", "A1"]);
    assert_eq!(moves.last().map(String::as_str), Some("H8"));
}

#[test]
fn test_queen_matches_king_rays_extended() {
    for from in Square::all() {
        let king = Piece::King(from).destinations();
        let queen = Piece::Queen(from).destinations();
        assert!(king.iter().all(|sq| queen.contains(sq)), "king escapes queen at {from}");
        assert_eq!(cast_rays(from, &ALL_DIRECTIONS, 7), queen);
    }
}

#[test]
fn test_destinations_agree_with_possible_moves() {
    let piece = Piece::queen("b6").unwrap();
    let as_text: Vec<String> = piece.destinations().iter().map(|s| s.to_string()).collect();
    assert_eq!(as_text, piece.possible_moves());
}
