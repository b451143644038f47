use std::fmt::Display;

const USAGE: &str = "Usage: chess_moves \"<PieceType>, <CellPosition>\"
Example: chess_moves \"Pawn, G1\"
Example: chess_moves \"King, D5\"
Example: chess_moves \"Queen, E4\"";

pub fn print_usage() {
    println!("{USAGE}");
}

pub fn print_moves(line: &str) {
    println!("{line}");
}

pub fn print_error(error: &impl Display) {
    eprintln!("Error: {error}");
}
