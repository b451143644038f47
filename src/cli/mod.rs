//! Command-line front end.
//!
//! Takes one argument of the form `"<PieceType>, <Cell>"`, prints the sorted
//! destinations on stdout, or `Error: <message>` on stderr with a failing
//! exit status.

use std::fmt;
use std::process::ExitCode;

use log::debug;

use crate::board::{construct_piece, resolve_piece_type, PieceError};

pub mod print;

/// Error type for a single command-line request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Input did not split into a piece type and a cell
    MalformedInput { input: String },
    /// Piece type or starting cell was rejected
    Piece(PieceError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MalformedInput { .. } => {
                write!(f, "Input format must be 'PieceType, CellPosition'.")
            }
            CliError::Piece(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::MalformedInput { .. } => None,
            CliError::Piece(e) => Some(e),
        }
    }
}

impl From<PieceError> for CliError {
    fn from(e: PieceError) -> Self {
        CliError::Piece(e)
    }
}

/// Split `"Queen, E4"` into its trimmed piece type and cell.
pub fn split_request(input: &str) -> Result<(&str, &str), CliError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [piece_type, cell] => Ok((*piece_type, *cell)),
        _ => Err(CliError::MalformedInput {
            input: input.to_string(),
        }),
    }
}

/// Run one request and return the line to print on success.
///
/// Destinations are sorted and deduplicated, then joined with `", "`.
pub fn evaluate(input: &str) -> Result<String, CliError> {
    let (piece_type, cell) = split_request(input)?;
    let kind = resolve_piece_type(piece_type)?;
    let piece = construct_piece(kind, cell)?;

    let mut moves = piece.possible_moves();
    moves.sort_unstable();
    moves.dedup();
    debug!("{piece}: {} moves after sorting", moves.len());

    Ok(moves.join(", "))
}

/// Entry point for the binary; `args` excludes the program name.
pub fn run<I>(args: I) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    let Some(input) = args.into_iter().next() else {
        print::print_usage();
        return ExitCode::FAILURE;
    };

    if input == "-h" || input == "--help" {
        print::print_usage();
        return ExitCode::SUCCESS;
    }

    match evaluate(&input) {
        Ok(line) => {
            print::print_moves(&line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
