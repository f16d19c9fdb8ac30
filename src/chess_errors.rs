//! Errors used throughout the rules engine.
//!
//! Normal move generation, legality filtering and make/unmake never fail: every
//! coordinate they touch is produced internally and lies on the board. The
//! variants below cover the boundary instead: a submitted move that is not
//! legal, malformed notation or FEN input, and an invalid game configuration.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::move_descriptions::MoveRequest;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The `(start, end)` pair matches no move in the current legal-move list.
    /// The game is left untouched.
    IllegalMove(MoveRequest),

    /// A square or move in coordinate notation could not be parsed.
    ///
    /// Payload: the offending text.
    InvalidAlgebraic(String),

    /// A FEN string was malformed.
    InvalidFen(String),

    /// A position was missing the king of one side.
    MissingKing(Color),

    /// The configured promotion piece is not knight, bishop, rook or queen.
    InvalidPromotionPiece(PieceKind),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove(request) => write!(f, "illegal move: {request}"),
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic notation: {text}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::MissingKing(color) => write!(f, "position has no {color:?} king"),
            ChessError::InvalidPromotionPiece(kind) => {
                write!(f, "pawns cannot promote to {kind:?}")
            }
        }
    }
}

impl Error for ChessError {}
