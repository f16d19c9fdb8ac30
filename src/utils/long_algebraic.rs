//! Long algebraic move notation ("e2e4", "e7e8q").
//!
//! Parsing only yields endpoints; the game controller matches them against
//! the legal-move list. A trailing promotion letter is accepted only when it
//! names the promotion piece the game is configured with.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::{ChessMove, MoveRequest, SpecialMove};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parsed form of a long algebraic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongAlgebraicMove {
    pub request: MoveRequest,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> ChessResult<LongAlgebraicMove> {
    let invalid = || ChessError::InvalidAlgebraic(text.to_owned());
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let start = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let end = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(promotion_from_char(ch).ok_or_else(invalid)?),
        None => None,
    };

    Ok(LongAlgebraicMove {
        request: MoveRequest::new(start, end),
        promotion,
    })
}

pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.start));
    out.push_str(&square_to_algebraic(mv.end));
    if let SpecialMove::Promotion(kind) = mv.special {
        out.push(promotion_to_char(kind));
    }
    out
}

pub fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::Pawn => 'p',
        PieceKind::King => 'k',
    }
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
