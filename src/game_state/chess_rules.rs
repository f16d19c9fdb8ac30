//! Canonical chess-rule constants.
//!
//! Home rows, rook corners and the standard starting position used to
//! initialize game state and to gate castling.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column the king starts on for both colors.
pub const KING_HOME_COLUMN: u8 = 4;
pub const KINGSIDE_ROOK_COLUMN: u8 = 7;
pub const QUEENSIDE_ROOK_COLUMN: u8 = 0;

/// Back rank of `color`.
#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::new(home_row(color), KING_HOME_COLUMN)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new(home_row(color), KINGSIDE_ROOK_COLUMN)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new(home_row(color), QUEENSIDE_ROOK_COLUMN)
}

/// The castling right tied to a rook corner, if `square` is one.
pub fn castling_right_for_rook_home(square: Square) -> Option<CastlingRights> {
    [Color::White, Color::Black].into_iter().find_map(|color| {
        if square == kingside_rook_home(color) {
            Some(kingside_right(color))
        } else if square == queenside_rook_home(color) {
            Some(queenside_right(color))
        } else {
            None
        }
    })
}

/// Pieces a pawn may be configured to promote into.
#[inline]
pub const fn is_promotion_candidate(kind: PieceKind) -> bool {
    matches!(
        kind,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
    )
}
