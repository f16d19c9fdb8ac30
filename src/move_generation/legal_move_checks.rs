use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_rays::first_blocker;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`.
///
/// Works backwards from the target: a pawn attacks only its forward diagonals
/// (whether or not they are occupied, and never its push square), the king
/// attacks adjacent squares, and sliders attack through empty squares up to and
/// including the first occupied one. Castling is never consulted here.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind))
    };

    // A pawn of `attacker_color` hits `square` from where an opposing pawn on
    // `square` would itself attack.
    if pawn_attacks(attacker_color.opposite(), square).any(|from| holds(from, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|from| holds(from, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|from| holds(from, PieceKind::King)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&direction| {
            matches!(
                first_blocker(&game_state.board, square, direction),
                Some((_, piece)) if piece.color == attacker_color
                    && (piece.kind == kind || piece.kind == PieceKind::Queen)
            )
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}
