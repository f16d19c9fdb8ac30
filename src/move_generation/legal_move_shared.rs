//! Helpers shared by the per-piece generators, and the total dispatch from
//! piece kind to its generator.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Pseudo-legal moves of `piece` standing on `from`.
#[inline]
pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Emits a move to every target that is empty or holds an enemy piece.
/// Sliding pieces pass ray-traced targets, so the only occupied squares they
/// hand in are ray ends.
pub fn push_unblocked_targets(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<ChessMove>,
) {
    for to in targets {
        match game_state.piece_at(to) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(ChessMove::new(&game_state.board, from, to, piece)),
        }
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, color: Color) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color == color.opposite())
}
