//! Rook move generation.
//!
//! Casts rays along ranks and files, stopping at the board edge, before a
//! friendly piece, or on the first enemy piece, which is captured.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_unblocked_targets;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    rook: Piece,
    out: &mut Vec<ChessMove>,
) {
    let targets = rook_attacks(from, &game_state.board);
    push_unblocked_targets(game_state, from, rook, targets, out);
}
