use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_unblocked_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    knight: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_unblocked_targets(game_state, from, knight, knight_targets(from), out);
}
