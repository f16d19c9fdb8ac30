use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_unblocked_targets;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    queen: Piece,
    out: &mut Vec<ChessMove>,
) {
    let targets = queen_attacks(from, &game_state.board);
    push_unblocked_targets(game_state, from, queen, targets, out);
}
