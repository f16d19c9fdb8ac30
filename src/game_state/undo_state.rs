use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
