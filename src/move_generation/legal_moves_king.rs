use crate::game_state::chess_rules::{
    king_home_square, kingside_rook_home, queenside_rook_home, KINGSIDE_ROOK_COLUMN,
    QUEENSIDE_ROOK_COLUMN,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_unblocked_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::ChessMove;

/// One-square king steps. Castling is produced separately by
/// [`generate_castling_moves`], which consults the attack oracle.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    king: Piece,
    out: &mut Vec<ChessMove>,
) {
    push_unblocked_targets(game_state, from, king, king_targets(from), out);
}

/// Castling moves for `side`.
///
/// Requires the matching right, king and rook on their home squares and every
/// square strictly between them empty. The king may not start in check or pass
/// over or land on an attacked square.
pub fn generate_castling_moves(game_state: &GameState, side: Color, out: &mut Vec<ChessMove>) {
    let king_from = king_home_square(side);
    let king = Piece::new(side, PieceKind::King);
    if game_state.piece_at(king_from) != Some(king) {
        return;
    }

    let enemy = side.opposite();
    let rook = Some(Piece::new(side, PieceKind::Rook));

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let empty_between = |rook_column: u8| {
        let (low, high) = if rook_column > king_from.column {
            (king_from.column + 1, rook_column)
        } else {
            (rook_column + 1, king_from.column)
        };
        (low..high).all(|column| game_state.piece_at(Square::new(king_from.row, column)).is_none())
    };
    let transit_safe = |d_column: i8| {
        (1..=2).all(|step| {
            king_from
                .offset(0, d_column * step)
                .is_some_and(|square| !is_square_attacked(game_state, square, enemy))
        })
    };

    if game_state.has_castling_right(kingside_right(side))
        && game_state.piece_at(kingside_rook_home(side)) == rook
        && empty_between(KINGSIDE_ROOK_COLUMN)
        && transit_safe(1)
    {
        out.push(ChessMove::castle(
            king_from,
            Square::new(king_from.row, king_from.column + 2),
            king,
        ));
    }

    if game_state.has_castling_right(queenside_right(side))
        && game_state.piece_at(queenside_rook_home(side)) == rook
        && empty_between(QUEENSIDE_ROOK_COLUMN)
        && transit_safe(-1)
    {
        out.push(ChessMove::castle(
            king_from,
            Square::new(king_from.row, king_from.column - 2),
            king,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let mut out = Vec::new();
        generate_castling_moves(&game, game.side_to_move(), &mut out);
        out
    }

    #[test]
    fn both_castles_available_on_clear_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end).collect();
        assert_eq!(ends, vec![Square::new(7, 6), Square::new(7, 2)]);
        assert!(moves.iter().all(ChessMove::is_castle));
    }

    #[test]
    fn no_castling_without_rights() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b k - 0 1").len(), 1);
    }

    #[test]
    fn b_file_piece_blocks_queenside_only() {
        let moves = castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end, Square::new(7, 6));
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1.
        let moves = castles("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end, Square::new(7, 2));
    }

    #[test]
    fn attacked_b_file_does_not_forbid_queenside() {
        // Black rook on b8 covers b1, which the king never crosses.
        let moves = castles("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn cannot_castle_out_of_check() {
        assert!(castles("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn missing_rook_cancels_right() {
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }
}
