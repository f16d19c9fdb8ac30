use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{pawn_attacks, pawn_direction, pawn_start_row, promotion_row};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    pawn: Piece,
    out: &mut Vec<ChessMove>,
) {
    let side = pawn.color;
    let board = &game_state.board;
    let promote_to = game_state.promotion_piece;

    let push_or_promote = |to: Square, out: &mut Vec<ChessMove>| {
        if to.row == promotion_row(side) {
            out.push(ChessMove::promotion(board, from, to, pawn, promote_to));
        } else {
            out.push(ChessMove::new(board, from, to, pawn));
        }
    };

    // pushes
    if let Some(one_step) = from.offset(pawn_direction(side), 0) {
        if game_state.piece_at(one_step).is_none() {
            push_or_promote(one_step, out);

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = one_step.offset(pawn_direction(side), 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::new(board, from, two_step, pawn));
                    }
                }
            }
        }
    }

    // captures and en passant
    for to in pawn_attacks(side, from) {
        if enemy_piece_on(game_state, to, side).is_some() {
            push_or_promote(to, out);
        } else if game_state.en_passant_square == Some(to) {
            let mv = ChessMove::en_passant(from, to, pawn);
            let victim = enemy_piece_on(game_state, mv.en_passant_victim_square(), side);
            if victim.map(|piece| piece.kind) == Some(PieceKind::Pawn) {
                out.push(mv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::SpecialMove;

    fn pawn_moves(fen: &str, from: Square) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let pawn = game.piece_at(from).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, pawn, &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_push() {
        let moves = pawn_moves(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            Square::new(6, 4),
        );
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end).collect();
        assert_eq!(ends, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // e3 is occupied, so neither push from e2 is available.
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert!(moves.is_empty());
    }

    #[test]
    fn moved_pawn_only_steps_once() {
        let moves = pawn_moves("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", Square::new(5, 4));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end, Square::new(4, 4));
    }

    #[test]
    fn diagonal_capture_requires_enemy() {
        // Friendly knight on d3, enemy bishop on f3.
        let moves = pawn_moves("4k3/8/8/8/8/3N1b2/4P3/4K3 w - - 0 1", Square::new(6, 4));
        let captures: Vec<_> = moves.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].end, Square::new(5, 5));
    }

    #[test]
    fn promotion_uses_configured_piece() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", Square::new(1, 0));
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|mv| mv.special == SpecialMove::Promotion(PieceKind::Queen)));
        assert!(moves.iter().any(|mv| mv.end == Square::new(0, 1) && mv.is_capture()));
    }

    #[test]
    fn en_passant_only_onto_target_square() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Square::new(3, 4));
        let en_passant: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].end, Square::new(2, 3));
        assert_eq!(en_passant[0].en_passant_victim_square(), Square::new(3, 3));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let moves = pawn_moves("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", Square::new(1, 3));
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end).collect();
        assert_eq!(ends, vec![Square::new(2, 3), Square::new(3, 3)]);
    }
}
