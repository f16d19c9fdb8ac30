use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_unblocked_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    bishop: Piece,
    out: &mut Vec<ChessMove>,
) {
    let targets = bishop_attacks(from, &game_state.board);
    push_unblocked_targets(game_state, from, bishop, targets, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_captures_enemy_and_stops_before_friend() {
        let game = GameState::from_fen("4k3/8/8/1p6/8/3B4/8/4K1N1 w - - 0 1")
            .expect("test FEN should parse");
        let d3 = Square::new(5, 3);
        let bishop = game.piece_at(d3).expect("bishop on d3");
        let mut out = Vec::new();

        generate_bishop_moves(&game, d3, bishop, &mut out);

        let captures: Vec<_> = out.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].end, Square::new(3, 1));
        assert!(out.iter().any(|mv| mv.end == Square::new(7, 5)));
        assert!(!out.iter().any(|mv| mv.end == Square::new(2, 0)));
    }
}
