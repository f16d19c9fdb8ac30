//! Perft: exhaustive legal-move tree counting, used to validate the generator
//! against published node counts.

use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_mut;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaves `depth` plies below `game_state`. The state is restored
/// before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(game_state, depth, &mut total);
    total
}

/// Same counts as [`perft`], one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut root = game_state.clone();
    let root_moves = generate_legal_moves_mut(&mut root);

    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|&mv| {
                let mut local_state = root.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    make_move(&mut local_state, mv);
                    count_leaf_or_recurse(&mut local_state, mv, depth - 1, &mut local);
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });
    total
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let root_moves = generate_legal_moves_mut(game_state);
    let mut divided = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let mut counts = PerftCounts::default();
        make_move(game_state, mv);
        count_leaf_or_recurse(game_state, mv, depth - 1, &mut counts);
        unmake_move(game_state);
        divided.push((mv, counts.nodes));
    }
    divided
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_legal_moves_mut(game_state);
    for mv in moves {
        make_move(game_state, mv);
        count_leaf_or_recurse(game_state, mv, depth - 1, counts);
        unmake_move(game_state);
    }
}

/// `game_state` is the position after `mv`; `remaining` more plies follow.
fn count_leaf_or_recurse(
    game_state: &mut GameState,
    mv: ChessMove,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    if remaining > 0 {
        perft_recurse(game_state, remaining, counts);
        return;
    }

    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if is_king_in_check(game_state, game_state.side_to_move) {
        counts.checks += 1;
        if generate_legal_moves_mut(game_state).is_empty() {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_depth_three() {
        let mut game = state(STARTING_POSITION_FEN);
        let before = game.clone();
        assert_eq!(
            perft(&mut game, 3),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
        assert_eq!(game, before);
    }

    #[test]
    fn kiwipete_depth_two_leaf_metrics() {
        let mut game = state(KIWIPETE_FEN);
        assert_eq!(
            perft(&mut game, 2),
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn endgame_depth_three_leaf_metrics() {
        let mut game = state(ENDGAME_FEN);
        assert_eq!(
            perft(&mut game, 3),
            PerftCounts {
                nodes: 2812,
                captures: 209,
                en_passant: 2,
                castles: 0,
                promotions: 0,
                checks: 267,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn multi_threaded_matches_single_thread() {
        let mut game = state(KIWIPETE_FEN);
        assert_eq!(perft_multi_threaded(&game, 2), perft(&mut game, 2));
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }
}
