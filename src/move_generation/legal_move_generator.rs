//! Full legal move generation pipeline.
//!
//! Runs the per-piece pseudo-legal generators over the side to move, adds
//! castling, then filters out every move that leaves the mover's king attacked
//! by making it, asking the attack oracle, and unmaking it.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::moves::move_descriptions::ChessMove;

/// Pseudo-legal moves for every piece of `color`, ignoring castling and
/// self-check. The side to move is not consulted, so this also serves as a
/// "what could the opponent do" query.
pub fn generate_pseudo_legal_moves(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (square, piece) in game_state.pieces_of(color) {
        generate_piece_moves(game_state, square, piece, &mut out);
    }
    out
}

/// Legal moves for the side to move, castling included.
///
/// The state is borrowed mutably for the filter's make/unmake pairs and is
/// returned exactly as it was given.
pub fn generate_legal_moves_mut(game_state: &mut GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut pseudo = generate_pseudo_legal_moves(game_state, side);
    generate_castling_moves(game_state, side, &mut pseudo);

    let pseudo_count = pseudo.len();
    let mut legal = Vec::with_capacity(pseudo_count);
    for mv in pseudo {
        make_move(game_state, mv);
        let exposes_king = is_king_in_check(game_state, side);
        unmake_move(game_state);

        if exposes_king {
            trace!("rejected {}: leaves {side:?} king attacked", mv.endpoints());
        } else {
            legal.push(mv);
        }
    }

    trace!(
        "{side:?}: {} legal of {pseudo_count} pseudo-legal moves",
        legal.len()
    );
    legal
}

/// Legal moves for the side to move, computed on a scratch copy.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut scratch = game_state.clone();
    generate_legal_moves_mut(&mut scratch)
}

/// Legal moves for the side to move, also recording the resulting outcome on
/// the state: no moves while in check is checkmate, no moves otherwise is
/// stalemate.
pub fn generate_legal_moves_and_outcome(game_state: &mut GameState) -> Vec<ChessMove> {
    let legal = generate_legal_moves_mut(game_state);
    game_state.outcome = if !legal.is_empty() {
        GameOutcome::Ongoing
    } else if is_king_in_check(game_state, game_state.side_to_move) {
        GameOutcome::Checkmate
    } else {
        GameOutcome::Stalemate
    };
    legal
}
