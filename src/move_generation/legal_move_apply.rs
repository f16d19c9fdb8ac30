//! In-place make/unmake.
//!
//! `make_move` pushes an [`UndoState`] snapshot of everything a move can
//! destroy (castling rights, en-passant target) and `unmake_move` pops it, so a
//! make followed by an unmake restores the state exactly. The move record
//! itself carries the captured piece and the special-rule tag.

use crate::game_state::chess_rules::{castling_right_for_rook_home, KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, SpecialMove};

/// Apply `mv` to `game_state` and flip the side to move.
///
/// `mv` must come from the generator for this exact state.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = mv.piece_moved.color;

    game_state.undo_stack.push(UndoState {
        mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
    });

    if mv.special == SpecialMove::EnPassant {
        game_state.set_piece(mv.en_passant_victim_square(), None);
    }

    let placed = match mv.special {
        SpecialMove::Promotion(kind) => Piece::new(mover, kind),
        _ => mv.piece_moved,
    };
    game_state.set_piece(mv.start, None);
    game_state.set_piece(mv.end, Some(placed));

    if mv.special == SpecialMove::Castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, None);
        game_state.set_piece(rook_to, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.end;
    }

    update_castling_rights(game_state, &mv);

    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.column))
    } else {
        None
    };

    game_state.side_to_move = mover.opposite();
    game_state.outcome = GameOutcome::Ongoing;
}

/// Revert the most recent `make_move`. Returns the reverted move, or `None`
/// (leaving the state untouched) when there is no history.
pub fn unmake_move(game_state: &mut GameState) -> Option<ChessMove> {
    let undo = game_state.undo_stack.pop()?;
    let mv = undo.mv;
    let mover = mv.piece_moved.color;

    if mv.special == SpecialMove::Castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, None);
        game_state.set_piece(rook_from, rook);
    }

    game_state.set_piece(mv.start, Some(mv.piece_moved));
    if mv.special == SpecialMove::EnPassant {
        game_state.set_piece(mv.end, None);
        game_state.set_piece(mv.en_passant_victim_square(), mv.piece_captured);
    } else {
        game_state.set_piece(mv.end, mv.piece_captured);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.start;
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.side_to_move = mover;
    game_state.outcome = GameOutcome::Ongoing;

    Some(mv)
}

/// Rook start and destination for a castle: the rook ends on the square the
/// king crossed.
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    let row = mv.start.row;
    if mv.end.column > mv.start.column {
        (
            Square::new(row, KINGSIDE_ROOK_COLUMN),
            Square::new(row, mv.end.column - 1),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COLUMN),
            Square::new(row, mv.end.column + 1),
        )
    }
}

/// Any king move forfeits both of the mover's rights. A move from or onto a
/// rook's home corner forfeits that corner's right, which covers both the rook
/// leaving and the rook being captured there.
fn update_castling_rights(game_state: &mut GameState, mv: &ChessMove) {
    if mv.piece_moved.kind == PieceKind::King {
        let color = mv.piece_moved.color;
        game_state.castling_rights &= !(kingside_right(color) | queenside_right(color));
    }

    for square in [mv.start, mv.end] {
        if let Some(right) = castling_right_for_rook_home(square) {
            game_state.castling_rights &= !right;
        }
    }
}
