//! Move descriptors.
//!
//! A [`ChessMove`] is the immutable record of one ply as produced by the
//! generator: endpoints, the piece that moved, the piece it removed and which
//! special rule (if any) applies. A [`MoveRequest`] is what a caller can know
//! without the generator: just the two clicked squares. The two are matched by
//! endpoints only, through [`ChessMove::matches`].

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// Special rule attached to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialMove {
    #[default]
    None,
    /// Pawn reaches the far rank and becomes the given piece.
    Promotion(PieceKind),
    /// Diagonal pawn capture of a pawn that just advanced two squares.
    EnPassant,
    /// King moves two squares; the rook relocation is implied.
    Castle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the removed pawn, which does not stand on `end`.
    pub piece_captured: Option<Piece>,
    pub special: SpecialMove,
}

impl ChessMove {
    /// Ordinary move or capture; the captured piece is read off the board.
    #[inline]
    pub fn new(board: &Board, start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row as usize][end.column as usize],
            special: SpecialMove::None,
        }
    }

    #[inline]
    pub fn promotion(
        board: &Board,
        start: Square,
        end: Square,
        piece_moved: Piece,
        promote_to: PieceKind,
    ) -> Self {
        Self {
            special: SpecialMove::Promotion(promote_to),
            ..Self::new(board, start, end, piece_moved)
        }
    }

    /// The destination is empty; the captured pawn is the enemy pawn beside
    /// the mover, fixed here at construction.
    #[inline]
    pub fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn)),
            special: SpecialMove::EnPassant,
        }
    }

    #[inline]
    pub fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            special: SpecialMove::Castle,
        }
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.special, SpecialMove::Promotion(_))
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.special == SpecialMove::EnPassant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.special == SpecialMove::Castle
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// True for a pawn's initial two-square advance.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// Square of the pawn removed by an en-passant capture: same row as the
    /// mover's start, same column as its destination.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::new(self.start.row, self.end.column)
    }

    #[inline]
    pub fn endpoints(&self) -> MoveRequest {
        MoveRequest::new(self.start, self.end)
    }

    /// Endpoint identity: the only rule used to match a caller's request
    /// against a generated move. Flags never take part.
    #[inline]
    pub fn matches(&self, request: &MoveRequest) -> bool {
        self.start == request.start && self.end == request.end
    }
}

/// A `(start, end)` pair supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub start: Square,
    pub end: Square,
}

impl MoveRequest {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Board {
        [[None; 8]; 8]
    }

    #[test]
    fn matching_ignores_flags() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let start = Square::new(1, 0);
        let end = Square::new(0, 0);
        let promotion = ChessMove::promotion(&empty_board(), start, end, pawn, PieceKind::Queen);

        assert!(promotion.matches(&MoveRequest::new(start, end)));
        assert!(!promotion.matches(&MoveRequest::new(end, start)));
        assert!(!promotion.matches(&MoveRequest::new(start, Square::new(0, 1))));
    }

    #[test]
    fn en_passant_captures_opposing_pawn_off_destination() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = ChessMove::en_passant(Square::new(3, 4), Square::new(2, 3), pawn);

        assert_eq!(mv.piece_captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(mv.en_passant_victim_square(), Square::new(3, 3));
        assert!(mv.is_en_passant());
        assert!(!mv.is_promotion());
    }

    #[test]
    fn capture_is_read_from_board() {
        let mut board = empty_board();
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board[2][2] = Some(knight);

        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        let mv = ChessMove::new(&board, Square::new(4, 4), Square::new(2, 2), bishop);
        assert_eq!(mv.piece_captured, Some(knight));
        assert_eq!(mv.special, SpecialMove::None);
    }
}
