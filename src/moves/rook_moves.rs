use crate::game_state::chess_types::*;
use crate::moves::sliding_rays::trace_rays;

/// Up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Squares a rook on `square` sees, up to and including the first blocker on
/// each file and rank.
#[inline]
pub fn rook_attacks(square: Square, board: &Board) -> Vec<Square> {
    trace_rays(board, square, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_open_board_sees_fourteen_squares() {
        let board: Board = [[None; 8]; 8];
        assert_eq!(rook_attacks(Square::new(4, 3), &board).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board: Board = [[None; 8]; 8];
        board[4][0] = Some(Piece::new(Color::White, PieceKind::Pawn));

        let attacks = rook_attacks(Square::new(7, 0), &board);
        assert!(attacks.contains(&Square::new(4, 0)));
        assert!(!attacks.contains(&Square::new(3, 0)));
    }
}
