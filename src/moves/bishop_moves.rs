use crate::game_state::chess_types::*;
use crate::moves::sliding_rays::trace_rays;

/// Up-left, up-right, down-left, down-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_attacks(square: Square, board: &Board) -> Vec<Square> {
    trace_rays(board, square, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_in_centre_sees_thirteen_squares() {
        let board: Board = [[None; 8]; 8];
        assert_eq!(bishop_attacks(Square::new(4, 3), &board).len(), 13);
    }

    #[test]
    fn bishop_in_corner_sees_one_diagonal() {
        let board: Board = [[None; 8]; 8];
        let attacks = bishop_attacks(Square::new(7, 0), &board);
        assert_eq!(attacks.len(), 7);
        assert!(attacks.contains(&Square::new(0, 7)));
    }
}
