//! Ray tracing over the mailbox grid, shared by every sliding piece.

use crate::game_state::chess_types::*;

/// Squares reached from `from` stepping `(d_row, d_column)` until the edge of
/// the board or the first occupied square, which is included whatever its
/// color.
pub fn trace_ray(board: &Board, from: Square, (d_row, d_column): (i8, i8)) -> Vec<Square> {
    let mut squares = Vec::with_capacity(7);
    let mut current = from;

    while let Some(next) = current.offset(d_row, d_column) {
        squares.push(next);
        if board[next.row as usize][next.column as usize].is_some() {
            break;
        }
        current = next;
    }

    squares
}

/// Union of [`trace_ray`] over `directions`.
pub fn trace_rays(board: &Board, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    directions
        .iter()
        .flat_map(|direction| trace_ray(board, from, *direction))
        .collect()
}

/// First occupied square along a ray, if any.
pub fn first_blocker(
    board: &Board,
    from: Square,
    (d_row, d_column): (i8, i8),
) -> Option<(Square, Piece)> {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_column) {
        if let Some(piece) = board[next.row as usize][next.column as usize] {
            return Some((next, piece));
        }
        current = next;
    }
    None
}
