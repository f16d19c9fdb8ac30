//! Pawn geometry. White pawns advance toward row 0, black pawns toward row 7.

use crate::game_state::chess_types::{Color, Square};

/// Row delta of a single pawn advance.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which a pawn may advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Far rank, where a pawn promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// The (up to two) diagonal squares a pawn of `color` on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_column| square.offset(d_row, d_column))
}
