//! Core value types shared by every rules subsystem.
//!
//! Squares are addressed by `(row, column)` with row 0 holding the black back
//! rank and row 7 the white back rank, matching the order ranks appear in a
//! FEN placement field.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece token occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A board coordinate. Both fields are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub column: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        debug_assert!(row < 8 && column < 8);
        Self { row, column }
    }

    /// Square reached by stepping `(d_row, d_column)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |column| Square::new(row, column)))
    }
}

/// Fixed 8×8 grid, indexed `[row][column]`.
pub type Board = [[Option<Piece>; 8]; 8];

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Derived game result for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameOutcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}
