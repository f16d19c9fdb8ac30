//! Core board state representation.
//!
//! `GameState` is the single owned aggregate of the rules engine: the 8×8
//! grid, side to move, cached king squares, castling rights, en-passant target,
//! the derived outcome and the undo history. Fields are crate-private so the
//! grid and its dependent caches only ever change together, through
//! `make_move` / `unmake_move`.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{home_row, king_home_square};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Grid ---
    pub(crate) board: Board,

    // --- Side and state flags ---
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // [color]
    pub(crate) king_squares: [Square; 2],

    pub(crate) promotion_piece: PieceKind,
    pub(crate) outcome: GameOutcome,

    // --- Make/unmake stack ---
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Board with no pieces. Breaks the one-king invariant until the caller
    /// finishes populating it.
    pub(crate) fn new_empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            king_squares: [king_home_square(Color::White), king_home_square(Color::Black)],
            promotion_piece: PieceKind::Queen,
            outcome: GameOutcome::Ongoing,
            undo_stack: Vec::new(),
        }
    }

    /// Standard starting position, white to move, queen promotion.
    pub fn new_game() -> Self {
        Self::from_validated_config(GameConfig::default())
    }

    /// Standard starting position under `config`.
    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        config.validate()?;
        Ok(Self::from_validated_config(config))
    }

    /// `config` must already have passed [`GameConfig::validate`].
    pub(crate) fn from_validated_config(config: GameConfig) -> Self {
        let mut game_state = Self::new_empty();

        for color in [Color::White, Color::Black] {
            let back = home_row(color) as usize;
            let pawns = if color == Color::White { 6 } else { 1 };
            for (column, kind) in BACK_RANK.iter().enumerate() {
                game_state.board[back][column] = Some(Piece::new(color, *kind));
                game_state.board[pawns][column] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        game_state.side_to_move = config.first_to_move;
        game_state.castling_rights = CASTLE_ALL;
        game_state.promotion_piece = config.promotion_piece;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.column as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.column as usize] = piece;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn promotion_piece(&self) -> PieceKind {
        self.promotion_piece
    }

    /// Outcome as of the last legal-move refresh.
    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.undo_stack.last().map(|undo| &undo.mv)
    }

    /// Applied moves, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = &ChessMove> {
        self.undo_stack.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Squares holding pieces of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
