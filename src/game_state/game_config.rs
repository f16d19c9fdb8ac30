//! Per-game rule configuration.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::is_promotion_candidate;
use crate::game_state::chess_types::{Color, PieceKind};

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side that plays the first move from the starting position.
    pub first_to_move: Color,
    /// Piece every promoting pawn turns into.
    pub promotion_piece: PieceKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_to_move: Color::White,
            promotion_piece: PieceKind::Queen,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ChessResult<()> {
        if is_promotion_candidate(self.promotion_piece) {
            Ok(())
        } else {
            Err(ChessError::InvalidPromotionPiece(self.promotion_piece))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_promotes_to_queen_with_white_first() {
        let config = GameConfig::default();
        assert_eq!(config.first_to_move, Color::White);
        assert_eq!(config.promotion_piece, PieceKind::Queen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_king_promotion() {
        let config = GameConfig {
            promotion_piece: PieceKind::King,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ChessError::InvalidPromotionPiece(PieceKind::King))
        ));
    }
}
