//! Game controller: the state machine the presentation layer talks to.
//!
//! Owns the [`GameState`] and the legal-move list for the side to move. The
//! list and the outcome are recomputed after every command, so queries between
//! commands are plain reads.

use log::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_and_outcome;
use crate::moves::move_descriptions::{ChessMove, MoveRequest};
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};

#[derive(Debug, Clone)]
pub struct GameController {
    game_state: GameState,
    config: GameConfig,
    legal_moves: Vec<ChessMove>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard game, white first, queen promotion.
    pub fn new() -> Self {
        Self::from_game_state(GameState::new_game(), GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        let game_state = GameState::with_config(config)?;
        Ok(Self::from_game_state(game_state, config))
    }

    /// Game continuing from a FEN position under the default configuration.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let game_state = GameState::from_fen(fen)?;
        Ok(Self::from_game_state(game_state, GameConfig::default()))
    }

    fn from_game_state(game_state: GameState, config: GameConfig) -> Self {
        let mut controller = Self {
            game_state,
            config,
            legal_moves: Vec::new(),
        };
        controller.refresh();
        controller
    }

    fn refresh(&mut self) {
        self.legal_moves = generate_legal_moves_and_outcome(&mut self.game_state);
        match self.game_state.outcome() {
            GameOutcome::Checkmate => info!(
                "checkmate: {:?} wins",
                self.game_state.side_to_move().opposite()
            ),
            GameOutcome::Stalemate => info!("stalemate"),
            GameOutcome::Ongoing => {}
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.game_state.board()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move()
    }

    /// Legal moves for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    /// Legal moves of the piece on `square`, for highlighting a selection.
    pub fn legal_moves_from(&self, square: Square) -> impl Iterator<Item = &ChessMove> + '_ {
        self.legal_moves.iter().filter(move |mv| mv.start == square)
    }

    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.game_state.outcome()
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.game_state, self.game_state.side_to_move())
    }

    /// The side that delivered mate, once the game has ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.outcome() {
            GameOutcome::Checkmate => Some(self.side_to_move().opposite()),
            GameOutcome::Ongoing | GameOutcome::Stalemate => None,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.game_state.last_move()
    }

    /// Apply the legal move with the requested endpoints.
    ///
    /// A request matching no legal move is rejected with
    /// [`ChessError::IllegalMove`] and the game is left untouched.
    pub fn try_move_piece(&mut self, request: MoveRequest) -> ChessResult<ChessMove> {
        let Some(mv) = self.legal_moves.iter().copied().find(|mv| mv.matches(&request)) else {
            warn!("rejected {request}: not a legal move for {:?}", self.side_to_move());
            return Err(ChessError::IllegalMove(request));
        };

        make_move(&mut self.game_state, mv);
        debug!("applied {}", move_to_long_algebraic(&mv));
        self.refresh();
        Ok(mv)
    }

    /// Apply a move given in long algebraic notation such as `e2e4`.
    ///
    /// A promotion suffix is optional; when present it must name the
    /// configured promotion piece, and it is refused on non-promotion moves.
    pub fn try_move_long_algebraic(&mut self, text: &str) -> ChessResult<ChessMove> {
        let parsed = parse_long_algebraic(text)?;
        if let Some(kind) = parsed.promotion {
            let promotes = self
                .legal_moves
                .iter()
                .any(|mv| mv.matches(&parsed.request) && mv.is_promotion());
            if !promotes || kind != self.game_state.promotion_piece() {
                warn!("rejected {text}: promotion suffix does not apply");
                return Err(ChessError::IllegalMove(parsed.request));
            }
        }
        self.try_move_piece(parsed.request)
    }

    /// Take back the last move. Returns `None`, changing nothing, when there
    /// is no history.
    pub fn try_unmove_piece(&mut self) -> Option<ChessMove> {
        let mv = unmake_move(&mut self.game_state)?;
        debug!("undid {}", move_to_long_algebraic(&mv));
        self.refresh();
        Some(mv)
    }

    /// Start over from the standard position with `first_to_move` to play.
    /// The promotion piece of the current configuration is kept.
    pub fn reset_game(&mut self, first_to_move: Color) {
        self.config.first_to_move = first_to_move;
        self.game_state = GameState::from_validated_config(self.config);
        info!("new game, {first_to_move:?} to move");
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> MoveRequest {
        parse_long_algebraic(text).expect("test move should parse").request
    }

    #[test]
    fn new_game_offers_twenty_moves() {
        let controller = GameController::new();
        assert_eq!(controller.legal_moves().len(), 20);
        assert_eq!(controller.outcome(), GameOutcome::Ongoing);
        assert!(!controller.is_in_check());
        assert_eq!(controller.last_move(), None);
    }

    #[test]
    fn knight_selection_highlights_two_squares() {
        let controller = GameController::new();
        assert_eq!(controller.legal_moves_from(Square::new(7, 6)).count(), 2);
        assert_eq!(controller.legal_moves_from(Square::new(4, 4)).count(), 0);
    }

    #[test]
    fn illegal_request_is_rejected_without_change() {
        let mut controller = GameController::new();
        let before = controller.game_state().clone();

        let result = controller.try_move_piece(request("e2e5"));
        assert_eq!(result, Err(ChessError::IllegalMove(request("e2e5"))));
        assert_eq!(controller.game_state(), &before);
        assert_eq!(controller.legal_moves().len(), 20);
    }

    #[test]
    fn move_then_undo_restores_the_game() {
        let mut controller = GameController::new();
        let before = controller.game_state().clone();

        let mv = controller.try_move_long_algebraic("g1f3").expect("g1f3 is legal");
        assert_eq!(controller.side_to_move(), Color::Black);
        assert_eq!(controller.last_move(), Some(&mv));

        assert_eq!(controller.try_unmove_piece(), Some(mv));
        assert_eq!(controller.game_state(), &before);
        assert_eq!(controller.try_unmove_piece(), None);
    }

    #[test]
    fn fools_mate_reports_winner_and_undo_reopens_game() {
        let mut controller = GameController::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            controller.try_move_long_algebraic(text).expect("fool's mate move is legal");
        }

        assert_eq!(controller.outcome(), GameOutcome::Checkmate);
        assert_eq!(controller.winner(), Some(Color::Black));
        assert!(controller.is_in_check());
        assert!(controller.legal_moves().is_empty());
        assert!(controller.try_move_long_algebraic("e2e4").is_err());

        controller.try_unmove_piece();
        assert_eq!(controller.outcome(), GameOutcome::Ongoing);
        assert_eq!(controller.winner(), None);
        assert!(!controller.legal_moves().is_empty());
    }

    #[test]
    fn promotion_suffix_must_match_configuration() {
        let mut controller =
            GameController::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("test FEN should parse");

        assert!(controller.try_move_long_algebraic("a7a8n").is_err());
        assert!(controller.try_move_long_algebraic("e1e2q").is_err());

        let mv = controller.try_move_long_algebraic("a7a8q").expect("queen promotion is legal");
        assert!(mv.is_promotion());
        assert_eq!(
            controller.board()[0][0],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn configured_promotion_piece_is_used() {
        let mut controller = GameController::with_config(GameConfig {
            promotion_piece: PieceKind::Knight,
            ..GameConfig::default()
        })
        .expect("knight promotion is valid");
        controller.reset_game(Color::White);
        assert_eq!(controller.game_state().promotion_piece(), PieceKind::Knight);
    }

    #[test]
    fn reset_lets_black_move_first() {
        let mut controller = GameController::new();
        controller.try_move_long_algebraic("e2e4").expect("e2e4 is legal");

        controller.reset_game(Color::Black);
        assert_eq!(controller.side_to_move(), Color::Black);
        assert_eq!(controller.game_state().history_len(), 0);
        assert_eq!(controller.legal_moves().len(), 20);
        assert!(controller.legal_moves().iter().all(|mv| mv.piece_moved.color == Color::Black));
        assert_eq!(controller.config().first_to_move, Color::Black);
    }
}
