//! Random playout soak run.
//!
//! Plays seeded random legal games through the controller, undoing each one
//! back to the start and checking that the position round-trips exactly.
//!
//! Usage:
//! `cargo run --release --bin random_playout -- --games 200 --seed 7 --max-plies 300`

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_rules::controller::game_controller::GameController;
use chess_rules::game_state::chess_types::{Color, GameOutcome};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    env_logger::init();

    let games = parse_arg_u64("--games", 100);
    let seed = parse_arg_u64("--seed", 0);
    let max_plies = parse_arg_u64("--max-plies", 300) as usize;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut white_wins = 0usize;
    let mut black_wins = 0usize;
    let mut stalemates = 0usize;
    let mut unfinished = 0usize;

    for game_idx in 0..games {
        let mut controller = GameController::new();
        let first_to_move = if rng.random_bool(0.5) { Color::White } else { Color::Black };
        controller.reset_game(first_to_move);
        let initial = controller.game_state().clone();

        while controller.game_state().history_len() < max_plies && !controller.outcome().is_terminal() {
            let legal = controller.legal_moves();
            let mv = legal[rng.random_range(0..legal.len())];
            controller
                .try_move_piece(mv.endpoints())
                .map_err(|e| format!("game {game_idx}: generated move rejected: {e}"))?;
        }

        match (controller.outcome(), controller.winner()) {
            (GameOutcome::Checkmate, Some(Color::White)) => white_wins += 1,
            (GameOutcome::Checkmate, _) => black_wins += 1,
            (GameOutcome::Stalemate, _) => stalemates += 1,
            (GameOutcome::Ongoing, _) => unfinished += 1,
        }
        debug!(
            "game {game_idx}: {:?} after {} plies\n{}",
            controller.outcome(),
            controller.game_state().history_len(),
            controller.game_state()
        );

        while controller.try_unmove_piece().is_some() {}
        if controller.game_state() != &initial {
            warn!("game {game_idx}: undo drifted from the initial position");
            return Err(format!(
                "game {game_idx}: undo did not restore the initial position, got {}",
                controller.game_state().get_fen()
            ));
        }
    }

    info!("{games} games played with seed {seed}");
    println!(
        "games={games} white_wins={white_wins} black_wins={black_wins} stalemates={stalemates} unfinished={unfinished}"
    );
    Ok(())
}
