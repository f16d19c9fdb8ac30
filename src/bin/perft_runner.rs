//! Perft runner with per-root-move divide.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --fen "<fen>"`
//! `RUST_LOG=debug cargo run --release --bin perft_runner -- --depth 2 --divide`

use std::time::Instant;

use log::{debug, info};

use chess_rules::chess_errors::ChessResult;
use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::perft::{perft_divide, perft_multi_threaded};
use chess_rules::utils::long_algebraic::move_to_long_algebraic;

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> ChessResult<()> {
    env_logger::init();

    let depth = parse_arg_u8("--depth", 3);
    let fen = parse_arg_string("--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let mut game = GameState::from_fen(&fen)?;

    info!("perft depth={depth} fen={fen}");
    debug!("\n{game}");

    if has_flag("--divide") {
        for (mv, nodes) in perft_divide(&mut game, depth) {
            println!("{}: {nodes}", move_to_long_algebraic(&mv));
        }
    }

    let start = Instant::now();
    let counts = perft_multi_threaded(&game, depth);
    let elapsed = start.elapsed();
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);

    println!(
        "depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={} elapsed_ms={} nps={nps:.0}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis()
    );
    Ok(())
}
