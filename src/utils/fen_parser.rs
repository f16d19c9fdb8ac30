//! FEN-to-GameState parser.
//!
//! Reads the four position fields (placement, side to move, castling rights,
//! en-passant target). The halfmove and fullmove fields may be present and are
//! ignored since no clock rule is tracked.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessError::InvalidFen(format!(
            "expected 4 to 6 fields, found {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    parse_board(fields[0], &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square = parse_en_passant_square(fields[3])?;

    for color in [Color::White, Color::Black] {
        let king = Piece::new(color, PieceKind::King);
        let kings: Vec<Square> = game_state
            .pieces_of(color)
            .filter(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
            .collect();
        match kings.as_slice() {
            [] => return Err(ChessError::MissingKing(color)),
            [square] => game_state.king_squares[color.index()] = *square,
            _ => return Err(ChessError::InvalidFen(format!("more than one {color:?} king"))),
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut column = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as u8;
                if column > 8 {
                    return Err(ChessError::InvalidFen(format!("rank {} is too long", 8 - row)));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if column >= 8 {
                return Err(ChessError::InvalidFen(format!("rank {} is too long", 8 - row)));
            }

            game_state.set_piece(Square::new(row as u8, column), Some(piece));
            column += 1;
        }

        if column != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| ChessError::InvalidFen(format!("invalid en-passant square: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parses_starting_position() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game.piece_at(Square::new(0, 0)), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(game.piece_at(Square::new(7, 4)), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(Square::new(4, 4)), None);
        assert_eq!(game.castling_rights(), CASTLE_ALL);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn clock_fields_are_optional() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6").expect("four-field FEN should parse");
        assert_eq!(game.en_passant_square(), Some(Square::new(2, 3)));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.king_square(Color::Black), Square::new(0, 4));
    }

    #[test]
    fn rejects_missing_king() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::MissingKing(Color::Black))
        );
    }

    #[test]
    fn rejects_malformed_layouts() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - -",
            "4k3/8/8/8/8/8/8/4K4 w - -",
            "4k3/8/8/8/8/8/8/4X3 w - -",
            "4k3/8/8/8/8/8/8/4K3 x - -",
            "4k3/8/8/8/8/8/8/4K3 w Z -",
            "4k3/8/8/8/8/8/8/4K3 w - e9",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4kk2/8/8/8/8/8/8/4K3 w - -",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
