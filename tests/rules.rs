use lib::chess::{Board, Game, InvalidMove, Kind, Move, Outcome, Piece, Position, Promotion, Team};
use Position::*;

fn game(turn: Team, pieces: &[(Position, Piece)]) -> Game {
    let mut board = Board::empty();
    for &(p, piece) in pieces {
        board.place(p, piece);
    }

    Game::with_board(board, turn).unwrap()
}

fn quiet(whence: Position, whither: Position) -> Move {
    Move(whence, whither, Promotion::None)
}

#[test]
fn white_pawn_on_e2_has_exactly_two_moves_in_the_standard_setup() {
    let game = Game::new();
    let mut moves = game.moves(E2).unwrap().to_vec();
    moves.sort();
    assert_eq!(moves, vec![quiet(E2, E3), quiet(E2, E4)]);
}

#[test]
fn empty_square_reports_no_piece() {
    let game = Game::new();
    for p in [A3, D4, E5, H6] {
        assert_eq!(game.moves(p), None);
    }
}

#[test]
fn king_checked_along_its_back_row_must_leave_it() {
    let mut game = game(
        Team::Black,
        &[
            (A1, Piece(Team::White, Kind::King)),
            (H2, Piece(Team::Black, Kind::Rook)),
            (C2, Piece(Team::Black, Kind::King)),
        ],
    );

    assert!(!game.is_check(Team::White));
    assert_eq!(game.play(quiet(H2, H1)), Ok(()));
    assert!(game.is_check(Team::White));
    assert_eq!(game.turn(), Team::White);
    assert_eq!(game.legal_moves(), vec![quiet(A1, A2)]);

    let mut game = self::game(
        Team::White,
        &[
            (A1, Piece(Team::White, Kind::King)),
            (B1, Piece(Team::Black, Kind::Rook)),
            (C2, Piece(Team::Black, Kind::King)),
        ],
    );

    assert!(game.is_check(Team::White));
    assert!(!game.is_checkmate(Team::White));

    let moves = game.moves(A1).unwrap();
    assert!(!moves.is_empty());
    for m in moves {
        assert_ne!(m.whither().row(), A1.row());
    }

    assert_eq!(game.play(quiet(A1, B1)), Err(InvalidMove::Illegal(quiet(A1, B1))));
    assert_eq!(game.play(quiet(A1, A2)), Ok(()));
    assert!(!game.is_check(Team::White));
}

#[test]
fn black_pawn_about_to_promote_has_eight_moves() {
    let game = game(
        Team::Black,
        &[
            (B2, Piece(Team::Black, Kind::Pawn)),
            (A1, Piece(Team::White, Kind::Knight)),
            (E1, Piece(Team::White, Kind::King)),
            (E8, Piece(Team::Black, Kind::King)),
        ],
    );

    let moves = game.moves(B2).unwrap();
    assert_eq!(moves.len(), 8);

    for promotion in Promotion::KINDS {
        assert!(moves.contains(&Move(B2, A1, promotion)));
        assert!(moves.contains(&Move(B2, B1, promotion)));
    }
}

#[test]
fn promoted_piece_replaces_the_pawn() {
    let mut game = game(
        Team::Black,
        &[
            (B2, Piece(Team::Black, Kind::Pawn)),
            (A1, Piece(Team::White, Kind::Knight)),
            (H1, Piece(Team::White, Kind::King)),
            (E8, Piece(Team::Black, Kind::King)),
        ],
    );

    assert_eq!(game.play(Move(B2, A1, Promotion::Rook)), Ok(()));
    assert_eq!(game.board()[A1], Some(Piece(Team::Black, Kind::Rook)));
    assert_eq!(game.board()[B2], None);
    assert!(game.is_check(Team::White));
    assert_eq!(game.turn(), Team::White);
}

#[test]
fn back_rank_mate_ends_the_game() {
    let mut game = game(
        Team::White,
        &[
            (G8, Piece(Team::Black, Kind::King)),
            (F7, Piece(Team::Black, Kind::Pawn)),
            (G7, Piece(Team::Black, Kind::Pawn)),
            (H7, Piece(Team::Black, Kind::Pawn)),
            (D1, Piece(Team::White, Kind::Queen)),
            (G1, Piece(Team::White, Kind::King)),
        ],
    );

    assert_eq!(game.play(quiet(D1, D8)), Ok(()));
    assert!(game.is_checkmate(Team::Black));
    assert!(!game.is_stalemate(Team::Black));
    assert_eq!(game.outcome(), Some(Outcome::Checkmate(Team::White)));
    assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Team::White));
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();

    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert_eq!(game.play(m.parse().unwrap()), Ok(()));
    }

    assert!(game.is_checkmate(Team::White));
    assert_eq!(game.outcome(), Some(Outcome::Checkmate(Team::Black)));
}

#[test]
fn king_without_moves_but_not_in_check_is_stalemated() {
    let mut game = game(
        Team::White,
        &[
            (H8, Piece(Team::Black, Kind::King)),
            (F6, Piece(Team::White, Kind::King)),
            (G5, Piece(Team::White, Kind::Queen)),
        ],
    );

    assert_eq!(game.play(quiet(G5, G6)), Ok(()));
    assert!(game.is_stalemate(Team::Black));
    assert!(!game.is_checkmate(Team::Black));
    assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    assert_eq!(game.outcome().map(|o| o.is_draw()), Some(true));
}

#[test]
fn checkmated_team_can_not_move_any_piece() {
    let mut game = Game::new();

    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert_eq!(game.play(m.parse().unwrap()), Ok(()));
    }

    assert_eq!(game.legal_moves(), vec![]);

    let before = game.clone();
    assert_eq!(
        game.play(quiet(A2, A3)),
        Err(InvalidMove::Illegal(quiet(A2, A3)))
    );

    assert_eq!(game, before);
}
