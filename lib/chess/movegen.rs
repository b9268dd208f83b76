use crate::chess::{Board, Kind, Move, Position, Promotion, Row, Team};
use arrayvec::ArrayVec;

/// The pseudo-legal moves of a single piece.
///
/// No piece ever has more than 27 pseudo-legal moves.
pub type Moves = ArrayVec<Move, 32>;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Every move the piece on `whence` could make, ignoring the safety of its own king.
///
/// Returns no moves if the square is empty.
pub fn pseudo_legal(board: &Board, whence: Position) -> Moves {
    let mut moves = Moves::new();

    let Some(piece) = board[whence] else {
        return moves;
    };

    let team = piece.team();
    match piece.kind() {
        Kind::Pawn => pawn(board, team, whence, &mut moves),
        Kind::Knight => leaps(board, team, whence, &KNIGHT, &mut moves),
        Kind::Bishop => rays(board, team, whence, &DIAGONAL, &mut moves),
        Kind::Rook => rays(board, team, whence, &ORTHOGONAL, &mut moves),
        Kind::Queen => {
            rays(board, team, whence, &ORTHOGONAL, &mut moves);
            rays(board, team, whence, &DIAGONAL, &mut moves);
        }
        Kind::King => {
            leaps(board, team, whence, &ORTHOGONAL, &mut moves);
            leaps(board, team, whence, &DIAGONAL, &mut moves);
        }
    }

    moves
}

/// Whether any piece of `team` has a pseudo-legal move landing on `target`.
pub fn attacks(board: &Board, team: Team, target: Position) -> bool {
    board
        .by_team(team)
        .any(|p| pseudo_legal(board, p).iter().any(|m| m.whither() == target))
}

#[inline(always)]
fn is_free_for(board: &Board, team: Team, p: Position) -> bool {
    board[p].map_or(true, |piece| piece.team() != team)
}

fn leaps(board: &Board, team: Team, whence: Position, steps: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, columns) in steps {
        if let Some(whither) = whence.offset(rows, columns) {
            if is_free_for(board, team, whither) {
                moves.push(Move(whence, whither, Promotion::None));
            }
        }
    }
}

fn rays(board: &Board, team: Team, whence: Position, steps: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, columns) in steps {
        let mut next = whence.offset(rows, columns);
        while let Some(whither) = next {
            match board[whither] {
                None => moves.push(Move(whence, whither, Promotion::None)),

                Some(piece) => {
                    if piece.team() != team {
                        moves.push(Move(whence, whither, Promotion::None));
                    }

                    break;
                }
            }

            next = whither.offset(rows, columns);
        }
    }
}

fn pawn(board: &Board, team: Team, whence: Position, moves: &mut Moves) {
    let ahead = match team {
        Team::White => 1,
        Team::Black => -1,
    };

    if let Some(whither) = whence.offset(ahead, 0).filter(|&p| board[p].is_none()) {
        advance(team, whence, whither, moves);

        if whence.row() == Row::pawns(team) {
            if let Some(whither) = whence.offset(2 * ahead, 0).filter(|&p| board[p].is_none()) {
                advance(team, whence, whither, moves);
            }
        }
    }

    for columns in [-1, 1] {
        if let Some(whither) = whence.offset(ahead, columns) {
            if board[whither].map(|piece| piece.team()) == Some(!team) {
                advance(team, whence, whither, moves);
            }
        }
    }
}

#[inline(always)]
fn advance(team: Team, whence: Position, whither: Position, moves: &mut Moves) {
    if whither.row() == Row::last(team) {
        for promotion in Promotion::KINDS {
            moves.push(Move(whence, whither, promotion));
        }
    } else {
        moves.push(Move(whence, whither, Promotion::None));
    }
}
