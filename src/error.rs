use thiserror::Error;

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::piece::PieceKind;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {0} is outside {}..={}", MIN_SIZE, MAX_SIZE)]
    InvalidSize(u8),
    #[error("{0} is off the board")]
    OffBoard(Position),
}

/// Why a move was refused. The board is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is both start and end")]
    SamePosition(Position),
    #[error("{0} is off the board")]
    OffBoard(Position),
    #[error("there is no piece on {0}")]
    NoPiece(Position),
    #[error("{0} holds a piece of the same side")]
    OwnPiece(Position),
    #[error("a {kind} cannot step from {start} to {end}")]
    IllegalStep { kind: PieceKind, start: Position, end: Position },
}
