//! One-ply safety: a square is safe for a side when no opposing piece could
//! land on it next turn.
//!
//! A piece attacks every on-board square one of its steps leads to, whatever
//! stands there. For empty squares and squares held by the querying side this
//! is exactly the attacker's legal moves; for a square held by the attacker's
//! own side it means the attacker covers it and would recapture.

use crate::board::Board;
use crate::piece::{Piece, Side};
use crate::position::Position;

pub fn attacks(attacker: &Piece, target: Position) -> bool {
    attacker.steps().any(|step| attacker.position + step == target)
}

/// Squares `piece` would attack if it stood on `from`.
pub fn attacked_from(board: &Board, piece: &Piece, from: Position) -> Vec<Position> {
    if !board.contains(from) {
        return Vec::new();
    }
    piece
        .steps()
        .map(|step| from + step)
        .filter(|&target| board.contains(target))
        .collect()
}

/// Opposing pieces that attack `position` from where they stand.
pub fn attackers(board: &Board, side: Side, position: Position) -> Vec<&Piece> {
    board
        .pieces(side.opponent())
        .filter(|piece| attacks(piece, position))
        .collect()
}

pub fn is_safe(board: &Board, side: Side, position: Position) -> bool {
    !board.pieces(side.opponent()).any(|piece| attacks(piece, position))
}

pub fn is_threatened(board: &Board, piece: &Piece) -> bool {
    !is_safe(board, piece.side, piece.position)
}

pub fn safe_moves(board: &Board, piece: &Piece) -> Vec<Position> {
    board
        .legal_moves(piece)
        .into_iter()
        .filter(|&target| is_safe(board, piece.side, target))
        .collect()
}
