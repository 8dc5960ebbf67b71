use crate::board::Board;
use crate::piece::Side;
use crate::position::Position;
use crate::safety;

impl heuristic::Game for Board {
    type Side = Side;
    type Square = Position;

    fn opponent(side: Side) -> Side {
        side.opponent()
    }

    fn pieces_of(&self, side: Side) -> Vec<Position> {
        self.pieces(side).map(|piece| piece.position).collect()
    }

    fn side_at(&self, square: Position) -> Option<Side> {
        self.piece_at(square).map(|piece| piece.side)
    }

    fn moves_from(&self, piece: Position, from: Position) -> Vec<Position> {
        match self.piece_at(piece) {
            Some(piece) => self.legal_moves_from(piece, from),
            None => Vec::new(),
        }
    }

    fn reach_from(&self, piece: Position, from: Position) -> Vec<Position> {
        match self.piece_at(piece) {
            Some(piece) => safety::attacked_from(self, piece, from),
            None => Vec::new(),
        }
    }

    fn reaches(&self, piece: Position, target: Position) -> bool {
        self.piece_at(piece).map_or(false, |piece| safety::attacks(piece, target))
    }

    fn value_of(&self, piece: Position) -> u32 {
        self.piece_at(piece).map_or(0, |piece| piece.value())
    }

    fn is_forward(&self, piece: Position, to: Position) -> bool {
        match self.piece_at(piece) {
            Some(piece) => (to.y - piece.position.y) * piece.side.forward() > 0,
            None => false,
        }
    }

    fn is_safe(&self, side: Side, square: Position) -> bool {
        safety::is_safe(self, side, square)
    }
}
