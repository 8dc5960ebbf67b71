use crate::error::{BoardError, MoveError};
use crate::piece::{Piece, PieceKind, Side};
use crate::position::Position;
use crate::Move;

pub const MIN_SIZE: u8 = 4;
pub const MAX_SIZE: u8 = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VictoryCondition {
    /// A side loses when it has no pieces left.
    #[default]
    KillAll,
    /// A side loses as soon as it loses any piece.
    KillAny,
}

/// What happened on the board when a move went through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The piece now standing on the destination.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub converted: bool,
    pub winner: Option<Side>,
}

#[derive(Clone, Debug)]
pub struct Board {
    size: u8,
    victory: VictoryCondition,
    winner: Option<Side>,
    initial_counts: [usize; 2],
    slots: Vec<Option<Piece>>,
}

impl Board {
    /// A board with the standard mirrored layout.
    pub fn new(size: u8, victory: VictoryCondition) -> Result<Self, BoardError> {
        let mut board = Board::empty(size, victory)?;
        board.reset();
        Ok(board)
    }

    pub fn empty(size: u8, victory: VictoryCondition) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            victory,
            winner: None,
            initial_counts: [0; 2],
            slots: vec![None; size as usize * size as usize],
        })
    }

    pub fn reset(&mut self) {
        self.winner = None;
        self.reset_pieces();
    }

    fn reset_pieces(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.initial_counts = [0; 2];

        for column in 0..self.size {
            let x = column as i8;
            self.add_mirrored_pieces(PieceKind::Triangle, Position::new(x, 1));
            self.add_mirrored_pieces(PieceKind::back_rank(column, self.size), Position::new(x, 0));
        }
    }

    fn add_mirrored_pieces(&mut self, kind: PieceKind, position: Position) {
        self.put(Piece::new(kind, position, Side::Player));
        self.put(Piece::new(kind, position.mirrored(self.size), Side::Enemy));
    }

    fn put(&mut self, piece: Piece) -> Option<Piece> {
        self.initial_counts[piece.side as usize] += 1;
        let index = self.index(piece.position);
        let replaced = self.slots[index].replace(piece);
        if let Some(old) = replaced {
            self.initial_counts[old.side as usize] -= 1;
        }
        replaced
    }

    /// Puts a piece on `position`, returning whatever stood there. The initial
    /// piece totals follow the swap.
    pub fn place(&mut self, kind: PieceKind, side: Side, position: Position) -> Result<Option<Piece>, BoardError> {
        if !self.contains(position) {
            return Err(BoardError::OffBoard(position));
        }
        Ok(self.put(Piece::new(kind, position, side)))
    }

    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        if !self.contains(position) {
            return None;
        }
        let index = self.index(position);
        let removed = self.slots[index].take();
        if let Some(piece) = removed {
            self.initial_counts[piece.side as usize] -= 1;
        }
        removed
    }

    fn index(&self, position: Position) -> usize {
        position.y as usize * self.size as usize + position.x as usize
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn victory_condition(&self) -> VictoryCondition {
        self.victory
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn initial_count(&self, side: Side) -> usize {
        self.initial_counts[side as usize]
    }

    pub fn contains(&self, position: Position) -> bool {
        let size = self.size as i8;
        (0..size).contains(&position.x) && (0..size).contains(&position.y)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        if !self.contains(position) {
            return None;
        }
        self.slots[self.index(position)].as_ref()
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten().filter(move |piece| piece.side == side)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    pub fn legal_moves(&self, piece: &Piece) -> Vec<Position> {
        self.legal_moves_from(piece, piece.position)
    }

    /// Destinations of `piece` as if it stood on `from`: on the board and not
    /// held by its own side.
    pub fn legal_moves_from(&self, piece: &Piece, from: Position) -> Vec<Position> {
        if !self.contains(from) {
            return Vec::new();
        }
        piece
            .steps()
            .map(|step| from + step)
            .filter(|&target| self.contains(target))
            .filter(|&target| self.piece_at(target).map_or(true, |other| other.side != piece.side))
            .collect()
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        self.pieces(side).any(|piece| !self.legal_moves(piece).is_empty())
    }

    /// Checks that `start` holds a piece that could land on `end`. Does not
    /// check that `end` is one of the piece's steps.
    pub fn check_move(&self, start: Position, end: Position) -> Result<&Piece, MoveError> {
        if start == end {
            return Err(MoveError::SamePosition(start));
        }
        for position in [start, end] {
            if !self.contains(position) {
                return Err(MoveError::OffBoard(position));
            }
        }
        let piece = self.piece_at(start).ok_or(MoveError::NoPiece(start))?;
        if let Some(target) = self.piece_at(end) {
            if target.side == piece.side {
                return Err(MoveError::OwnPiece(end));
            }
        }
        Ok(piece)
    }

    pub fn is_move_valid(&self, start: Position, end: Position) -> bool {
        self.check_move(start, end).is_ok()
    }

    pub fn try_make_move(&mut self, start: Position, end: Position) -> bool {
        if self.winner.is_some() {
            return false;
        }
        match self.check_move(start, end) {
            Ok(&piece) => {
                self.process_move(piece, end);
                true
            }
            Err(_) => false,
        }
    }

    /// Executes a move that must follow the piece's step pattern.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let piece = *self.check_move(mv.start, mv.end)?;
        if !self.legal_moves(&piece).contains(&mv.end) {
            return Err(MoveError::IllegalStep { kind: piece.kind, start: mv.start, end: mv.end });
        }
        Ok(self.process_move(piece, mv.end))
    }

    fn process_move(&mut self, mover: Piece, end: Position) -> MoveReport {
        let start_index = self.index(mover.position);
        let end_index = self.index(end);
        self.slots[start_index] = None;
        let captured = self.slots[end_index].take();

        let mut piece = Piece { position: end, ..mover };
        let mut promoted = false;
        let mut converted = false;

        if end.y == mover.side.last_rank(self.size) {
            if let Some(kind) = mover.kind.promotion() {
                piece.kind = kind;
                promoted = true;
            }
        } else if let Some(target) = captured {
            if target.value() >= mover.value() && target.kind != mover.kind {
                piece.kind = target.kind;
                converted = true;
            }
        }

        self.slots[end_index] = Some(piece);
        self.check_end_of_game();

        MoveReport { piece, captured, promoted, converted, winner: self.winner }
    }

    fn check_end_of_game(&mut self) {
        if self.winner.is_some() {
            return;
        }
        let player = self.piece_count(Side::Player);
        let enemy = self.piece_count(Side::Enemy);
        self.winner = match self.victory {
            VictoryCondition::KillAll if enemy == 0 => Some(Side::Player),
            VictoryCondition::KillAll if player == 0 => Some(Side::Enemy),
            VictoryCondition::KillAny if enemy < self.initial_count(Side::Enemy) => Some(Side::Player),
            VictoryCondition::KillAny if player < self.initial_count(Side::Player) => Some(Side::Enemy),
            _ => None,
        };
    }

    /// Ends the game in favour of `side`'s opponent, e.g. when `side` has no
    /// legal move left.
    pub fn concede(&mut self, side: Side) {
        if self.winner.is_none() {
            self.winner = Some(side.opponent());
        }
    }
}
