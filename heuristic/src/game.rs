use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

/// A single ply: the piece on `start` moves to `end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move<S> {
    pub start: S,
    pub end: S,
}

impl<S> Move<S> {
    pub fn new(start: S, end: S) -> Self {
        Move { start, end }
    }
}

impl<S: fmt::Display> fmt::Display for Move<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// What the heuristics need to know about a board. Pieces are addressed by the
/// square they stand on.
pub trait Game {
    type Side: Copy + Eq + Debug;
    type Square: Copy + Eq + Hash + Debug;

    fn opponent(side: Self::Side) -> Self::Side;

    fn pieces_of(&self, side: Self::Side) -> Vec<Self::Square>;
    fn side_at(&self, square: Self::Square) -> Option<Self::Side>;

    /// Legal destinations of the piece on `piece` as if it stood on `from`.
    fn moves_from(&self, piece: Self::Square, from: Self::Square) -> Vec<Self::Square>;

    /// Every on-board square the piece on `piece` would hit from `from`,
    /// whoever occupies it.
    fn reach_from(&self, piece: Self::Square, from: Self::Square) -> Vec<Self::Square>;

    fn value_of(&self, piece: Self::Square) -> u32;
    fn is_forward(&self, piece: Self::Square, to: Self::Square) -> bool;
    fn is_safe(&self, side: Self::Side, square: Self::Square) -> bool;

    fn moves(&self, piece: Self::Square) -> Vec<Self::Square> {
        self.moves_from(piece, piece)
    }

    fn reaches(&self, piece: Self::Square, target: Self::Square) -> bool {
        self.reach_from(piece, piece).contains(&target)
    }

    // Capturing a stronger piece turns the capturer into it
    fn value_after_eating(&self, piece: Self::Square, target: Self::Square) -> u32 {
        self.value_of(piece).max(self.value_of(target))
    }

    fn safe_moves(&self, piece: Self::Square) -> Vec<Self::Square> {
        match self.side_at(piece) {
            Some(side) => self
                .moves(piece)
                .into_iter()
                .filter(|&square| self.is_safe(side, square))
                .collect(),
            None => Vec::new(),
        }
    }
}
