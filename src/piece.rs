use strum_macros::{Display, EnumIter};

use crate::position::{Position, Step};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Side {
    Player = 0,
    Enemy = 1,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// The rank on which this side's pieces promote.
    pub fn last_rank(self, size: u8) -> i8 {
        match self {
            Side::Player => size as i8 - 1,
            Side::Enemy => 0,
        }
    }

    /// Sign of a rank change that heads towards the opponent.
    pub fn forward(self) -> i8 {
        match self {
            Side::Player => 1,
            Side::Enemy => -1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum PieceKind {
    Triangle,
    Diamond,
    Square,
    Circle,
    Cross,
    Octagon,
    Ring,
}

const TRIANGLE_STEPS: [Step; 3] = [Step::new(0, -2), Step::new(-2, 1), Step::new(2, 1)];

const DIAMOND_STEPS: [Step; 4] = [Step::new(0, 1), Step::new(-1, 0), Step::new(1, 0), Step::new(0, -1)];

const SQUARE_STEPS: [Step; 4] = [Step::new(-1, 1), Step::new(1, 1), Step::new(-1, -1), Step::new(1, -1)];

const CIRCLE_STEPS: [Step; 8] = [
    Step::new(0, 1),
    Step::new(-1, 0),
    Step::new(1, 0),
    Step::new(0, -1),
    Step::new(-1, 1),
    Step::new(1, 1),
    Step::new(-1, -1),
    Step::new(1, -1),
];

const CROSS_STEPS: [Step; 8] = [
    Step::new(0, 1),
    Step::new(-1, 0),
    Step::new(1, 0),
    Step::new(0, -1),
    Step::new(0, 2),
    Step::new(-2, 0),
    Step::new(2, 0),
    Step::new(0, -2),
];

const OCTAGON_STEPS: [Step; 8] = [
    Step::new(-1, 2),
    Step::new(1, 2),
    Step::new(-1, -2),
    Step::new(1, -2),
    Step::new(-2, 1),
    Step::new(-2, -1),
    Step::new(2, 1),
    Step::new(2, -1),
];

const RING_STEPS: [Step; 12] = [
    Step::new(1, 2),
    Step::new(-1, 2),
    Step::new(0, 2),
    Step::new(1, -2),
    Step::new(-1, -2),
    Step::new(0, -2),
    Step::new(2, 0),
    Step::new(2, -1),
    Step::new(2, 1),
    Step::new(-2, 0),
    Step::new(-2, -1),
    Step::new(-2, 1),
];

impl PieceKind {
    /// Offsets as seen by the player; the enemy uses them negated.
    pub fn steps(self) -> &'static [Step] {
        match self {
            PieceKind::Triangle => &TRIANGLE_STEPS,
            PieceKind::Diamond => &DIAMOND_STEPS,
            PieceKind::Square => &SQUARE_STEPS,
            PieceKind::Circle => &CIRCLE_STEPS,
            PieceKind::Cross => &CROSS_STEPS,
            PieceKind::Octagon => &OCTAGON_STEPS,
            PieceKind::Ring => &RING_STEPS,
        }
    }

    pub fn value(self) -> u32 {
        self.steps().len() as u32
    }

    pub fn promotion(self) -> Option<PieceKind> {
        match self {
            PieceKind::Triangle => Some(PieceKind::Ring),
            PieceKind::Diamond | PieceKind::Square | PieceKind::Circle | PieceKind::Octagon => Some(PieceKind::Cross),
            PieceKind::Cross | PieceKind::Ring => None,
        }
    }

    /// The kind standing on `column` of the back rank.
    pub fn back_rank(column: u8, size: u8) -> PieceKind {
        if column == 0 || column + 1 == size {
            PieceKind::Diamond
        } else if column == 1 || column + 2 == size {
            PieceKind::Square
        } else if column == 2 || column + 3 == size {
            PieceKind::Circle
        } else if size >= 9 && size % 2 == 1 && column == (size - 1) / 2 {
            PieceKind::Ring
        } else if size / 2 <= column && column + 4 <= size {
            PieceKind::Cross
        } else {
            PieceKind::Octagon
        }
    }

    pub fn glyph(self) -> char {
        match self {
            PieceKind::Triangle => 'T',
            PieceKind::Diamond => 'D',
            PieceKind::Square => 'S',
            PieceKind::Circle => 'C',
            PieceKind::Cross => 'X',
            PieceKind::Octagon => 'O',
            PieceKind::Ring => 'R',
        }
    }
}

pub fn effective_steps(kind: PieceKind, side: Side) -> impl Iterator<Item = Step> {
    kind.steps().iter().map(move |&step| match side {
        Side::Player => step,
        Side::Enemy => -step,
    })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub position: Position,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, position: Position, side: Side) -> Self {
        Piece { kind, position, side }
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    pub fn steps(&self) -> impl Iterator<Item = Step> {
        effective_steps(self.kind, self.side)
    }

    pub fn value_after_eating(&self, target: &Piece) -> u32 {
        self.value().max(target.value())
    }
}
