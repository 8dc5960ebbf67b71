//! A one-dimensional board for exercising the rules: every piece steps one
//! square left or right, team A advances towards higher squares.

use crate::game::Game;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

#[derive(Clone)]
pub struct Strip {
    cells: Vec<Option<(Team, u32)>>,
}

impl Strip {
    pub fn new(len: usize) -> Self {
        Strip { cells: vec![None; len] }
    }

    pub fn with(mut self, square: usize, team: Team, value: u32) -> Self {
        self.cells[square] = Some((team, value));
        self
    }
}

impl Game for Strip {
    type Side = Team;
    type Square = usize;

    fn opponent(side: Team) -> Team {
        match side {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    fn pieces_of(&self, side: Team) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&square| self.side_at(square) == Some(side))
            .collect()
    }

    fn side_at(&self, square: usize) -> Option<Team> {
        self.cells.get(square).copied().flatten().map(|(team, _)| team)
    }

    fn moves_from(&self, piece: usize, from: usize) -> Vec<usize> {
        let side = self.side_at(piece);
        self.reach_from(piece, from)
            .into_iter()
            .filter(|&square| side.is_some() && self.side_at(square) != side)
            .collect()
    }

    fn reach_from(&self, _piece: usize, from: usize) -> Vec<usize> {
        let mut reach = Vec::new();
        if from > 0 {
            reach.push(from - 1);
        }
        if from + 1 < self.cells.len() {
            reach.push(from + 1);
        }
        reach
    }

    fn value_of(&self, piece: usize) -> u32 {
        self.cells.get(piece).copied().flatten().map_or(0, |(_, value)| value)
    }

    fn is_forward(&self, piece: usize, to: usize) -> bool {
        match self.side_at(piece) {
            Some(Team::A) => to > piece,
            Some(Team::B) => to < piece,
            None => false,
        }
    }

    fn is_safe(&self, side: Team, square: usize) -> bool {
        self.pieces_of(Self::opponent(side))
            .into_iter()
            .all(|piece| !self.reaches(piece, square))
    }
}
