use std::fmt;

use rand::Rng;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::game::{Game, Move};
use crate::rules::{self, Context, Heuristic};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("difficulty must be between 0 and 1, got {0}")]
    InvalidDifficulty(f64),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Heuristic(Heuristic),
    Random,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Heuristic(heuristic) => write!(f, "{}", heuristic),
            Source::Random => write!(f, "random_move"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Decision<S> {
    pub mv: Move<S>,
    pub source: Source,
}

/// Picks one move per turn by walking the heuristic cascade. Each heuristic
/// is only considered with probability `difficulty`; when none applies the
/// agent falls back to any legal move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeuristicAgent {
    difficulty: f64,
}

impl HeuristicAgent {
    pub fn new(difficulty: f64) -> Result<Self, AgentError> {
        if !(0.0..=1.0).contains(&difficulty) {
            return Err(AgentError::InvalidDifficulty(difficulty));
        }
        Ok(HeuristicAgent { difficulty })
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    fn is_smart_enough<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.difficulty
    }

    pub fn decide<G: Game, R: Rng + ?Sized>(&self, game: &G, side: G::Side, rng: &mut R) -> Option<Decision<G::Square>> {
        let ctx = Context::new(game, side, rng);

        for heuristic in Heuristic::iter() {
            if !self.is_smart_enough(rng) {
                continue;
            }
            if let Some(mv) = heuristic.attempt(&ctx, rng) {
                return Some(Decision { mv, source: Source::Heuristic(heuristic) });
            }
        }

        rules::random_move(&ctx, rng).map(|mv| Decision { mv, source: Source::Random })
    }

    pub fn select_move<G: Game, R: Rng + ?Sized>(&self, game: &G, side: G::Side, rng: &mut R) -> Option<Move<G::Square>> {
        self.decide(game, side, rng).map(|decision| decision.mv)
    }
}
