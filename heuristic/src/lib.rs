mod agent;
mod game;
pub mod rules;
#[cfg(test)]
mod strip;

pub use agent::{AgentError, Decision, HeuristicAgent, Source};
pub use game::{Game, Move};
pub use rules::{Context, Heuristic};
