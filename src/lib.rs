//! Rules engine and computer opponent for a chess-like game of shapes on a
//! square board.

pub mod board;
pub mod error;
mod game;
pub mod piece;
pub mod position;
mod render;
pub mod safety;

pub use board::{Board, MoveReport, VictoryCondition};
pub use error::{BoardError, MoveError};
pub use heuristic::{AgentError, Context, Decision, Heuristic, HeuristicAgent, Source};
pub use piece::{Piece, PieceKind, Side};
pub use position::{Position, Step};

pub type Move = heuristic::Move<Position>;
