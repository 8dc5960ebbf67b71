use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use shogiss::{
    safety, AgentError, Board, BoardError, Decision, HeuristicAgent, Move, MoveReport, Position, Side,
    VictoryCondition,
};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum VictoryOpt {
    KillAll,
    KillAny,
}

impl From<VictoryOpt> for VictoryCondition {
    fn from(opt: VictoryOpt) -> Self {
        match opt {
            VictoryOpt::KillAll => VictoryCondition::KillAll,
            VictoryOpt::KillAny => VictoryCondition::KillAny,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shogiss", about = "Play shapes against a heuristic opponent")]
struct Args {
    /// Number of rows and columns
    #[arg(long, default_value_t = 8)]
    size: u8,

    /// Chance (0..=1) that the opponent considers each tactic
    #[arg(long, default_value_t = 0.75)]
    difficulty: f64,

    /// When the game ends: once a side is wiped out, or at its first loss
    #[arg(long, value_enum, default_value_t = VictoryOpt::KillAll)]
    victory: VictoryOpt,

    /// Both sides are played from the keyboard
    #[arg(long)]
    two_players: bool,

    /// The opponent plays both sides
    #[arg(long, conflicts_with = "two_players")]
    autoplay: bool,

    /// Turn limit for --autoplay; reaching it is a draw
    #[arg(long, default_value_t = 500)]
    max_turns: usize,

    /// Seed for the opponent's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Command {
    Play(Move),
    Moves(Position),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] => Ok(Command::Quit),
        ["reset"] => Ok(Command::Reset),
        ["moves", square] => square.parse().map(Command::Moves).map_err(|err| err.to_string()),
        [start, end] => {
            let start = start.parse::<Position>().map_err(|err| err.to_string())?;
            let end = end.parse::<Position>().map_err(|err| err.to_string())?;
            Ok(Command::Play(Move::new(start, end)))
        }
        _ => Err("expected `<from> <to>`, `moves <square>`, `reset` or `quit`".to_string()),
    }
}

struct Match {
    board: Board,
    turn: Side,
    agent: HeuristicAgent,
    rng: StdRng,
}

impl Match {
    fn new(args: &Args) -> Result<Self, CliError> {
        let rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Match {
            board: Board::new(args.size, args.victory.into())?,
            turn: Side::Player,
            agent: HeuristicAgent::new(args.difficulty)?,
            rng,
        })
    }

    fn banner(&self) -> String {
        let goal = match self.board.victory_condition() {
            VictoryCondition::KillAll => "take every piece",
            VictoryCondition::KillAny => "take the first piece",
        };
        let size = self.board.size();
        format!("{}x{} board, {} to win", size, size, goal)
    }

    fn reset(&mut self) {
        self.board.reset();
        self.turn = Side::Player;
    }

    fn describe(&self, side: Side, mv: Move, report: &MoveReport) -> String {
        let mut line = format!("{} {}", side, mv);
        if let Some(captured) = report.captured {
            line += &format!(" takes {}", captured.kind);
        }
        if report.promoted {
            line += &format!(", promotes to {}", report.piece.kind);
        }
        if report.converted {
            line += &format!(", becomes {}", report.piece.kind);
        }
        line
    }

    /// Lets the agent move for the side on turn. Returns false when it had
    /// nothing to play.
    fn agent_turn(&mut self) -> bool {
        let side = self.turn;
        let Some(Decision { mv, source }) = self.agent.decide(&self.board, side, &mut self.rng) else {
            return false;
        };
        match self.board.apply_move(mv) {
            Ok(report) => {
                println!("{} ({})", self.describe(side, mv, &report), source.to_string().dimmed());
                true
            }
            Err(err) => {
                eprintln!("{}", format!("{} picked an illegal move {}: {}", side, mv, err).red());
                false
            }
        }
    }

    fn stalemate(&mut self) {
        println!("{}", format!("{} has no legal move", self.turn).yellow());
        self.board.concede(self.turn);
    }

    fn announce_winner(&self) -> bool {
        match self.board.winner() {
            Some(winner) => {
                println!("{}", format!("winner: {}", winner).green().bold());
                true
            }
            None => false,
        }
    }

    fn autoplay(&mut self, max_turns: usize) {
        for turn in 1..=max_turns {
            if !self.board.has_legal_move(self.turn) {
                self.stalemate();
            } else {
                print!("turn {}: ", turn);
                if !self.agent_turn() {
                    self.stalemate();
                }
            }
            if self.announce_winner() {
                println!("{}", self.board);
                return;
            }
            self.turn = self.turn.opponent();
        }
        println!("{}", self.board);
        println!("{}", format!("draw after {} turns", max_turns).yellow());
    }

    fn play(&mut self, two_players: bool) -> Result<(), CliError> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("{}", self.board);
            if self.announce_winner() {
                println!("type `reset` to play again or `quit`");
            } else if !self.board.has_legal_move(self.turn) {
                self.stalemate();
                continue;
            } else if !two_players && self.turn == Side::Enemy {
                if !self.agent_turn() {
                    self.stalemate();
                    continue;
                }
                self.turn = self.turn.opponent();
                continue;
            }

            print!("{}> ", self.turn);
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match parse_command(&line?) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Reset) => self.reset(),
                Ok(Command::Moves(square)) => match self.board.piece_at(square) {
                    Some(piece) => {
                        let moves: Vec<String> = self.board.legal_moves(piece).iter().map(|p| p.to_string()).collect();
                        println!("{} on {}: {}", piece.kind, square, moves.join(" "));
                        if safety::is_threatened(&self.board, piece) {
                            let attackers: Vec<String> = safety::attackers(&self.board, piece.side, square)
                                .iter()
                                .map(|attacker| attacker.position.to_string())
                                .collect();
                            println!("{}", format!("threatened from {}", attackers.join(" ")).yellow());
                        }
                    }
                    None => println!("there is no piece on {}", square),
                },
                Ok(Command::Play(mv)) => {
                    if self.board.winner().is_some() {
                        println!("the game is over");
                        continue;
                    }
                    if self.board.piece_at(mv.start).map(|piece| piece.side) != Some(self.turn) {
                        println!("{}", format!("{} is not a {} piece", mv.start, self.turn).red());
                        continue;
                    }
                    match self.board.apply_move(mv) {
                        Ok(report) => {
                            println!("{}", self.describe(self.turn, mv, &report));
                            self.turn = self.turn.opponent();
                        }
                        Err(err) => println!("{}", err.to_string().red()),
                    }
                }
                Err(message) => println!("{}", message.red()),
            }
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.no_color {
        colored::control::set_override(false);
    }
    let mut game = Match::new(&args)?;
    println!("{}", game.banner().bold());
    if args.autoplay {
        game.autoplay(args.max_turns);
        Ok(())
    } else {
        game.play(args.two_players)
    }
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
