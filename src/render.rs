use std::fmt;

use colored::{ColoredString, Colorize};

use crate::board::Board;
use crate::piece::{Piece, Side};
use crate::position::Position;

fn cell(piece: Option<&Piece>) -> ColoredString {
    match piece {
        Some(piece) => {
            let glyph = piece.kind.glyph().to_string();
            match piece.side {
                Side::Player => glyph.bright_white().bold(),
                Side::Enemy => glyph.red().bold(),
            }
        }
        None => ".".dimmed(),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size() as i8;
        for y in (0..size).rev() {
            write!(f, "{:>3} ", y + 1)?;
            for x in 0..size {
                write!(f, " {}", cell(self.piece_at(Position::new(x, y))))?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, VictoryCondition};

    #[test]
    fn renders_one_line_per_rank_plus_files() {
        colored::control::set_override(false);
        let board = Board::new(8, VictoryCondition::KillAll).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  8  D S C X O C S D");
        assert_eq!(lines[6], "  2  T T T T T T T T");
        assert_eq!(lines[8], "     a b c d e f g h");
    }
}
