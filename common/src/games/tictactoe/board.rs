use std::fmt;

use super::error::TicTacToeError;
use super::types::{CELL_COUNT, Mark};

/// Row-major 3x3 grid: indices 0..=2 are the top row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses nine cells from `X`, `O` and `_`/`.`/`-` characters; whitespace
    /// and `|` separators are skipped.
    pub fn parse(layout: &str) -> Result<Self, TicTacToeError> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in layout.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' | '-' => Mark::Empty,
                other => {
                    return Err(TicTacToeError::InvalidLayout(format!("unexpected '{}'", other)));
                }
            };
            if count == CELL_COUNT {
                return Err(TicTacToeError::InvalidLayout("more than 9 cells".to_string()));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(TicTacToeError::InvalidLayout(format!("expected 9 cells, got {}", count)));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let ch = match cell {
                Mark::Empty => '_',
                mark => mark.symbol(),
            };
            write!(f, "{}", ch)?;
            if i % 3 == 2 && i + 1 < CELL_COUNT {
                write!(f, "|")?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_ascending() {
        let board = Board::parse("X_O|_X_|O__").unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::parse("XOX|XOO|OXX").unwrap();
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Board::parse("XO").is_err());
        assert!(Board::parse("XOX|XOO|OXX|X").is_err());
        assert!(Board::parse("XOZ|___|___").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let board = Board::parse("X_O _X_ O__").unwrap();
        assert_eq!(board.to_string(), "X_O|_X_|O__");
        assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::parse("X________").unwrap();
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }
}
