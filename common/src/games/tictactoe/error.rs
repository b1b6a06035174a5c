use thiserror::Error;

use super::types::{Mark, Outcome};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Game is already over ({0})")]
    GameOver(Outcome),

    #[error("Mark {0} cannot take a turn")]
    InvalidMover(Mark),

    #[error("Not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("Cell {0} is out of bounds")]
    OutOfBounds(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),
}

impl TicTacToeError {
    /// True for errors raised because the caller asked for a move it should
    /// never have asked for.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, TicTacToeError::GameOver(_) | TicTacToeError::InvalidMover(_))
    }
}

pub type Result<T> = std::result::Result<T, TicTacToeError>;
