use super::board::Board;
use super::bot_controller::BotInput;
use super::error::{Result, TicTacToeError};
use super::types::{CELL_COUNT, Line, Mark, Outcome};
use super::win_detector::{check_outcome, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<usize>,
    winning_line: Option<Line>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<Outcome> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver(self.status));
        }
        if mark == Mark::Empty {
            return Err(TicTacToeError::InvalidMover(mark));
        }
        if mark != self.current_mark {
            return Err(TicTacToeError::NotYourTurn(mark));
        }
        if index >= CELL_COUNT {
            return Err(TicTacToeError::OutOfBounds(index));
        }
        if self.board.get(index) != Some(Mark::Empty) {
            return Err(TicTacToeError::CellOccupied(index));
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.check_game_over();

        if !self.status.is_over() {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 1-based number of the move `mark` would make next.
    pub fn move_number(&self, mark: Mark) -> usize {
        self.board.count(mark) + 1
    }

    pub fn bot_input(&self) -> BotInput {
        BotInput {
            board: self.board,
            current_mark: self.current_mark,
            move_number: self.move_number(self.current_mark),
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.winning_line = check_win_with_line(&self.board).map(|(_, line)| line);
        self.status = check_outcome(&self.board);
    }
}
