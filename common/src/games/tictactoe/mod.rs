mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, ScoredMove, calculate_minimax_move, calculate_move, calculate_random_move,
};
pub use error::{Result, TicTacToeError};
pub use game_state::TicTacToeGameState;
pub use settings::{MAX_BOT_THINK_DELAY_MS, TicTacToeSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, FirstPlayerMode, Line, Mark, Outcome};
pub use win_detector::{WIN_LINES, check_outcome, check_win, check_win_with_line};
