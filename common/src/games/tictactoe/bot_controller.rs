use crate::games::SessionRng;

use super::board::{Board, get_available_moves};
use super::error::{Result, TicTacToeError};
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::check_outcome;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
    /// 1-based ordinal of the move `current_mark` is about to make.
    pub move_number: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize> {
    ensure_playable(&input.board, input.current_mark)?;

    if difficulty == Difficulty::Easy && input.move_number == 1 {
        return calculate_random_move(&input.board, rng);
    }

    calculate_minimax_move(&input.board, input.current_mark).map(|scored| scored.index)
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize> {
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves)
        .ok_or(TicTacToeError::GameOver(check_outcome(board)))
}

/// Exhaustive search from `bot_mark`'s point of view. Ties keep the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<ScoredMove> {
    let opponent_mark = ensure_playable(board, bot_mark)?;

    let mut board = *board;
    let mut best: Option<ScoredMove> = None;

    for index in get_available_moves(&board) {
        board.set(index, bot_mark);
        let score = minimax(&mut board, 1, false, bot_mark, opponent_mark);
        board.clear(index);

        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredMove { index, score });
        }
    }

    best.ok_or(TicTacToeError::GameOver(check_outcome(&board)))
}

fn ensure_playable(board: &Board, mark: Mark) -> Result<Mark> {
    let opponent_mark = mark.opponent().ok_or(TicTacToeError::InvalidMover(mark))?;
    match check_outcome(board) {
        Outcome::InProgress => Ok(opponent_mark),
        outcome => Err(TicTacToeError::GameOver(outcome)),
    }
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    match check_outcome(board) {
        Outcome::Win(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Outcome::Win(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let (mark, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (opponent_mark, i32::MAX)
    };

    for index in get_available_moves(board) {
        board.set(index, mark);
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark);
        board.clear(index);

        best = if is_maximizing { best.max(score) } else { best.min(score) };
    }

    best
}
