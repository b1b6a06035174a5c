//! Exhaustive checks of the hard-mode bot against every possible opponent.

use std::collections::HashMap;

use common::games::SessionRng;
use common::games::tictactoe::{
    Board, Difficulty, Mark, Outcome, TicTacToeGameState, calculate_move, get_available_moves,
};

struct Explorer {
    bot_mark: Mark,
    rng: SessionRng,
    cache: HashMap<Board, usize>,
    games: usize,
    bot_wins: usize,
}

impl Explorer {
    fn new(bot_mark: Mark) -> Self {
        Self {
            bot_mark,
            rng: SessionRng::new(99),
            cache: HashMap::new(),
            games: 0,
            bot_wins: 0,
        }
    }

    fn bot_move(&mut self, state: &TicTacToeGameState) -> usize {
        let board = *state.board();
        if let Some(&index) = self.cache.get(&board) {
            return index;
        }
        let input = state.bot_input();
        let index = calculate_move(Difficulty::Hard, &input, &mut self.rng).unwrap();
        assert_eq!(input.board, board, "search mutated its input");
        self.cache.insert(board, index);
        index
    }

    fn explore(&mut self, state: &TicTacToeGameState) {
        match state.status() {
            Outcome::Win(winner) => {
                assert_eq!(
                    winner, self.bot_mark,
                    "bot playing {} lost on {}",
                    self.bot_mark,
                    state.board()
                );
                self.games += 1;
                self.bot_wins += 1;
                return;
            }
            Outcome::Draw => {
                self.games += 1;
                return;
            }
            Outcome::InProgress => {}
        }

        let mover = state.current_mark();
        if mover == self.bot_mark {
            let index = self.bot_move(state);
            let mut next = state.clone();
            next.place_mark(mover, index).unwrap();
            self.explore(&next);
        } else {
            for index in get_available_moves(state.board()) {
                let mut next = state.clone();
                next.place_mark(mover, index).unwrap();
                self.explore(&next);
            }
        }
    }
}

#[test]
fn test_hard_bot_never_loses_as_x() {
    let mut explorer = Explorer::new(Mark::X);
    explorer.explore(&TicTacToeGameState::new());
    assert!(explorer.games > 0);
    assert!(explorer.bot_wins > 0);
}

#[test]
fn test_hard_bot_never_loses_as_o() {
    let mut explorer = Explorer::new(Mark::O);
    explorer.explore(&TicTacToeGameState::new());
    assert!(explorer.games > 0);
    assert!(explorer.bot_wins > 0);
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut rng = SessionRng::new(0);
    let mut state = TicTacToeGameState::new();

    while !state.status().is_over() {
        let index = calculate_move(Difficulty::Hard, &state.bot_input(), &mut rng).unwrap();
        state.place_mark(state.current_mark(), index).unwrap();
    }

    assert_eq!(state.status(), Outcome::Draw);
}

#[test]
fn test_easy_vs_hard_always_finishes_with_legal_moves() {
    for seed in 0..20 {
        let mut rng = SessionRng::new(seed);
        let mut state = TicTacToeGameState::new();

        while !state.status().is_over() {
            let difficulty = if state.current_mark() == Mark::X {
                Difficulty::Easy
            } else {
                Difficulty::Hard
            };
            let input = state.bot_input();
            let index = calculate_move(difficulty, &input, &mut rng).unwrap();
            assert_eq!(input.board.get(index), Some(Mark::Empty));
            state.place_mark(state.current_mark(), index).unwrap();
        }

        // X opened at random, but O plays perfectly from there.
        assert_ne!(state.status(), Outcome::Win(Mark::X), "seed {}", seed);
    }
}
