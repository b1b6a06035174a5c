use std::error::Error;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    CELL_COUNT, Difficulty, Mark, Outcome, TicTacToeGameState, TicTacToeSettings, calculate_move,
};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::render::{render_board, status_line};

type GameResult<T> = Result<T, Box<dyn Error>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    HumanVsBot,
    BotVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Play(usize),
    Reset,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameEnd {
    Finished(Outcome),
    Reset,
    Quit,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    human_wins: u32,
    bot_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome, bot_mark: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == bot_mark => self.bot_wins += 1,
            Outcome::Win(_) => self.human_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    fn summary(&self) -> String {
        format!(
            "You: {}  Bot: {}  Draws: {}",
            self.human_wins, self.bot_wins, self.draws
        )
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        _ => {}
    }

    match trimmed.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Play(cell - 1)),
        _ => Err(format!(
            "Unknown command '{}': enter 1-{}, r to reset or q to quit",
            trimmed, CELL_COUNT
        )),
    }
}

struct Match {
    settings: TicTacToeSettings,
    mode: PlayMode,
    rng: Option<SessionRng>,
    input: Lines<BufReader<Stdin>>,
}

impl Match {
    fn is_bot(&self, mark: Mark, bot_mark: Mark) -> bool {
        self.mode == PlayMode::BotVsBot || mark == bot_mark
    }

    fn rng(&mut self) -> GameResult<&mut SessionRng> {
        self.rng
            .as_mut()
            .ok_or_else(|| "Session RNG is busy".into())
    }

    async fn read_line(&mut self, prompt: &str) -> GameResult<Option<String>> {
        println!("{}", prompt);
        Ok(self.input.next_line().await?)
    }

    async fn bot_turn(
        &mut self,
        state: &TicTacToeGameState,
        difficulty: Difficulty,
    ) -> GameResult<usize> {
        let delay = self.settings.bot_think_delay_ms;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let input = state.bot_input();
        let mut rng = self.rng.take().ok_or("Session RNG is busy")?;
        let (result, rng) = tokio::task::spawn_blocking(move || {
            let result = calculate_move(difficulty, &input, &mut rng);
            (result, rng)
        })
        .await?;
        self.rng = Some(rng);

        let index = result?;
        log!(
            "Bot {} ({}) plays cell {} on move {}",
            input.current_mark,
            difficulty,
            index + 1,
            input.move_number
        );
        Ok(index)
    }

    async fn play_game(
        &mut self,
        state: &mut TicTacToeGameState,
        bot_mark: Mark,
    ) -> GameResult<GameEnd> {
        loop {
            println!("\n{}\n{}", render_board(state), status_line(state));
            if state.status().is_over() {
                return Ok(GameEnd::Finished(state.status()));
            }

            let mark = state.current_mark();
            if self.is_bot(mark, bot_mark) {
                let index = self.bot_turn(state, self.settings.difficulty).await?;
                state.place_mark(mark, index)?;
                continue;
            }

            let Some(line) = self.read_line("Your move (1-9, r, q):").await? else {
                return Ok(GameEnd::Quit);
            };
            match parse_command(&line) {
                Ok(Command::Play(index)) => {
                    if let Err(e) = state.place_mark(mark, index) {
                        println!("{}", e);
                    }
                }
                Ok(Command::Reset) => return Ok(GameEnd::Reset),
                Ok(Command::Quit) => return Ok(GameEnd::Quit),
                Err(e) => println!("{}", e),
            }
        }
    }

    async fn ask_play_again(&mut self) -> GameResult<bool> {
        let answer = self.read_line("Play again? [y/N]").await?;
        Ok(answer.is_some_and(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes")))
    }
}

pub async fn run(settings: TicTacToeSettings, mode: PlayMode, rng: SessionRng) -> GameResult<()> {
    let mut game = Match {
        settings,
        mode,
        rng: Some(rng),
        input: BufReader::new(tokio::io::stdin()).lines(),
    };
    let mut tally = Tally::default();
    let mut state = TicTacToeGameState::new();

    loop {
        let bot_mark = match mode {
            PlayMode::HumanVsBot => settings.resolve_bot_mark(game.rng()?),
            PlayMode::BotVsBot => Mark::X,
        };
        if mode == PlayMode::HumanVsBot {
            let human_mark = bot_mark.opponent().unwrap_or(Mark::X);
            println!("You play {}. X moves first.", human_mark);
        }
        log!("New game, bot difficulty {}", settings.difficulty);

        state.reset();
        match game.play_game(&mut state, bot_mark).await? {
            GameEnd::Finished(outcome) => {
                log!("Game over: {}", outcome);
                if mode == PlayMode::BotVsBot {
                    return Ok(());
                }
                tally.record(outcome, bot_mark);
                println!("{}", tally.summary());
                if !game.ask_play_again().await? {
                    return Ok(());
                }
            }
            GameEnd::Reset => continue,
            GameEnd::Quit => return Ok(()),
        }
    }
}
