mod config;
mod game_loop;
mod render;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, FirstPlayerMode};
use common::{log, logger};
use game_loop::PlayMode;

#[derive(Parser)]
#[command(name = "mini_games_cli", about = "Tic-tac-toe against a minimax bot")]
struct Args {
    /// Settings file; defaults to mini_games_cli_config.yaml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,

    /// easy or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// human, bot or random
    #[arg(long)]
    first: Option<FirstPlayerMode>,

    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Fixes the session RNG so a run can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    /// Let the bot play both sides of a single game.
    #[arg(long)]
    bot_vs_bot: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    /// Prefix log lines; the config's log_prefix takes precedence.
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(args.config);
    let mut cfg = config_manager.get_config()?;

    if let Some(difficulty) = args.difficulty {
        cfg.tictactoe.difficulty = difficulty;
    }
    if let Some(first) = args.first {
        cfg.tictactoe.first_player = first;
    }
    if let Some(delay) = args.think_delay_ms {
        cfg.tictactoe.bot_think_delay_ms = delay;
    }
    cfg.validate()?;

    if args.save_config {
        config_manager.set_config(&cfg)?;
    }

    let prefix = cfg
        .log_prefix
        .clone()
        .or_else(|| args.use_log_prefix.then(|| "TicTacToe".to_string()));
    logger::init_logger(prefix);

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Session seed {}", rng.seed());

    let mode = if args.bot_vs_bot {
        PlayMode::BotVsBot
    } else {
        PlayMode::HumanVsBot
    };

    game_loop::run(cfg.tictactoe, mode, rng).await?;

    log!("Bye");
    Ok(())
}
