use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::SessionRng;

use super::types::{Difficulty, FirstPlayerMode, Mark};

pub const MAX_BOT_THINK_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub difficulty: Difficulty,
    pub first_player: FirstPlayerMode,
    pub bot_think_delay_ms: u64,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayerMode::Random,
            bot_think_delay_ms: 400,
        }
    }
}

impl TicTacToeSettings {
    /// X always opens, so the bot plays X exactly when it goes first.
    pub fn resolve_bot_mark(&self, rng: &mut SessionRng) -> Mark {
        let bot_first = match self.first_player {
            FirstPlayerMode::Bot => true,
            FirstPlayerMode::Human => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };
        if bot_first { Mark::X } else { Mark::O }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_think_delay_ms > MAX_BOT_THINK_DELAY_MS {
            return Err(format!(
                "Bot think delay ({} ms) cannot exceed {} ms",
                self.bot_think_delay_ms, MAX_BOT_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TicTacToeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_delay_too_long() {
        let settings = TicTacToeSettings {
            bot_think_delay_ms: MAX_BOT_THINK_DELAY_MS + 1,
            ..TicTacToeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_resolve_bot_mark() {
        let mut rng = SessionRng::new(5);
        let bot = TicTacToeSettings {
            first_player: FirstPlayerMode::Bot,
            ..TicTacToeSettings::default()
        };
        let human = TicTacToeSettings {
            first_player: FirstPlayerMode::Human,
            ..TicTacToeSettings::default()
        };
        assert_eq!(bot.resolve_bot_mark(&mut rng), Mark::X);
        assert_eq!(human.resolve_bot_mark(&mut rng), Mark::O);

        let random = TicTacToeSettings::default();
        let marks: Vec<Mark> = (0..64).map(|_| random.resolve_bot_mark(&mut rng)).collect();
        assert!(marks.contains(&Mark::X));
        assert!(marks.contains(&Mark::O));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: TicTacToeSettings = serde_yaml_ng::from_str("difficulty: easy\n").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.bot_think_delay_ms, 400);
    }
}
