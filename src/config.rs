use crate::error::GameError;

/// Wrong guesses allowed per session in the stock game.
pub const ALLOWED_GUESSES: u32 = 5;
pub const PLACEHOLDER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    pub allowed_guesses: u32,
    pub placeholder: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { allowed_guesses: ALLOWED_GUESSES, placeholder: PLACEHOLDER }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.allowed_guesses == 0 {
            return Err(GameError::InvalidConfig("allowed_guesses must be at least 1".into()));
        }
        // A letter placeholder would be indistinguishable from a revealed slot.
        if self.placeholder.is_alphabetic() || self.placeholder.is_whitespace() {
            return Err(GameError::InvalidConfig(format!(
                "placeholder {:?} must be a visible non-letter symbol",
                self.placeholder
            )));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
