use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    /// No words to choose from. Configuration error, the game cannot start.
    #[error("word catalog is empty")]
    EmptyCatalog,
    /// A word that is empty or not all lowercase ASCII letters.
    #[error("invalid word catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
    /// Missing window / document / element, or a DOM call that threw.
    #[error("dom error: {0}")]
    Dom(String),
    #[cfg(feature = "serde_json")]
    #[error("could not parse game config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn dom(context: &str, err: JsValue) -> Self {
        GameError::Dom(format!("{context}: {err:?}"))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
