use crate::engine::{DisplayState, EndOfGame};
use crate::error::GameError;

/// Presentation capability the game drives after every key press.
///
/// The engine never touches the page; `DomRenderer` is the browser
/// implementation and tests substitute a recorder.
pub trait Renderer {
    /// Win counter, revealed slots, guessed keys, attempts left.
    fn render(&mut self, state: &DisplayState) -> Result<(), GameError>;

    /// Non-fatal notice, e.g. a repeated guess.
    fn notify(&mut self, message: &str) -> Result<(), GameError>;

    /// End-of-game message with the animal's picture and capitalized name.
    fn show_reveal(&mut self, end: &EndOfGame) -> Result<(), GameError>;

    /// Remove whatever `show_reveal` added, before a new session is shown.
    fn clear_reveal(&mut self) -> Result<(), GameError>;
}
