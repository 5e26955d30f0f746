//! Key-press driver tying the engine to a renderer.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::{GameEngine, GuessOutcome};
use crate::error::GameError;
use crate::render::Renderer;

pub struct Game<R: Renderer, G: Rng = StdRng> {
    engine: GameEngine<G>,
    renderer: R,
}

impl<R: Renderer, G: Rng> Game<R, G> {
    /// Takes ownership of both halves and draws the opening state.
    pub fn new(engine: GameEngine<G>, mut renderer: R) -> Result<Self, GameError> {
        renderer.render(&engine.display_state())?;
        Ok(Self { engine, renderer })
    }

    /// One keyboard event. Any key after a finished session starts a new one
    /// and is then played as the first guess of that session.
    pub fn handle_key(&mut self, key: &str) -> Result<GuessOutcome, GameError> {
        if self.engine.status().is_terminal() {
            self.engine.start_session();
            self.renderer.clear_reveal()?;
        }

        let outcome = self.engine.guess(key);
        if outcome == GuessOutcome::AlreadyGuessed {
            self.renderer.notify(&format!("You already guessed {key}!"))?;
        }

        if let Some(end) = self.engine.end_of_game() {
            self.renderer.show_reveal(&end)?;
        }
        self.renderer.render(&self.engine.display_state())?;
        Ok(outcome)
    }

    pub fn engine(&self) -> &GameEngine<G> {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
