//! HangAnimal core crate.
//!
//! Guess the animal one letter at a time. `engine` holds the rules and is
//! plain Rust, usable from native tests; `dom` binds it to the game page.
//! `start_game()` is the entry point called from JS once the page is loaded.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod game;
pub mod logging;
pub mod render;

pub use catalog::{ANIMALS, Catalog, WordEntry};
pub use config::GameConfig;
pub use engine::{DisplayState, EndOfGame, GameEngine, GameSession, GuessOutcome, ScoreBoard, Status};
pub use error::GameError;
pub use game::Game;
pub use render::Renderer;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::start(GameConfig::default())?;
    Ok(())
}

/// Same as `start_game` with a JSON `GameConfig`, e.g. `{"allowed_guesses": 7}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    dom::start(config)?;
    Ok(())
}

/// Current `DisplayState` as JSON, or `null` before `start_game`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn display_state_json() -> Result<Option<String>, JsValue> {
    Ok(dom::display_state_json()?)
}
