//! Browser presentation layer: renders into the game page and feeds `keyup`
//! events to the live game.
//!
//! The page provides the text slots `#wins`, `#current-word`,
//! `#guessed-chars`, `#guesses-left`, `#end-game-text` and a `#picture`
//! container; the reveal appends `#animalImg` and `#animalName` to it.

use std::cell::{Cell, RefCell};

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, Window, window};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::engine::{DisplayState, EndOfGame, GameEngine};
use crate::error::GameError;
use crate::game::Game;
use crate::render::Renderer;

pub const WINS_ID: &str = "wins";
pub const CURRENT_WORD_ID: &str = "current-word";
pub const GUESSED_ID: &str = "guessed-chars";
pub const GUESSES_LEFT_ID: &str = "guesses-left";
pub const END_TEXT_ID: &str = "end-game-text";
pub const PICTURE_ID: &str = "picture";
pub const IMAGE_ID: &str = "animalImg";
pub const NAME_ID: &str = "animalName";

pub struct DomRenderer {
    window: Window,
    document: Document,
}

impl DomRenderer {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn from_window() -> Result<Self, GameError> {
        let win = window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let doc = win.document().ok_or_else(|| GameError::Dom("no document".into()))?;
        Ok(Self::new(win, doc))
    }

    fn element(&self, id: &str) -> Result<Element, GameError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::Dom(format!("missing element #{id}")))
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), GameError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }
}

impl Renderer for DomRenderer {
    fn render(&mut self, state: &DisplayState) -> Result<(), GameError> {
        self.set_text(WINS_ID, &state.wins.to_string())?;
        self.set_text(CURRENT_WORD_ID, &state.revealed_text())?;
        self.set_text(GUESSED_ID, &state.guessed_text())?;
        self.set_text(GUESSES_LEFT_ID, &state.attempts_remaining.to_string())
    }

    fn notify(&mut self, message: &str) -> Result<(), GameError> {
        self.window.alert_with_message(message).map_err(|e| GameError::dom("alert", e))
    }

    fn show_reveal(&mut self, end: &EndOfGame) -> Result<(), GameError> {
        self.set_text(END_TEXT_ID, end.message())?;
        let picture = self.element(PICTURE_ID)?;
        let name = end.entry.display_name();

        let img: HtmlImageElement = self
            .document
            .create_element("img")
            .map_err(|e| GameError::dom("create img", e))?
            .dyn_into()
            .map_err(|_| GameError::Dom("img is not an HtmlImageElement".into()))?;
        img.set_id(IMAGE_ID);
        img.set_src(end.entry.image_url);
        img.set_alt(&name);
        picture.append_child(&img).map_err(|e| GameError::dom("append img", e))?;

        let caption = self.document.create_element("p").map_err(|e| GameError::dom("create p", e))?;
        caption.set_id(NAME_ID);
        caption.set_text_content(Some(&name));
        picture.append_child(&caption).map_err(|e| GameError::dom("append name", e))?;
        Ok(())
    }

    fn clear_reveal(&mut self) -> Result<(), GameError> {
        self.set_text(END_TEXT_ID, "")?;
        for id in [IMAGE_ID, NAME_ID] {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.remove();
            }
        }
        Ok(())
    }
}

thread_local! {
    static GAME: RefCell<Option<Game<DomRenderer>>> = RefCell::new(None);
    static LISTENING: Cell<bool> = Cell::new(false);
}

fn seeded_rng() -> StdRng {
    #[cfg(feature = "rng")]
    {
        StdRng::from_entropy()
    }
    #[cfg(not(feature = "rng"))]
    {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        StdRng::seed_from_u64(now.to_bits())
    }
}

/// Build a fresh game on the current page and start listening for keys.
/// Calling it again replaces the game (wins reset) but keeps one listener.
pub fn start(config: GameConfig) -> Result<(), GameError> {
    let renderer = DomRenderer::from_window()?;
    let document = renderer.document.clone();
    let engine = GameEngine::new(Catalog::animals(), config, seeded_rng())?;
    let game = Game::new(engine, renderer)?;
    GAME.with(|g| g.replace(Some(game)));

    if !LISTENING.with(|l| l.replace(true)) {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    if let Err(err) = game.handle_key(&evt.key()) {
                        log::error!("key '{}' failed: {err}", evt.key());
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::dom("keyup listener", e))?;
        closure.forget();
    }
    log::info!("game started");
    Ok(())
}

#[cfg(feature = "serde_json")]
pub fn display_state_json() -> Result<Option<String>, GameError> {
    GAME.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|game| serde_json::to_string(&game.engine().display_state()))
            .transpose()
            .map_err(GameError::from)
    })
}
