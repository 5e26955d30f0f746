// Browser tests for the DOM renderer. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use hang_animal::dom::{self, DomRenderer};
use hang_animal::{Catalog, EndOfGame, GameConfig, GameEngine, Renderer, Status};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_page() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    body.set_inner_html(
        "<span id='wins'></span><span id='current-word'></span>\
         <span id='guessed-chars'></span><span id='guesses-left'></span>\
         <p id='end-game-text'></p><div id='picture'></div>",
    );
}

fn text(id: &str) -> String {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.get_element_by_id(id).unwrap().text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn renders_display_state_into_slots() {
    mount_page();
    let engine =
        GameEngine::new(Catalog::animals(), GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    let mut renderer = DomRenderer::from_window().unwrap();
    renderer.render(&engine.display_state()).unwrap();
    assert_eq!(text(dom::WINS_ID), "0");
    assert_eq!(text(dom::GUESSES_LEFT_ID), "5");
    assert_eq!(text(dom::GUESSED_ID), "");
    assert!(text(dom::CURRENT_WORD_ID).starts_with('_'));
}

#[wasm_bindgen_test]
fn reveal_is_added_then_cleared() {
    mount_page();
    let doc = web_sys::window().unwrap().document().unwrap();
    let mut renderer = DomRenderer::from_window().unwrap();
    let end = EndOfGame { status: Status::Lost, entry: Catalog::animals().get("unicorn").unwrap() };

    renderer.show_reveal(&end).unwrap();
    assert_eq!(text(dom::END_TEXT_ID), "You Lose!");
    assert_eq!(text(dom::NAME_ID), "Unicorn");
    assert!(doc.get_element_by_id(dom::IMAGE_ID).is_some());

    renderer.clear_reveal().unwrap();
    assert_eq!(text(dom::END_TEXT_ID), "");
    assert!(doc.get_element_by_id(dom::IMAGE_ID).is_none());
    assert!(doc.get_element_by_id(dom::NAME_ID).is_none());
}

#[wasm_bindgen_test]
fn missing_slot_is_a_dom_error() {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html("");
    let engine =
        GameEngine::new(Catalog::animals(), GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    let mut renderer = DomRenderer::from_window().unwrap();
    assert!(renderer.render(&engine.display_state()).is_err());
}
