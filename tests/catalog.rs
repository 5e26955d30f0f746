// Catalog invariants. Native-friendly, no wasm/browser APIs.

use std::collections::HashSet;

use hang_animal::{ANIMALS, Catalog};

#[test]
fn animal_names_are_unique_lowercase_letters() {
    let mut seen = HashSet::new();
    for entry in ANIMALS {
        assert!(seen.insert(entry.name), "duplicate animal '{}'", entry.name);
        assert!(!entry.name.is_empty());
        for c in entry.name.chars() {
            assert!(c.is_ascii_lowercase(), "invalid char '{}' in '{}'", c, entry.name);
        }
    }
}

#[test]
fn every_animal_has_its_own_image() {
    for entry in ANIMALS {
        assert!(
            entry.image_url.starts_with("./assets/images/") && entry.image_url.contains(entry.name),
            "image '{}' does not belong to '{}'",
            entry.image_url,
            entry.name
        );
    }
}

#[test]
fn stock_catalog_holds_the_four_animals() {
    let catalog = Catalog::animals();
    for name in ["giraffe", "elephant", "tiger", "unicorn"] {
        assert!(catalog.get(name).is_some(), "missing '{}'", name);
    }
    assert_eq!(catalog.entries().len(), 4);
    assert!(catalog.get("zebra").is_none());
}
