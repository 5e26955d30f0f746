//! Static animal word list.
//!
//! Every entry is a lowercase, letters-only word plus the image shown when a
//! session ends. The list is fixed at compile time; the engine borrows it for
//! the lifetime of the page.

use rand::Rng;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub name: &'static str,
    pub image_url: &'static str,
}

impl WordEntry {
    /// Name with the first letter uppercased, used under the reveal image.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub const ANIMALS: &[WordEntry] = &[
    WordEntry { name: "giraffe", image_url: "./assets/images/giraffe.jfif" },
    WordEntry { name: "elephant", image_url: "./assets/images/elephant.jfif" },
    WordEntry { name: "tiger", image_url: "./assets/images/tiger.jfif" },
    WordEntry { name: "unicorn", image_url: "./assets/images/unicorn.jfif" },
];

/// Non-empty set of candidate words.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [WordEntry],
}

impl Catalog {
    pub fn new(entries: &'static [WordEntry]) -> Result<Self, GameError> {
        if entries.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        // Guesses are never case folded, so names must match what a key press yields.
        if let Some(bad) = entries
            .iter()
            .find(|e| e.name.is_empty() || !e.name.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(GameError::InvalidCatalog(format!(
                "word {:?} must be non-empty lowercase letters",
                bad.name
            )));
        }
        Ok(Self { entries })
    }

    pub fn animals() -> Self {
        Self { entries: ANIMALS }
    }

    pub fn entries(&self) -> &'static [WordEntry] {
        self.entries
    }

    pub fn get(&self, name: &str) -> Option<&'static WordEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Uniform pick; draws are independent so repeats are allowed.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static WordEntry {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::animals()
    }
}
