//! Built-in word lists and the borrowed view over caller-supplied lists.
//!
//! The built-ins are process-wide read-only statics. Index positions matter:
//! seeded names select words by index, so reordering or deduplicating these
//! lists changes every seeded name.

use std::collections::HashSet;

use crate::error::{NameError, Result, WordKind};

pub const DEFAULT_ADJECTIVES: &[&str] = &[
    "aged", "ancient", "autumn", "billowing", "bitter", "black", "blue", "bold", "broad", "broken",
    "calm", "cold", "cool", "crimson", "curly", "damp", "dark", "dawn", "delicate", "divine", "dry",
    "empty", "falling", "fancy", "flat", "floral", "fragrant", "frosty", "gentle", "green",
    "hidden", "holy", "icy", "jolly", "late", "lingering", "little", "lively", "long", "lucky",
    "misty", "morning", "muddy", "mute", "nameless", "noisy", "odd", "old", "orange", "patient",
    "plain", "polished", "proud", "purple", "quiet", "rapid", "raspy", "red", "restless", "rough",
    "round", "royal", "shiny", "shrill", "shy", "silent", "small", "snowy", "soft", "solitary",
    "sparkling", "spring", "square", "steep", "still", "summer", "super", "sweet", "throbbing",
    "tight", "tiny", "twilight", "wandering", "weathered", "white", "wild", "winter", "wispy",
    "withered", "yellow", "young",
];

pub const DEFAULT_NOUNS: &[&str] = &[
    "art", "band", "bar", "base", "bird", "block", "boat", "bonus", "bread", "breeze", "brook",
    "bush", "butterfly", "cake", "cell", "cherry", "cloud", "credit", "darkness", "dawn", "dew",
    "disk", "dream", "dust", "feather", "field", "fire", "firefly", "flower", "fog", "forest",
    "frog", "frost", "glade", "glitter", "grass", "hall", "hat", "haze", "heart", "hill", "king",
    "lab", "lake", "leaf", "limit", "math", "meadow", "mode", "moon", "morning", "mountain",
    "mouse", "mud", "night", "paper", "pine", "poetry", "pond", "queen", "rain", "recipe",
    "resonance", "rice", "river", "salad", "scene", "sea", "shadow", "shape", "silence", "sky",
    "smoke", "snow", "snowflake", "sound", "star", "sun", "sun", "sunset", "surf", "term",
    "thunder", "tooth", "tree", "truth", "union", "unit", "violet", "voice", "water", "waterfall",
    "wave", "wildflower", "wind", "wood",
];

/// A read-only view of one word list.
#[derive(Debug, Clone, Copy)]
pub enum WordList<'a> {
    Builtin(&'static [&'static str]),
    Custom(&'a [String]),
}

impl<'a> WordList<'a> {
    /// Use `custom` when it has entries, otherwise fall back to `builtin`.
    pub fn or_builtin(custom: Option<&'a [String]>, builtin: &'static [&'static str]) -> Self {
        match custom {
            Some(words) if !words.is_empty() => WordList::Custom(words),
            _ => WordList::Builtin(builtin),
        }
    }

    pub fn adjectives(custom: Option<&'a [String]>) -> Self {
        Self::or_builtin(custom, DEFAULT_ADJECTIVES)
    }

    pub fn nouns(custom: Option<&'a [String]>) -> Self {
        Self::or_builtin(custom, DEFAULT_NOUNS)
    }

    pub fn len(&self) -> usize {
        match self {
            WordList::Builtin(words) => words.len(),
            WordList::Custom(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        match *self {
            WordList::Builtin(words) => words.get(index).copied(),
            WordList::Custom(words) => words.get(index).map(String::as_str),
        }
    }

    /// Fail with [`NameError::EmptyWordList`] when there is nothing to pick.
    pub fn ensure_non_empty(&self, kind: WordKind) -> Result<()> {
        if self.is_empty() {
            return Err(NameError::EmptyWordList(kind));
        }
        Ok(())
    }
}
