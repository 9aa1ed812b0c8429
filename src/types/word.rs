use serde::{Deserialize, Serialize};

use super::Bounds;

/// One usable row of input: a word and the text shown when hovering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub explanation: String,
}

impl WordEntry {
    /// Build an entry from raw cell text.
    ///
    /// Returns `None` when the word is empty after trimming. A missing or
    /// blank explanation falls back to the word itself.
    #[must_use]
    pub fn from_cells(word: &str, explanation: Option<&str>) -> Option<Self> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        let explanation = explanation
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(word);
        Some(Self {
            word: word.to_string(),
            explanation: explanation.to_string(),
        })
    }

    /// Case-insensitive catalog key.
    #[must_use]
    pub fn key(&self) -> String {
        self.word.to_lowercase()
    }
}

/// A word resolved to an on-screen box, as found by scanning the render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPosition {
    pub word: String,
    pub explanation: String,
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl WordPosition {
    #[must_use]
    pub fn new(entry: &WordEntry, bounds: Bounds) -> Self {
        Self {
            word: entry.word.clone(),
            explanation: entry.explanation.clone(),
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        }
    }

    /// Inclusive hit test.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds().contains(x, y)
    }
}
