//! Word catalog: the loaded words, their assigned colors and layout weights.

use std::collections::{HashMap, HashSet};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::palette::generate_palette;
use crate::types::WordEntry;

/// Smallest layout weight; every word renders at least this large.
pub const BASE_WEIGHT: u32 = 40;
/// Weight increment per position within a cycle.
pub const WEIGHT_STEP: u32 = 2;
/// Weights repeat every this many words.
pub const WEIGHT_CYCLE: usize = 10;

/// Layout weight for the word at `index`, oscillating in `[40, 58]`.
///
/// Depends only on position, never on the word's text or frequency.
#[must_use]
pub fn weight_for_index(index: usize) -> u32 {
    let step = u32::try_from(index % WEIGHT_CYCLE).unwrap_or(0);
    BASE_WEIGHT + step * WEIGHT_STEP
}

/// One loaded dataset.
///
/// Serializes as `{ entries, colors }` with `colors` keyed by lowercase word
/// in first-load order, so the same file always produces the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
    /// Lowercase word -> color. Case-colliding words share one slot and the
    /// later entry wins.
    colors: HashMap<String, Rgb>,
}

impl WordCatalog {
    /// Build a catalog, coloring entries by position.
    #[must_use]
    pub fn build(entries: Vec<WordEntry>) -> Self {
        let palette = generate_palette(entries.len());
        let colors = entries
            .iter()
            .zip(palette)
            .map(|(entry, color)| (entry.key(), color))
            .collect();
        Self { entries, colors }
    }

    /// Entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assigned color, looked up case-insensitively.
    #[must_use]
    pub fn color_of(&self, word: &str) -> Option<Rgb> {
        self.colors.get(&word.to_lowercase()).copied()
    }

    /// Number of distinct case-insensitive words.
    #[must_use]
    pub fn distinct_colors(&self) -> usize {
        self.colors.len()
    }

    /// `(word, weight)` pairs in load order.
    #[must_use]
    pub fn weights(&self) -> Vec<(String, u32)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.word.clone(), weight_for_index(i)))
            .collect()
    }

    /// `(entry, color)` pairs in load order, skipping entries without a color.
    pub fn colored_entries(&self) -> impl Iterator<Item = (&WordEntry, Rgb)> + '_ {
        self.entries
            .iter()
            .filter_map(|entry| self.color_of(&entry.word).map(|color| (entry, color)))
    }
}

impl Serialize for WordCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WordCatalog", 2)?;
        state.serialize_field("entries", &self.entries)?;
        state.serialize_field("colors", &LoadOrderColors(self))?;
        state.end()
    }
}

struct LoadOrderColors<'a>(&'a WordCatalog);

impl Serialize for LoadOrderColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let catalog = self.0;
        let mut seen = HashSet::new();
        serializer.collect_map(catalog.entries.iter().filter_map(|entry| {
            let key = entry.key();
            let color = catalog.colors.get(&key).copied()?;
            seen.insert(key.clone()).then_some((key, color))
        }))
    }
}
