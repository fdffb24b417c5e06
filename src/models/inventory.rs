//! Letter inventory: how many tiles of each letter to print.

use anyhow::{Context, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of letters in the tile alphabet.
pub const LETTER_COUNT: usize = 26;

/// The tile alphabet in ascending order.
pub const LETTERS: [char; LETTER_COUNT] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Reference counts, indexed alphabetically.
const STANDARD_COUNTS: [u32; LETTER_COUNT] = [
    217, 22, 27, 27, 126, 3, 9, 24, 90, 21, 19, 93, 47, 110, 54, 8, 1, 53, 60, 48, 20, 18, 3, 14,
    31, 3,
];

/// Maps a letter (either case) to its alphabet index.
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Largest count accepted for one letter or for the spare count.
pub const MAX_COUNT: u32 = 10_000;

/// Normalizes a raw count to `0..=MAX_COUNT`.
#[must_use]
pub fn clamp_count(raw: i64) -> u32 {
    u32::try_from(raw.clamp(0, i64::from(MAX_COUNT))).unwrap_or(MAX_COUNT)
}

/// Tile counts for every letter of the alphabet.
///
/// Backed by a fixed array, so each letter is present exactly once and
/// iteration is always alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterInventory {
    counts: [u32; LETTER_COUNT],
}

impl LetterInventory {
    /// Creates an inventory with every count set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; LETTER_COUNT],
        }
    }

    /// The reference inventory used when nothing else is configured.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            counts: STANDARD_COUNTS,
        }
    }

    /// Returns the count for `letter`, or `None` if it is not A-Z.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u32> {
        letter_index(letter).map(|idx| self.counts[idx])
    }

    /// Sets the count for `letter`, capped at [`MAX_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns an error if `letter` is not an ASCII letter.
    pub fn set(&mut self, letter: char, count: u32) -> Result<()> {
        let idx = letter_index(letter)
            .with_context(|| format!("'{letter}' is not a tile letter (expected A-Z)"))?;
        self.counts[idx] = count.min(MAX_COUNT);
        Ok(())
    }

    /// Builder-style variant of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns an error if `letter` is not an ASCII letter.
    pub fn with(mut self, letter: char, count: u32) -> Result<Self> {
        self.set(letter, count)?;
        Ok(self)
    }

    /// Iterates `(letter, count)` pairs in ascending alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        LETTERS.iter().copied().zip(self.counts.iter().copied())
    }

    /// Sum of all base counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Sum of all counts after adding `spares` to every letter.
    #[must_use]
    pub fn total_with_spares(&self, spares: u32) -> u64 {
        self.total() + u64::from(spares) * LETTER_COUNT as u64
    }

    /// Parses a `LETTER=COUNT` assignment as typed on the command line.
    ///
    /// The count follows the input-field rule: negative or non-numeric
    /// values are normalized to 0. The letter itself must be A-Z.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `=` or the key is not a single letter.
    pub fn parse_assignment(input: &str) -> Result<(char, u32)> {
        let (key, value) = input
            .split_once('=')
            .with_context(|| format!("Invalid letter assignment '{input}'. Expected LETTER=COUNT"))?;

        let mut chars = key.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if letter_index(c).is_some() => c.to_ascii_uppercase(),
            _ => anyhow::bail!("Invalid letter '{}' in assignment '{input}'", key.trim()),
        };

        let count = value.trim().parse::<i64>().map(clamp_count).unwrap_or(0);
        Ok((letter, count))
    }
}

impl Default for LetterInventory {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for LetterInventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LETTER_COUNT))?;
        for (letter, count) in self.iter() {
            map.serialize_entry(&letter.to_string(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LetterInventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(InventoryVisitor)
    }
}

struct InventoryVisitor;

impl<'de> Visitor<'de> for InventoryVisitor {
    type Value = LetterInventory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from letters A-Z to tile counts")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut inventory = LetterInventory::new();
        let mut seen = [false; LETTER_COUNT];

        while let Some((key, raw)) = access.next_entry::<String, i64>()? {
            let mut chars = key.chars();
            let idx = match (chars.next(), chars.next()) {
                (Some(c), None) => letter_index(c),
                _ => None,
            }
            .ok_or_else(|| de::Error::custom(format!("'{key}' is not a tile letter")))?;

            if seen[idx] {
                return Err(de::Error::custom(format!(
                    "letter '{}' is listed more than once",
                    LETTERS[idx]
                )));
            }
            seen[idx] = true;
            inventory.counts[idx] = clamp_count(raw);
        }

        Ok(inventory)
    }
}
