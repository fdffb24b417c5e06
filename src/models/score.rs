//! Fixed point values printed in the corner of each tile.

use super::inventory::{letter_index, LETTERS, LETTER_COUNT};

/// Letter scores, indexed alphabetically.
const STANDARD_SCORES: [u32; LETTER_COUNT] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

static STANDARD: ScoreTable = ScoreTable {
    scores: STANDARD_SCORES,
};

/// Immutable letter → point value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: [u32; LETTER_COUNT],
}

impl ScoreTable {
    /// The standard score table, shared for the lifetime of the process.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Point value for `letter` (either case), `None` for non-letters.
    #[must_use]
    pub fn score(&self, letter: char) -> Option<u32> {
        letter_index(letter).map(|idx| self.scores[idx])
    }

    /// Iterates `(letter, score)` pairs alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        LETTERS.iter().copied().zip(self.scores.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scores() {
        let table = ScoreTable::standard();
        assert_eq!(table.score('A'), Some(1));
        assert_eq!(table.score('D'), Some(2));
        assert_eq!(table.score('K'), Some(5));
        assert_eq!(table.score('q'), Some(10));
        assert_eq!(table.score('Z'), Some(10));
        assert_eq!(table.score(' '), None);
    }

    #[test]
    fn test_all_scores_positive() {
        assert!(ScoreTable::standard().iter().all(|(_, s)| s > 0));
    }
}
