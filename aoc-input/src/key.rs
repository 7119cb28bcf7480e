//! Puzzle key identifying one cacheable input

use crate::error::KeyError;
use std::fmt;
use std::ops::RangeInclusive;

/// Days that carry a puzzle
pub const DAYS: RangeInclusive<u8> = 1..=25;

/// A validated (year, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleKey {
    year: u16,
    day: u8,
}

impl PuzzleKey {
    /// Create a key, rejecting year 0 and days outside [`DAYS`]
    pub fn new(year: u16, day: u8) -> Result<Self, KeyError> {
        if year == 0 {
            return Err(KeyError::InvalidYear(year));
        }
        if !DAYS.contains(&day) {
            return Err(KeyError::InvalidDay(day));
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Cache file name for this day, e.g. `Day02.txt`
    pub fn file_name(&self) -> String {
        format!("Day{:02}.txt", self.day)
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/Day{:02}", self.year, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(PuzzleKey::new(0, 1), Err(KeyError::InvalidYear(0)));
        assert_eq!(PuzzleKey::new(2024, 0), Err(KeyError::InvalidDay(0)));
        assert_eq!(PuzzleKey::new(2024, 26), Err(KeyError::InvalidDay(26)));
    }

    #[test]
    fn test_display_and_file_name() {
        let key = PuzzleKey::new(2024, 2).unwrap();
        assert_eq!(key.to_string(), "2024/Day02");
        assert_eq!(key.file_name(), "Day02.txt");

        let key = PuzzleKey::new(2023, 14).unwrap();
        assert_eq!(key.file_name(), "Day14.txt");
    }

    proptest! {
        #[test]
        fn prop_valid_keys_round_trip(year in 1u16.., day in 1u8..=25u8) {
            let key = PuzzleKey::new(year, day).unwrap();
            prop_assert_eq!(key.year(), year);
            prop_assert_eq!(key.day(), day);
            prop_assert_eq!(key.file_name().len(), "DayNN.txt".len());
        }
    }
}
