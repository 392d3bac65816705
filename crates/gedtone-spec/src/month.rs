//! Calendar months and their fixed pitch mapping.
//!
//! Each month maps to one note of a C major scale starting at middle C:
//! January is C4 and December is G5. The table is a process-wide constant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (1 = January, 12 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    Jan = 1,
    Feb = 2,
    Mar = 3,
    Apr = 4,
    May = 5,
    Jun = 6,
    Jul = 7,
    Aug = 8,
    Sep = 9,
    Oct = 10,
    Nov = 11,
    Dec = 12,
}

/// Static properties of a month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthInfo {
    /// Upper-case three-letter abbreviation.
    pub abbrev: &'static str,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Scientific pitch name of the tone.
    pub note: &'static str,
}

/// Month table, indexed by `month number - 1`.
const MONTH_TABLE: [MonthInfo; 12] = [
    MonthInfo { abbrev: "JAN", frequency: 261.63, note: "C4" },
    MonthInfo { abbrev: "FEB", frequency: 293.66, note: "D4" },
    MonthInfo { abbrev: "MAR", frequency: 329.63, note: "E4" },
    MonthInfo { abbrev: "APR", frequency: 349.23, note: "F4" },
    MonthInfo { abbrev: "MAY", frequency: 392.00, note: "G4" },
    MonthInfo { abbrev: "JUN", frequency: 440.00, note: "A4" },
    MonthInfo { abbrev: "JUL", frequency: 493.88, note: "B4" },
    MonthInfo { abbrev: "AUG", frequency: 523.25, note: "C5" },
    MonthInfo { abbrev: "SEP", frequency: 587.33, note: "D5" },
    MonthInfo { abbrev: "OCT", frequency: 659.25, note: "E5" },
    MonthInfo { abbrev: "NOV", frequency: 698.46, note: "F5" },
    MonthInfo { abbrev: "DEC", frequency: 783.99, note: "G5" },
];

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Returns the month with the given number (1-12).
    pub fn from_number(number: u8) -> Option<Month> {
        match number {
            1..=12 => Some(Month::ALL[number as usize - 1]),
            _ => None,
        }
    }

    /// Looks up a three-letter abbreviation, ignoring case.
    ///
    /// Case folding is Unicode-aware, so `ſep` (long s) maps to SEP the
    /// same way the extraction pattern matches it.
    pub fn from_abbrev(abbrev: &str) -> Option<Month> {
        let upper = abbrev.to_uppercase();
        Month::ALL.iter().copied().find(|m| m.abbrev() == upper)
    }

    /// Month number (1-12).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index into per-month tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Static table entry for this month.
    pub fn info(self) -> &'static MonthInfo {
        &MONTH_TABLE[self.index()]
    }

    /// Upper-case abbreviation ("JAN".."DEC").
    pub fn abbrev(self) -> &'static str {
        self.info().abbrev
    }

    /// Tone frequency in Hz.
    pub fn frequency(self) -> f64 {
        self.info().frequency
    }

    /// Scientific pitch name ("C4".."G5").
    pub fn note_name(self) -> &'static str {
        self.info().note
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.number()
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::from_number(value).ok_or_else(|| format!("month number out of range: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_round_trip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number() as usize, i + 1);
            assert_eq!(Month::from_number(month.number()), Some(*month));
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_from_abbrev_ignores_case() {
        assert_eq!(Month::from_abbrev("JAN"), Some(Month::Jan));
        assert_eq!(Month::from_abbrev("jan"), Some(Month::Jan));
        assert_eq!(Month::from_abbrev("Sep"), Some(Month::Sep));
        assert_eq!(Month::from_abbrev("JANUARY"), None);
        assert_eq!(Month::from_abbrev("ABC"), None);
    }

    #[test]
    fn test_from_abbrev_unicode_fold() {
        assert_eq!(Month::from_abbrev("\u{17f}EP"), Some(Month::Sep));
        assert_eq!(Month::from_abbrev("\u{17f}ep"), Some(Month::Sep));
        assert_eq!(Month::from_abbrev("J\u{17f}N"), None);
    }

    #[test]
    fn test_frequencies_strictly_ascending() {
        for pair in Month::ALL.windows(2) {
            assert!(
                pair[0].frequency() < pair[1].frequency(),
                "{} should be lower than {}",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(Month::Jan.frequency(), 261.63);
        assert_eq!(Month::Dec.frequency(), 783.99);
    }

    #[test]
    fn test_note_names() {
        assert_eq!(Month::Jan.note_name(), "C4");
        assert_eq!(Month::Aug.note_name(), "C5");
        assert_eq!(Month::Dec.note_name(), "G5");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&Month::May).unwrap();
        assert_eq!(json, "5");
        let back: Month = serde_json::from_str("12").unwrap();
        assert_eq!(back, Month::Dec);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }
}
