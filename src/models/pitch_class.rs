/// Canonical 12-tone pitch class table
///
/// Pitch classes are indexed 0-11 starting from A (A=0, A#/Bb=1, ...,
/// G#/Ab=11). The five accidental classes carry a dual enharmonic display
/// spelling ("A# / Bb"); resolution accepts either spelling, display
/// always renders the combined form.

use crate::errors::EngineError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of chromatic pitch classes
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Canonical display names, indexed by pitch class
const DISPLAY_NAMES: [&str; 12] = [
    "A",
    "A# / Bb",
    "B",
    "C",
    "C# / Db",
    "D",
    "D# / Eb",
    "E",
    "F",
    "F# / Gb",
    "G",
    "G# / Ab",
];

lazy_static! {
    /// Accepted input spellings (upper-cased) → pitch class index
    static ref SPELLINGS: HashMap<&'static str, u8> = {
        let mut table = HashMap::new();
        let entries: &[(&str, u8)] = &[
            ("A", 0),
            ("A#", 1), ("A♯", 1), ("BB", 1), ("B♭", 1),
            ("B", 2),
            ("C", 3),
            ("C#", 4), ("C♯", 4), ("DB", 4), ("D♭", 4),
            ("D", 5),
            ("D#", 6), ("D♯", 6), ("EB", 6), ("E♭", 6),
            ("E", 7),
            ("F", 8),
            ("F#", 9), ("F♯", 9), ("GB", 9), ("G♭", 9),
            ("G", 10),
            ("G#", 11), ("G♯", 11), ("AB", 11), ("A♭", 11),
        ];
        for &(spelling, index) in entries {
            table.insert(spelling, index);
        }
        table
    };
}

/// One of the 12 chromatic pitch classes, independent of octave
///
/// Immutable and defined once; ordering is fixed with A = 0 and adjacency
/// modular, though the matcher's sweep does not wrap (see the matcher docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Construct from a raw index; `None` outside 0-11
    pub fn from_index(index: u8) -> Option<PitchClass> {
        if index < PITCH_CLASS_COUNT {
            Some(PitchClass(index))
        } else {
            None
        }
    }

    /// Resolve a chord-root name (case-insensitive, sharp or flat spelling)
    ///
    /// Examples:
    ///   "A" → 0
    ///   "a#" → 1
    ///   "Bb" → 1
    ///   "f♯" → 9
    ///
    /// The name must be a bare root: quality suffixes ("Am", "C7") are the
    /// input normalizer's job to strip and are rejected here.
    pub fn resolve(name: &str) -> Result<PitchClass, EngineError> {
        let key = name.trim().to_uppercase();
        SPELLINGS
            .get(key.as_str())
            .map(|&index| PitchClass(index))
            .ok_or_else(|| EngineError::UnknownChordName(name.to_string()))
    }

    /// The raw chromatic index, 0-11
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Canonical display name, dual-spelled for the five accidental classes
    pub fn name(&self) -> &'static str {
        DISPLAY_NAMES[self.0 as usize]
    }

    /// All 12 pitch classes in table order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::resolve(s)
    }
}

/// Resolve a whole progression of chord-root names, in entry order
///
/// Fails on the first unresolvable name; no partial progression is built.
pub fn resolve_progression<S: AsRef<str>>(names: &[S]) -> Result<Vec<PitchClass>, EngineError> {
    names
        .iter()
        .map(|name| PitchClass::resolve(name.as_ref()))
        .collect()
}
