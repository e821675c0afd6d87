//! Chord bar layouts for autoharp instrument models
//!
//! A layout is the fixed set of chord bars an instrument physically
//! carries, by root pitch class. The standard 12-bar autoharp covers 10
//! of the 12 chromatic roots: every root except C#/Db and F#/Gb.

use crate::errors::EngineError;
use crate::models::pitch_class::{PitchClass, PITCH_CLASS_COUNT};
use serde::{Deserialize, Serialize};

/// Pitch classes missing from the standard 12-bar layout (C#/Db, F#/Gb)
const STANDARD_MISSING_BARS: [u8; 2] = [4, 9];

/// The set of chord bars available on one instrument model
///
/// Immutable after construction and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordBarLayout {
    bars: [bool; PITCH_CLASS_COUNT as usize],
}

impl ChordBarLayout {
    /// The standard 12-bar autoharp layout (10 roots available)
    pub fn standard() -> ChordBarLayout {
        let mut bars = [true; PITCH_CLASS_COUNT as usize];
        for &missing in &STANDARD_MISSING_BARS {
            bars[missing as usize] = false;
        }
        ChordBarLayout { bars }
    }

    /// Build a layout for an instrument variant from its bar indices
    ///
    /// Rejects indices outside 0-11 and empty bar sets; duplicates are
    /// harmless.
    pub fn from_indices(indices: &[u8]) -> Result<ChordBarLayout, EngineError> {
        let mut bars = [false; PITCH_CLASS_COUNT as usize];
        for &index in indices {
            if index >= PITCH_CLASS_COUNT {
                return Err(EngineError::InvalidBarIndex(index));
            }
            bars[index as usize] = true;
        }
        if !bars.contains(&true) {
            return Err(EngineError::EmptyLayout);
        }
        Ok(ChordBarLayout { bars })
    }

    /// The chord bar at a shifted pitch value, if the instrument has one
    ///
    /// Values outside 0-11 (negative or slid past the octave) have no bar.
    pub fn bar_at(&self, value: i32) -> Option<PitchClass> {
        if (0..PITCH_CLASS_COUNT as i32).contains(&value) && self.bars[value as usize] {
            PitchClass::from_index(value as u8)
        } else {
            None
        }
    }

    /// Membership test for a shifted pitch value
    pub fn contains(&self, value: i32) -> bool {
        self.bar_at(value).is_some()
    }

    /// Available bars in ascending pitch class order
    pub fn bars(&self) -> Vec<PitchClass> {
        PitchClass::all().filter(|pc| self.bars[pc.index() as usize]).collect()
    }

    /// Number of chord bars on the instrument
    pub fn bar_count(&self) -> usize {
        self.bars.iter().filter(|&&present| present).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_has_ten_bars() {
        let layout = ChordBarLayout::standard();
        assert_eq!(layout.bar_count(), 10);
        let indices: Vec<u8> = layout.bars().iter().map(|pc| pc.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 5, 6, 7, 8, 10, 11]);
    }

    #[test]
    fn test_standard_layout_is_missing_the_two_accidental_roots() {
        let layout = ChordBarLayout::standard();
        assert!(!layout.contains(4)); // C# / Db
        assert!(!layout.contains(9)); // F# / Gb
        assert!(layout.contains(3)); // C
    }

    #[test]
    fn test_out_of_range_values_have_no_bar() {
        let layout = ChordBarLayout::standard();
        assert!(!layout.contains(-3));
        assert!(!layout.contains(12));
        assert!(!layout.contains(14));
    }

    #[test]
    fn test_variant_layout_from_indices() {
        let layout = ChordBarLayout::from_indices(&[0, 3, 5, 7]).unwrap();
        assert_eq!(layout.bar_count(), 4);
        assert!(layout.contains(3));
        assert!(!layout.contains(1));
    }

    #[test]
    fn test_empty_and_invalid_layouts_are_rejected() {
        assert_eq!(
            ChordBarLayout::from_indices(&[]),
            Err(EngineError::EmptyLayout)
        );
        assert_eq!(
            ChordBarLayout::from_indices(&[0, 12]),
            Err(EngineError::InvalidBarIndex(12))
        );
    }
}
