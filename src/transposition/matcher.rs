/// Transposition-compatibility search
///
/// Given a chord progression and an instrument's chord bar layout, find
/// every transposition that lands every chord on an available bar.
///
/// The search works on the progression's interval pattern (each pitch
/// class relative to the first, so the first entry is always 0 and later
/// entries may be negative), slides the whole pattern upward one semitone
/// per round, and records every position where all shifted values sit on
/// available bars. The sweep ends once the largest shifted value reaches
/// 12, i.e. the pattern has slid completely past the octave. Shifted
/// values are never wrapped modulo 12: a transposition that would only
/// work by wrapping past the top of the octave is not reported, and
/// negative values simply fail the membership test until the offset
/// lifts them into range.

use crate::errors::EngineError;
use crate::models::{ChordBarLayout, PitchClass};
use serde::{Deserialize, Serialize};

/// One viable transposition of a progression
///
/// `chords` preserves the input order and duplicates; every element is an
/// available bar. `offset` is the constant shift applied to the interval
/// pattern (an offset equal to the first chord's raw index reproduces the
/// progression unchanged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transposition {
    pub offset: i32,
    pub chords: Vec<PitchClass>,
}

impl Transposition {
    /// Display names of the transposed chords, in progression order
    pub fn chord_names(&self) -> Vec<&'static str> {
        self.chords.iter().map(|pc| pc.name()).collect()
    }
}

/// Enumerate every transposition of `progression` playable on `layout`
///
/// Pure function; transpositions come back in increasing offset order. An
/// empty result is a normal outcome (the progression fits nowhere on the
/// instrument), distinct from the `EmptyProgression` error for an empty
/// input.
pub fn find_transpositions(
    progression: &[PitchClass],
    layout: &ChordBarLayout,
) -> Result<Vec<Transposition>, EngineError> {
    if progression.is_empty() {
        return Err(EngineError::EmptyProgression);
    }

    let first = progression[0].index() as i32;
    let intervals: Vec<i32> = progression
        .iter()
        .map(|pc| pc.index() as i32 - first)
        .collect();

    let mut matches = Vec::new();
    let mut offset = 0;
    loop {
        let shifted: Vec<i32> = intervals.iter().map(|interval| interval + offset).collect();

        let mut chords = Vec::with_capacity(shifted.len());
        for &value in &shifted {
            match layout.bar_at(value) {
                Some(bar) => chords.push(bar),
                None => break,
            }
        }
        if chords.len() == shifted.len() {
            matches.push(Transposition { offset, chords });
        }

        // Termination watches the shifted values, not the round counter:
        // the sweep is done once the pattern's top has left the octave.
        let max_shifted = shifted.iter().copied().fold(i32::MIN, i32::max);
        if max_shifted >= 12 {
            break;
        }
        offset += 1;
    }

    log::debug!(
        "find_transpositions: {} chords, {} matches",
        progression.len(),
        matches.len()
    );
    Ok(matches)
}
