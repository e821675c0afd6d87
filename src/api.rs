//! WASM API for the transposition engine
//!
//! This module provides the JavaScript-facing API: the chip-input widget
//! hands over cleaned chord-root strings, and the presentation layer
//! receives every playable transposition with display-ready chord names.

use crate::errors::EngineError;
use crate::models::{resolve_progression, ChordBarLayout, PitchClass};
use crate::transposition::find_transpositions;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// One transposition as handed to JavaScript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranspositionResult {
    pub offset: i32,
    pub chords: Vec<String>,
}

/// One chord bar as handed to JavaScript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordBar {
    pub index: u8,
    pub name: String,
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Find every transposition of a progression playable on the standard
/// 12-bar autoharp
///
/// # Parameters
/// - `chord_names`: JavaScript array of chord-root strings (already
///   normalized: case/accidental cleanup and quality-suffix stripping are
///   the input widget's job)
///
/// # Returns
/// JavaScript array of `{ offset, chords }` objects in discovery order;
/// an empty array means no transposition fits (a normal outcome, not an
/// error).
#[wasm_bindgen(js_name = findTranspositions)]
pub fn find_transpositions_js(chord_names: JsValue) -> Result<JsValue, JsValue> {
    let names: Vec<String> = serde_wasm_bindgen::from_value(chord_names)
        .map_err(|e| JsValue::from_str(&format!("Deserialization error: {}", e)))?;
    log::info!("findTranspositions called with {} chords", names.len());

    let progression = resolve_progression(&names).map_err(to_js_error)?;
    let matches =
        find_transpositions(&progression, &ChordBarLayout::standard()).map_err(to_js_error)?;
    log::info!("findTranspositions: {} matches", matches.len());

    let results: Vec<TranspositionResult> = matches
        .iter()
        .map(|t| TranspositionResult {
            offset: t.offset,
            chords: t.chord_names().iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&results)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Resolve one chord-root name to its pitch class
///
/// Returns `{ index, name }` with the canonical (possibly dual-spelled)
/// display name, or an error for an unknown root.
#[wasm_bindgen(js_name = resolveChordName)]
pub fn resolve_chord_name(name: &str) -> Result<JsValue, JsValue> {
    let pitch = PitchClass::resolve(name).map_err(to_js_error)?;
    let bar = ChordBar {
        index: pitch.index(),
        name: pitch.name().to_string(),
    };
    serde_wasm_bindgen::to_value(&bar)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The standard 12-bar autoharp's available chord bars
///
/// Returns a JavaScript array of `{ index, name }` objects in ascending
/// pitch class order, for rendering the bar set.
#[wasm_bindgen(js_name = availableChordBars)]
pub fn available_chord_bars() -> Result<JsValue, JsValue> {
    let bars: Vec<ChordBar> = ChordBarLayout::standard()
        .bars()
        .iter()
        .map(|pc| ChordBar {
            index: pc.index(),
            name: pc.name().to_string(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&bars)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
