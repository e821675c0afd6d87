//! WASM build test
//!
//! This module tests that the WASM module can be built and the exported
//! API works from a browser environment.

#![cfg(target_arch = "wasm32")]

use autoharp_wasm::api::{available_chord_bars, find_transpositions_js, resolve_chord_name};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_find_transpositions_export() {
    let names = serde_wasm_bindgen::to_value(&vec!["C", "A", "D"]).unwrap();
    let result = find_transpositions_js(names);
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_unknown_chord_name_is_a_js_error() {
    let names = serde_wasm_bindgen::to_value(&vec!["H"]).unwrap();
    let result = find_transpositions_js(names);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_resolve_chord_name_export() {
    assert!(resolve_chord_name("Bb").is_ok());
    assert!(resolve_chord_name("H").is_err());
}

#[wasm_bindgen_test]
fn test_available_chord_bars_export() {
    assert!(available_chord_bars().is_ok());
}
