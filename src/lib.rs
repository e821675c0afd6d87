//! Autoharp Transposition Engine WASM Module
//!
//! Given an ordered chord progression, this module enumerates every
//! transposition that can be played entirely on the chord bars of a
//! standard 12-bar autoharp (10 of the 12 chromatic roots present).

pub mod api;
pub mod errors;
pub mod models;
pub mod transposition;

// Re-export commonly used types
pub use errors::EngineError;
pub use models::{resolve_progression, ChordBarLayout, PitchClass};
pub use transposition::{find_transpositions, Transposition};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Autoharp transposition engine WASM module initialized");
}
