//! Data models for the transposition engine
//!
//! The pitch model: the canonical 12-tone pitch class table and the
//! instrument chord bar layouts the matcher searches against.

pub mod instrument;
pub mod pitch_class;

// Re-export commonly used types
pub use instrument::ChordBarLayout;
pub use pitch_class::{resolve_progression, PitchClass, PITCH_CLASS_COUNT};
