//! Error types for the transposition engine
//!
//! Two failure categories exist: a chord-root name that resolves to no
//! pitch class, and malformed arguments (empty progression, unusable
//! chord bar layout). An empty match list is a normal result, not an error.

use thiserror::Error;

/// Top-level engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A chord-root string matched no entry in the 12-pitch table
    #[error("unknown chord name: {0}")]
    UnknownChordName(String),

    /// The matcher was handed a progression with no chords
    #[error("progression is empty")]
    EmptyProgression,

    /// A chord bar layout was constructed with no bars
    #[error("chord bar layout has no bars")]
    EmptyLayout,

    /// A chord bar index outside the 12-pitch range
    #[error("invalid chord bar index: {0} (expected 0-11)")]
    InvalidBarIndex(u8),
}
