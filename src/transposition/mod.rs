pub mod matcher;

pub use matcher::{find_transpositions, Transposition};
