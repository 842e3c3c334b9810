//! Default value functions for serde deserialization.

use crate::search::TieBreak;

pub fn size() -> usize {
    10
}

pub fn density() -> f64 {
    0.25
}

pub fn seed() -> u64 {
    42
}

pub fn tie_break() -> TieBreak {
    TieBreak::Newest
}
