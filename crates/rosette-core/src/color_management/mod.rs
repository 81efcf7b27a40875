//! Color management — color model tags and per-triplet conversions.

pub mod color_space;
pub mod convert;
