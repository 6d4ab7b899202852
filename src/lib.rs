//! rtmap: turns radio range-test CSV logs into one interactive HTML
//! map – per-source color-coded point layers plus an aggregated SNR
//! heat layer over a set of selectable basemaps.

pub mod canvas;
pub mod color;
pub mod data;
pub mod error;
pub mod layers;
pub mod pipeline;
