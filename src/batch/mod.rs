// src/batch/mod.rs
// =============================================================================
// This module turns the two input files into the list of candidate URLs.
//
// Submodules:
// - input: Reads one input file into a list of lines
// - build: Combines base URLs and URI suffixes (cartesian product)
// =============================================================================

mod build;
mod input;

pub use build::build;
pub use input::read_lines;
