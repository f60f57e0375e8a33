//! Project-level generation: one context, every target file

mod generate;

pub use generate::{FileOutcome, GenerationReport, Generator};
