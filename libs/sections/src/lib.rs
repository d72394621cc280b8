//! Section parser: turns free-form AI answers into titled sections with named fields.
//!
//! The upstream model answers as a numbered list ("1. Title ... Description: ...").
//! Parsing is two steps: `split_into_sections` cuts the text at each numbered item,
//! then `parse_chunk` pulls a title and the fields named by a `MarkerSet` out of each chunk.
//!
//! Parsing never fails. Missing markers produce absent fields, badly ordered markers
//! produce empty ones. Only building a `MarkerSet` can return an error.

pub mod markers;
pub mod model;
pub mod parse;
pub mod split;

pub use markers::{MarkerSet, MarkerSpec, SectionError};
pub use model::{Field, Section};
pub use parse::{parse_chunk, parse_sections, EMPHASIS};
pub use split::{split_into_sections, RawChunk};
