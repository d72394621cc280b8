//! Chunking of a numbered answer into one slice per list item.

use std::sync::OnceLock;

use regex::Regex;

/// One numbered item of the answer, borrowed from the input and left untrimmed
/// so that the chunks of a split concatenate back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> RawChunk<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Byte offset of this chunk in the text it was split from.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

fn item_marker() -> &'static Regex {
    static ITEM_MARKER: OnceLock<Regex> = OnceLock::new();
    ITEM_MARKER.get_or_init(|| Regex::new(r"[0-9]+\.\s").expect("Invalid item marker regex"))
}

/// Splits `text` in front of every "<digits>. " marker. The marker stays at the
/// start of the chunk it opens. Blank chunks are dropped; a text without markers
/// comes back as a single chunk.
pub fn split_into_sections(text: &str) -> Vec<RawChunk<'_>> {
    // Leftmost matching means each boundary sits on the first digit of its run,
    // so "12. " is never cut between the 1 and the 2.
    let mut boundaries: Vec<usize> = item_marker().find_iter(text).map(|m| m.start()).collect();
    if boundaries.first() != Some(&0) {
        boundaries.insert(0, 0);
    }
    boundaries.push(text.len());

    let chunks: Vec<RawChunk<'_>> = boundaries
        .windows(2)
        .map(|w| RawChunk {
            text: &text[w[0]..w[1]],
            offset: w[0],
        })
        .filter(|chunk| !chunk.trimmed().is_empty())
        .collect();

    tracing::debug!(chunks = chunks.len(), bytes = text.len(), "Split answer into chunks");
    chunks
}
