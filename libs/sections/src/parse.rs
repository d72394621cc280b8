//! Field extraction inside one chunk.
//!
//! Each marker is searched on its own label and bounded by the first occurrence
//! of any of its stop labels, so fields may appear in any physical order. A stop
//! label that shows up before the marker yields an empty body instead of an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::markers::{MarkerSet, MarkerSpec};
use crate::model::{Field, Section};
use crate::split::{split_into_sections, RawChunk};

/// Emphasis character the upstream model uses for bold and italic.
pub const EMPHASIS: char = '*';

fn leading_number() -> &'static Regex {
    static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();
    LEADING_NUMBER.get_or_init(|| Regex::new(r"^[0-9]+\.\s*").expect("Invalid leading number regex"))
}

fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|&c| c != EMPHASIS).collect()
}

fn has_content(text: &str) -> bool {
    text.chars().any(|c| c != EMPHASIS && !c.is_whitespace())
}

/// Splits a chunk into its title line and the remaining body.
/// The title line is the first line carrying real content.
fn split_title(text: &str) -> (&str, &str) {
    let mut rest = text;
    loop {
        let (line, after) = match rest.find('\n') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        if has_content(line) || after.is_empty() {
            return (line, after);
        }
        rest = after;
    }
}

fn clean_title(line: &str) -> String {
    let plain = strip_emphasis(line);
    let plain = plain.trim();
    if plain.is_empty() {
        // nothing but emphasis: keep the raw marks rather than an empty title
        return line.trim().to_string();
    }
    let without_number = leading_number().replace(plain, "");
    let without_number = without_number.trim();
    if without_number.is_empty() {
        plain.to_string()
    } else {
        without_number.to_string()
    }
}

fn capture(body: &str, marker: &MarkerSpec) -> Option<String> {
    let needle = marker.needle();
    let start = body.find(&needle)? + needle.len();

    let end = marker
        .stop_labels
        .iter()
        .filter_map(|stop| body.find(&format!("{stop}:")))
        .min()
        .unwrap_or(body.len());

    if end < start {
        tracing::debug!(
            label = %marker.label,
            "Stop label precedes marker, capturing empty body"
        );
        return Some(String::new());
    }

    Some(body[start..end].trim().to_string())
}

/// Extracts the title and every marker present in `chunk`.
/// Markers that never occur are left out of `fields`. A chunk with any
/// non-whitespace text gets a non-empty title.
pub fn parse_chunk(chunk: RawChunk<'_>, markers: &MarkerSet) -> Section {
    let (title_line, rest) = split_title(chunk.as_str());
    let body = strip_emphasis(rest);

    let fields = markers
        .markers()
        .iter()
        .filter_map(|marker| {
            capture(&body, marker).map(|body| Field {
                label: marker.label.clone(),
                body,
            })
        })
        .collect();

    Section {
        title: clean_title(title_line),
        fields,
        source: body,
    }
}

/// Splits `text` into numbered chunks and parses each one.
/// Chunks holding nothing but whitespace and emphasis are skipped.
pub fn parse_sections(text: &str, markers: &MarkerSet) -> Vec<Section> {
    let sections: Vec<Section> = split_into_sections(text)
        .into_iter()
        .filter(|chunk| has_content(chunk.as_str()))
        .map(|chunk| parse_chunk(chunk, markers))
        .collect();

    tracing::debug!(sections = sections.len(), markers = markers.len(), "Parsed sections");
    sections
}
