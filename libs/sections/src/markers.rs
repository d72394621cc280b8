//! Marker definitions and the two call-site presets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parse::EMPHASIS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("Marker label cannot be empty")]
    EmptyLabel,

    #[error("Marker label '{0}' is declared more than once")]
    DuplicateLabel(String),

    #[error("Marker label '{0}' must not contain ':' or '*'")]
    ReservedCharacter(String),

    #[error("Marker '{label}' has an empty stop label")]
    EmptyStopLabel { label: String },

    #[error("Marker set must declare at least one marker")]
    NoMarkers,
}

/// One field marker: the label searched for as `label:` and the labels whose
/// occurrence ends its capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub label: String,
    pub stop_labels: Vec<String>,
}

impl MarkerSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stop_labels: Vec::new(),
        }
    }

    pub fn stop_at(mut self, label: impl Into<String>) -> Self {
        self.stop_labels.push(label.into());
        self
    }

    /// The literal text that opens this field.
    pub fn needle(&self) -> String {
        format!("{}:", self.label)
    }
}

/// A validated, ordered list of markers. Field order in parsed sections
/// follows declaration order here, not the order found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerSet {
    markers: Vec<MarkerSpec>,
}

impl MarkerSet {
    pub fn new(markers: Vec<MarkerSpec>) -> Result<Self, SectionError> {
        if markers.is_empty() {
            return Err(SectionError::NoMarkers);
        }

        let mut seen = HashSet::new();
        for marker in &markers {
            let label = marker.label.trim();
            if label.is_empty() {
                return Err(SectionError::EmptyLabel);
            }
            if label.contains(':') || label.contains(EMPHASIS) {
                return Err(SectionError::ReservedCharacter(marker.label.clone()));
            }
            if !seen.insert(marker.label.as_str()) {
                return Err(SectionError::DuplicateLabel(marker.label.clone()));
            }
            if marker.stop_labels.iter().any(|s| s.trim().is_empty()) {
                return Err(SectionError::EmptyStopLabel {
                    label: marker.label.clone(),
                });
            }
        }

        Ok(Self { markers })
    }

    /// Builds a set where each marker stops at the next one and the last runs
    /// to the end of the chunk.
    pub fn chained<I, S>(labels: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let markers = labels
            .iter()
            .enumerate()
            .map(|(i, label)| MarkerSpec {
                label: label.clone(),
                stop_labels: labels.get(i + 1).cloned().into_iter().collect(),
            })
            .collect();
        Self::new(markers)
    }

    /// Career recommendations: Description → Why it fits → How to prepare.
    pub fn career_recommendations() -> Self {
        Self {
            markers: vec![
                MarkerSpec::new("Description").stop_at("Why it fits"),
                MarkerSpec::new("Why it fits").stop_at("How to prepare"),
                MarkerSpec::new("How to prepare"),
            ],
        }
    }

    /// Learning resources: Why it's great → Specific Relevant Courses.
    pub fn learning_resources() -> Self {
        Self {
            markers: vec![
                MarkerSpec::new("Why it's great").stop_at("Specific Relevant Courses"),
                MarkerSpec::new("Specific Relevant Courses"),
            ],
        }
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|m| m.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_pass_validation() {
        let career = MarkerSet::career_recommendations();
        assert_eq!(MarkerSet::new(career.markers().to_vec()), Ok(career));

        let resources = MarkerSet::learning_resources();
        assert_eq!(MarkerSet::new(resources.markers().to_vec()), Ok(resources));
    }

    #[test]
    fn test_career_preset_chains_markers() {
        let set = MarkerSet::career_recommendations();
        let labels: Vec<_> = set.labels().collect();
        assert_eq!(labels, vec!["Description", "Why it fits", "How to prepare"]);
        assert_eq!(set.markers()[0].stop_labels, vec!["Why it fits"]);
        assert_eq!(set.markers()[1].stop_labels, vec!["How to prepare"]);
        assert!(set.markers()[2].stop_labels.is_empty());
    }

    #[test]
    fn test_chained_matches_career_preset() {
        let chained = MarkerSet::chained(["Description", "Why it fits", "How to prepare"]).unwrap();
        assert_eq!(chained, MarkerSet::career_recommendations());
    }

    #[test]
    fn test_rejects_empty_label() {
        let err = MarkerSet::new(vec![MarkerSpec::new("  ")]).unwrap_err();
        assert_eq!(err, SectionError::EmptyLabel);
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let err = MarkerSet::chained(["Description", "Description"]).unwrap_err();
        assert_eq!(err, SectionError::DuplicateLabel("Description".to_string()));
    }

    #[test]
    fn test_rejects_colon_and_emphasis_in_label() {
        assert!(matches!(
            MarkerSet::new(vec![MarkerSpec::new("Why:")]),
            Err(SectionError::ReservedCharacter(_))
        ));
        assert!(matches!(
            MarkerSet::new(vec![MarkerSpec::new("**Why**")]),
            Err(SectionError::ReservedCharacter(_))
        ));
    }

    #[test]
    fn test_rejects_empty_stop_label() {
        let err = MarkerSet::new(vec![MarkerSpec::new("Description").stop_at("")]).unwrap_err();
        assert!(matches!(err, SectionError::EmptyStopLabel { .. }));
    }

    #[test]
    fn test_rejects_empty_set() {
        assert_eq!(MarkerSet::new(vec![]), Err(SectionError::NoMarkers));
    }
}
