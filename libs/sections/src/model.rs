use serde::{Deserialize, Serialize};

/// A labeled piece of text captured from a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub body: String,
}

/// One parsed entry of an AI answer: a recommended career or a learning resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub fields: Vec<Field>,
    /// Emphasis-free text below the title that `fields` were captured from.
    /// Empty for sections built by hand or received over the wire.
    #[serde(skip)]
    pub(crate) source: String,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.fields == other.fields
    }
}

impl Eq for Section {}

impl Section {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
            source: String::new(),
        }
    }

    /// Body of the field with this label. `None` means the marker never
    /// appeared, which is not the same as `Some("")`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.body.as_str())
    }

    pub fn has_field(&self, label: &str) -> bool {
        self.field(label).is_some()
    }

    /// Fields worth a heading on a card: present and non-empty.
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.body.is_empty())
    }

    /// Writes the section back out as text the parser accepts.
    ///
    /// A parsed section is written as its title over the text its fields came
    /// from, so parsing the output again yields the same fields. Otherwise each
    /// field becomes a `Label: body` line, skipping any whose line already
    /// appears inside an earlier body.
    pub fn to_text(&self) -> String {
        if !self.source.is_empty() {
            return format!("{}\n{}", self.title, self.source);
        }

        let mut out = self.title.clone();
        for field in &self.fields {
            let line = format!("{}: {}", field.label, field.body);
            if out.contains(&line) {
                continue;
            }
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        Section::new(
            "Data Scientist",
            vec![
                Field {
                    label: "Description".to_string(),
                    body: "Works with data.".to_string(),
                },
                Field {
                    label: "Why it fits".to_string(),
                    body: String::new(),
                },
            ],
        )
    }

    #[test]
    fn test_field_distinguishes_absent_from_empty() {
        let section = sample();
        assert_eq!(section.field("Description"), Some("Works with data."));
        assert_eq!(section.field("Why it fits"), Some(""));
        assert_eq!(section.field("How to prepare"), None);
        assert!(!section.has_field("How to prepare"));
    }

    #[test]
    fn test_visible_fields_skip_empty_bodies() {
        let section = sample();
        let labels: Vec<_> = section.visible_fields().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Description"]);
    }

    #[test]
    fn test_to_text_writes_title_then_fields() {
        assert_eq!(
            sample().to_text(),
            "Data Scientist\nDescription: Works with data.\nWhy it fits: "
        );
    }

    #[test]
    fn test_to_text_skips_field_already_inside_earlier_body() {
        let section = Section::new(
            "Nurse",
            vec![
                Field {
                    label: "Description".to_string(),
                    body: "Cares.\nHow to prepare: Study.".to_string(),
                },
                Field {
                    label: "How to prepare".to_string(),
                    body: "Study.".to_string(),
                },
            ],
        );
        assert_eq!(section.to_text(), "Nurse\nDescription: Cares.\nHow to prepare: Study.");
    }

    #[test]
    fn test_equality_ignores_source_text() {
        let mut parsed = sample();
        parsed.source = "Description: Works with data.\nWhy it fits:".to_string();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_serializes_as_title_and_field_list() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["title"], "Data Scientist");
        assert_eq!(json["fields"][0]["label"], "Description");
        assert_eq!(json["fields"][0]["body"], "Works with data.");
        assert!(json.get("source").is_none());
    }
}
