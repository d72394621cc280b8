//! Advisor: builds the counselor prompts, calls the text generator and parses the answer.

use careerpath_sections::{parse_sections, MarkerSet, Section};
use serde::Deserialize;

use crate::careers::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RESOURCES_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{COUNSELOR_SYSTEM, DETAIL_INSTRUCTION};
use crate::llm_client::TextGenerator;

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "beginner";

/// A list field the form may send either as an array or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<String>),
    Text(String),
}

impl Default for StringList {
    fn default() -> Self {
        StringList::Items(Vec::new())
    }
}

impl StringList {
    /// Renders the list the way it appears in the prompt.
    pub fn to_prompt_text(&self) -> String {
        match self {
            StringList::Items(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            StringList::Text(text) => text.trim().to_string(),
        }
    }
}

/// Free text from the model plus its parsed sections.
#[derive(Debug, Clone)]
pub struct Advice {
    pub raw: String,
    pub sections: Vec<Section>,
}

/// Substitutes every `{name}` placeholder in one pass over `template`.
/// Values are never rescanned, so placeholder text inside user input stays literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find(|(name, _)| {
            tail.strip_prefix(name)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn recommendation_prompt(
    skills: &StringList,
    interests: &StringList,
    experience_level: &str,
) -> String {
    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("detail", DETAIL_INSTRUCTION),
            ("skills", &skills.to_prompt_text()),
            ("interests", &interests.to_prompt_text()),
            ("experience_level", experience_level),
        ],
    )
}

pub fn resources_prompt(career: &str) -> String {
    fill_template(
        RESOURCES_PROMPT_TEMPLATE,
        &[("detail", DETAIL_INSTRUCTION), ("career", career)],
    )
}

/// Asks the model for career recommendations.
pub async fn recommend_careers(
    llm: &dyn TextGenerator,
    skills: &StringList,
    interests: &StringList,
    experience_level: &str,
) -> Result<Advice, AppError> {
    let prompt = recommendation_prompt(skills, interests, experience_level);
    let raw = llm
        .generate(&prompt, COUNSELOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Career recommendation failed: {e}")))?;
    let sections = parse_sections(&raw, &MarkerSet::career_recommendations());
    Ok(Advice { raw, sections })
}

/// Asks the model for learning resources for one career path.
pub async fn find_resources(llm: &dyn TextGenerator, career: &str) -> Result<Advice, AppError> {
    let prompt = resources_prompt(career);
    let raw = llm
        .generate(&prompt, COUNSELOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Learning resource lookup failed: {e}")))?;
    let sections = parse_sections(&raw, &MarkerSet::learning_resources());
    Ok(Advice { raw, sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording {
        prompts: Mutex<Vec<String>>,
        answer: Result<String, ()>,
    }

    #[async_trait]
    impl TextGenerator for Recording {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    #[test]
    fn test_string_list_accepts_array_or_text() {
        let items: StringList = serde_json::from_str(r#"["Rust", " SQL "]"#).unwrap();
        assert_eq!(items.to_prompt_text(), "Rust, SQL");

        let text: StringList = serde_json::from_str(r#""Rust, SQL""#).unwrap();
        assert_eq!(text.to_prompt_text(), "Rust, SQL");
    }

    #[test]
    fn test_recommendation_prompt_fills_every_placeholder() {
        let prompt = recommendation_prompt(
            &StringList::Items(vec!["Python".to_string(), "Statistics".to_string()]),
            &StringList::Text("puzzles".to_string()),
            "intermediate",
        );
        assert!(prompt.contains("Skills: Python, Statistics"));
        assert!(prompt.contains("Interests: puzzles"));
        assert!(prompt.contains("Experience Level: intermediate"));
        assert!(prompt.contains(DETAIL_INSTRUCTION));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_placeholders_in_user_input_stay_literal() {
        let prompt = recommendation_prompt(
            &StringList::Text("{interests} and {career}".to_string()),
            &StringList::Text("chess".to_string()),
            "{skills}",
        );
        assert!(prompt.contains("Skills: {interests} and {career}"));
        assert!(prompt.contains("Interests: chess"));
        assert!(prompt.contains("Experience Level: {skills}"));

        let prompt = resources_prompt("{detail}");
        assert!(prompt.ends_with("Career path: {detail}"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_braces() {
        assert_eq!(
            fill_template("a {x} {y} {", &[("x", "1")]),
            "a 1 {y} {"
        );
    }

    #[test]
    fn test_resources_prompt_names_marker_labels() {
        let prompt = resources_prompt("Data Scientist");
        assert!(prompt.contains("Career path: Data Scientist"));
        for label in MarkerSet::learning_resources().labels() {
            assert!(prompt.contains(label), "prompt should mention {label}");
        }
    }

    #[tokio::test]
    async fn test_recommend_careers_parses_answer() {
        let llm = Recording {
            prompts: Mutex::new(Vec::new()),
            answer: Ok("1. Nurse\nDescription: Cares.\nWhy it fits: Kind.".to_string()),
        };
        let advice = recommend_careers(
            &llm,
            &StringList::default(),
            &StringList::default(),
            DEFAULT_EXPERIENCE_LEVEL,
        )
        .await
        .unwrap();

        assert_eq!(advice.sections.len(), 1);
        assert_eq!(advice.sections[0].title, "Nurse");
        assert_eq!(advice.sections[0].field("Why it fits"), Some("Kind."));
        assert_eq!(llm.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_llm_error() {
        let llm = Recording {
            prompts: Mutex::new(Vec::new()),
            answer: Err(()),
        };
        let err = find_resources(&llm, "Nurse").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
