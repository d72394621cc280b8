use std::collections::BTreeMap;

use careerpath_sections::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

/// Career recommendations: the model's text and its parsed sections.
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub raw: String,
    pub sections: Vec<Section>,
}

/// Learning resources for one career: the model's text and its parsed sections.
#[derive(Debug, Clone)]
pub struct Resources {
    pub career: String,
    pub raw: String,
    pub sections: Vec<Section>,
}

pub type CareerCategories = BTreeMap<String, Vec<String>>;

// ────────────────────────────────────────────────────────────────────────────
// Wire bodies
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct ResourcesBody<'a> {
    pub career: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterBody<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationsReply {
    pub recommendations: String,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourcesReply {
    pub resources: String,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesReply {
    pub categories: CareerCategories,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthReply {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserReply {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_request_uses_camel_case() {
        let request = AssessmentRequest {
            skills: vec!["Rust".to_string()],
            interests: vec![],
            experience_level: "beginner".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["experienceLevel"], "beginner");
        assert_eq!(json["skills"][0], "Rust");
    }
}
