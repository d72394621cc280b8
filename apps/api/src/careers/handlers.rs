//! Axum route handlers for the careers API.

use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use careerpath_sections::Section;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::AuthUser;
use crate::careers::advisor::{find_resources, recommend_careers, StringList, DEFAULT_EXPERIENCE_LEVEL};
use crate::careers::categories::career_categories;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    #[serde(default)]
    pub skills: StringList,
    #[serde(default)]
    pub interests: StringList,
    pub experience_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub success: bool,
    pub recommendations: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
pub struct ResourcesRequest {
    #[serde(default)]
    pub career: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub success: bool,
    pub resources: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<String, Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/assessment
///
/// Generates career recommendations from the submitted skills, interests and experience level.
pub async fn handle_assessment(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let experience_level = request
        .experience_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_EXPERIENCE_LEVEL);

    info!(
        user_id = ?user.as_ref().map(|u| u.user_id),
        experience_level,
        "Generating career recommendations"
    );

    let advice = recommend_careers(
        state.llm.as_ref(),
        &request.skills,
        &request.interests,
        experience_level,
    )
    .await?;

    Ok(Json(AssessmentResponse {
        success: true,
        recommendations: advice.raw,
        sections: advice.sections,
    }))
}

/// POST /api/resources
///
/// Generates learning resources for one career path.
pub async fn handle_resources(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    payload: Result<Json<ResourcesRequest>, JsonRejection>,
) -> Result<Json<ResourcesResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let career = request.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation("Career path is required".to_string()));
    }

    info!(
        user_id = ?user.as_ref().map(|u| u.user_id),
        career,
        "Looking up learning resources"
    );

    let advice = find_resources(state.llm.as_ref(), career).await?;

    Ok(Json(ResourcesResponse {
        success: true,
        resources: advice.raw,
        sections: advice.sections,
    }))
}

/// GET /api/career-categories
pub async fn handle_career_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        success: true,
        categories: career_categories(),
    })
}
