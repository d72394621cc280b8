//! HTTP client for the CareerPath API.
//!
//! While a token is set every request carries `Authorization: Bearer <token>`.
//! One request per call; nothing is retried.

use std::time::Duration;

use careerpath_sections::{parse_sections, MarkerSet};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::models::{
    AssessmentRequest, AuthReply, CareerCategories, CategoriesReply, LoginBody, Recommendations,
    RecommendationsReply, RegisterBody, Resources, ResourcesBody, ResourcesReply, UserProfile,
    UserReply,
};

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ClientError> {
        let response = self.request(Method::GET, path).send().await?;
        read_reply(response, fallback).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        read_reply(response, fallback).await
    }

    /// POST /api/assessment. Uses the server's `sections`; a reply without them
    /// is parsed locally with the career recommendation markers.
    pub async fn assess(&self, request: &AssessmentRequest) -> Result<Recommendations, ClientError> {
        let reply: RecommendationsReply = self
            .post("/api/assessment", request, "Failed to get recommendations")
            .await?;
        let sections = reply.sections.unwrap_or_else(|| {
            parse_sections(&reply.recommendations, &MarkerSet::career_recommendations())
        });
        Ok(Recommendations {
            raw: reply.recommendations,
            sections,
        })
    }

    /// POST /api/resources. Uses the server's `sections`, else parses with the
    /// learning resource markers.
    pub async fn resources(&self, career: &str) -> Result<Resources, ClientError> {
        let reply: ResourcesReply = self
            .post(
                "/api/resources",
                &ResourcesBody { career },
                "Failed to get learning resources",
            )
            .await?;
        let sections = reply
            .sections
            .unwrap_or_else(|| parse_sections(&reply.resources, &MarkerSet::learning_resources()));
        Ok(Resources {
            career: career.to_string(),
            raw: reply.resources,
            sections,
        })
    }

    /// GET /api/career-categories
    pub async fn career_categories(&self) -> Result<CareerCategories, ClientError> {
        let reply: CategoriesReply = self
            .get("/api/career-categories", "Failed to load career categories")
            .await?;
        Ok(reply.categories)
    }

    /// POST /api/login. Returns the new token and the account; does not store the token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, UserProfile), ClientError> {
        let reply: AuthReply = self
            .post("/api/login", &LoginBody { email, password }, "Login failed")
            .await?;
        Ok((reply.token, reply.user))
    }

    /// POST /api/register. Returns the new token and the account; does not store the token.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(String, UserProfile), ClientError> {
        let reply: AuthReply = self
            .post(
                "/api/register",
                &RegisterBody {
                    username,
                    email,
                    password,
                },
                "Registration failed",
            )
            .await?;
        Ok((reply.token, reply.user))
    }

    /// GET /api/user with the current token.
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        let reply: UserReply = self.get("/api/user", "Failed to load user").await?;
        Ok(reply.user)
    }
}

/// Unwraps the `{success, ..., error}` envelope. A failed call keeps the
/// backend's `error` text; `fallback` covers bodies that carry none.
async fn read_reply<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    debug!(status = status.as_u16(), bytes = text.len(), "Received API reply");

    let body: Option<Value> = serde_json::from_str(&text).ok();
    let success = body
        .as_ref()
        .and_then(|b| b.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !status.is_success() || !success {
        let message = body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = body.ok_or_else(|| ClientError::Decode("response is not JSON".to_string()))?;
    serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_assess_parses_recommendations() {
        let router = Router::new().route(
            "/api/assessment",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["experienceLevel"], "beginner");
                Json(json!({
                    "success": true,
                    "recommendations": "1. Nurse\nDescription: Cares.\nWhy it fits: Kind."
                }))
            }),
        );
        let client = ApiClient::new(spawn(router).await).unwrap();

        let result = client
            .assess(&AssessmentRequest {
                skills: vec!["empathy".to_string()],
                interests: vec![],
                experience_level: "beginner".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].title, "Nurse");
        assert_eq!(result.sections[0].field("How to prepare"), None);
    }

    #[tokio::test]
    async fn test_server_sections_take_precedence_over_local_parse() {
        let router = Router::new().route(
            "/api/resources",
            post(|| async {
                Json(json!({
                    "success": true,
                    "resources": "1. Coursera\nWhy it's great: Flexible.",
                    "sections": [{"title": "Coursera (server)", "fields": [{"label": "Why it's great", "body": "Flexible."}]}]
                }))
            }),
        );
        let client = ApiClient::new(spawn(router).await).unwrap();

        let result = client.resources("Nurse").await.unwrap();
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].title, "Coursera (server)");
        assert_eq!(result.sections[0].field("Why it's great"), Some("Flexible."));
        assert_eq!(result.raw, "1. Coursera\nWhy it's great: Flexible.");
    }

    #[tokio::test]
    async fn test_backend_error_is_surfaced_verbatim() {
        let router = Router::new().route(
            "/api/resources",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "error": "Career path is required"})),
                )
            }),
        );
        let client = ApiClient::new(spawn(router).await).unwrap();

        let err = client.resources("").await.unwrap_err();
        assert_eq!(err.to_string(), "Career path is required");
    }

    #[tokio::test]
    async fn test_success_false_with_ok_status_is_an_error() {
        let router = Router::new().route(
            "/api/career-categories",
            get(|| async { Json(json!({"success": false})) }),
        );
        let client = ApiClient::new(spawn(router).await).unwrap();

        let err = client.career_categories().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load career categories");
    }

    #[tokio::test]
    async fn test_non_json_error_body_uses_fallback() {
        let router = Router::new().route(
            "/api/login",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let client = ApiClient::new(spawn(router).await).unwrap();

        let err = client.login("a@b.c", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, .. }));
        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}")).unwrap();
        let err = client.career_categories().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), crate::error::TRANSPORT_MESSAGE);
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached_when_set() {
        let router = Router::new().route(
            "/api/user",
            get(|headers: HeaderMap| async move {
                match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                    Some("Bearer t0k3n") => (
                        StatusCode::OK,
                        Json(json!({"success": true, "user": {"username": "ada", "email": "ada@example.com"}})),
                    ),
                    _ => (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"success": false, "error": "Authentication required"})),
                    ),
                }
            }),
        );
        let mut client = ApiClient::new(spawn(router).await).unwrap();

        assert!(client.current_user().await.unwrap_err().is_unauthorized());

        client.set_token("t0k3n");
        assert_eq!(client.current_user().await.unwrap().username, "ada");

        client.clear_token();
        assert!(client.current_user().await.unwrap_err().is_unauthorized());
    }
}
