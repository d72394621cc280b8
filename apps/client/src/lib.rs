//! Client for the CareerPath API.
//!
//! `ApiClient` speaks the HTTP endpoints and attaches the bearer token.
//! `Session` owns the login lifecycle (load, refresh, login, register, logout)
//! on top of a `TokenStore` that keeps the token between runs.
//! `form` holds the multi-step assessment form that produces an `AssessmentRequest`.

pub mod api;
pub mod error;
pub mod form;
pub mod models;
pub mod session;
pub mod token_store;

pub use api::ApiClient;
pub use error::ClientError;
pub use form::{AssessmentForm, ExperienceEntry, FormError, FormStep, FormWizard, Preferences};
pub use models::{AssessmentRequest, Recommendations, Resources, UserProfile};
pub use session::{Session, SessionState};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
