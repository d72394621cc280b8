use std::sync::Arc;

use crate::auth::password::PasswordService;
use crate::auth::store::UserStore;
use crate::auth::tokens::TokenKeys;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    /// Account storage. PgUserStore when DATABASE_URL is set, MemoryUserStore otherwise.
    pub users: Arc<dyn UserStore>,
    pub passwords: PasswordService,
    pub tokens: TokenKeys,
}
