//! Client-side authentication state with an explicit lifecycle.
//!
//! - `load` picks up a stored token and checks it against `/api/user`
//! - `refresh` re-checks the current token
//! - `login` / `register` store the new token and attach it to the client
//! - `logout` forgets the token everywhere
//!
//! A token the backend does not accept is cleared and the session falls back
//! to logged out; that is not reported as an error.

use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::UserProfile;
use crate::token_store::TokenStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// Message of the last failed login or registration.
    pub error: Option<String>,
}

pub struct Session<S: TokenStore> {
    api: ApiClient,
    store: S,
    state: SessionState,
}

impl<S: TokenStore> Session<S> {
    pub fn new(mut api: ApiClient, store: S) -> Self {
        api.clear_token();
        Self {
            api,
            store,
            state: SessionState::default(),
        }
    }

    /// The client to use for other calls; it carries the session token.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.token.is_some() && self.state.user.is_some()
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Reads the stored token, if any, and validates it. Returns whether the
    /// session ended up authenticated.
    pub async fn load(&mut self) -> Result<bool, ClientError> {
        match self.store.load()? {
            Some(token) => {
                debug!("Found stored session token");
                self.api.set_token(token.clone());
                self.state.token = Some(token);
                self.refresh().await
            }
            None => {
                self.forget();
                Ok(false)
            }
        }
    }

    /// Re-validates the current token against the backend. Any failure drops it.
    pub async fn refresh(&mut self) -> Result<bool, ClientError> {
        if self.state.token.is_none() {
            return Ok(false);
        }
        match self.api.current_user().await {
            Ok(user) => {
                self.state.user = Some(user);
                Ok(true)
            }
            Err(e) => {
                warn!("Stored session token rejected, logging out: {e}");
                self.store.clear()?;
                self.forget();
                Ok(false)
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&UserProfile, ClientError> {
        self.state.error = None;
        let result = self.api.login(email, password).await;
        self.adopt(result)
    }

    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<&UserProfile, ClientError> {
        self.state.error = None;
        let result = self.api.register(username, email, password).await;
        self.adopt(result)
    }

    /// Clears the stored token and the in-memory session.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.forget();
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    fn adopt(
        &mut self,
        result: Result<(String, UserProfile), ClientError>,
    ) -> Result<&UserProfile, ClientError> {
        let (token, user) = match result {
            Ok(granted) => granted,
            Err(e) => {
                self.state.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.store.save(&token)?;
        self.api.set_token(token.clone());
        self.state.token = Some(token);
        info!(username = %user.username, "Session started");
        Ok(self.state.user.insert(user))
    }

    fn forget(&mut self) {
        self.api.clear_token();
        self.state.token = None;
        self.state.user = None;
    }
}
