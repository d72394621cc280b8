use thiserror::Error;

/// Message shown for any failure to reach the backend.
pub const TRANSPORT_MESSAGE: &str =
    "Could not reach the server. Please check your connection and try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got an answer. The display text is a generic retry hint.
    #[error("{}", TRANSPORT_MESSAGE)]
    Transport(#[source] reqwest::Error),

    /// The backend answered with `success: false`. `message` is its `error` string.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The backend answered with something that is not the expected JSON.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Token store error: {0}")]
    Store(String),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_backend_message_verbatim() {
        let err = ClientError::Api {
            status: 400,
            message: "Career path is required".to_string(),
        };
        assert_eq!(err.to_string(), "Career path is required");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_401_is_unauthorized() {
        let err = ClientError::Api {
            status: 401,
            message: "Authentication required".to_string(),
        };
        assert!(err.is_unauthorized());
    }
}
