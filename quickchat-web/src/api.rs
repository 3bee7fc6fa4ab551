use crate::config::FrontendConfig;
use crate::models::auth::{LoginRequest, LoginResponse};
use once_cell::unsync::OnceCell;
use reqwest::Client;
use std::fmt;

thread_local! {
    static SHARED_CLIENT: OnceCell<AuthClient> = OnceCell::new();
}

/// Failure of a call against the authentication endpoint.
///
/// Callers classify against this closed set instead of inspecting the
/// HTTP library's error shape. A request that never produced a response
/// is `Network`, so there is no response object to dereference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete, or the response body was unreadable.
    Network,
    /// The server answered with a non-success status.
    Http {
        /// Numeric status code of the response.
        status: u16,
        /// Reason phrase of the status line, e.g. "Unauthorized".
        status_text: String,
    },
}

impl ApiError {
    /// Whether the server explicitly rejected the submitted credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status_text, .. } if status_text == "Unauthorized")
    }

    /// Translation key for the banner message shown to the user.
    pub fn message_key(&self) -> &'static str {
        if self.is_unauthorized() {
            "login.validation.wrong_credentials"
        } else {
            "login.validation.unknown"
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network error"),
            Self::Http {
                status,
                status_text,
            } => write!(f, "HTTP {status} {status_text}"),
        }
    }
}

/// Lightweight API client for Quickchat auth interactions.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The client shared by the whole page.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("login");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        response.json().await.map_err(|_| ApiError::Network)
    }
}
