use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
///
/// Built transiently per submission attempt; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account's username.
    pub username: String,

    /// The account's password, sent in clear over the transport.
    pub password: String,
}

/// Session payload returned by the endpoint on successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token identifying the session.
    pub token: String,

    /// Username the token was issued for.
    pub username: String,
}
