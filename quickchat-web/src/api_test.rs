//! Tests for the auth API client
//!
//! Validates client construction, URL joining, wire formats, and error
//! classification for the login call.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, AuthClient};
    use crate::models::auth::{LoginRequest, LoginResponse};

    /// Tests API client creation and URL joining
    #[test]
    fn test_api_url_joins_base_and_path() {
        let client = AuthClient::new("http://localhost:8080/api");
        assert_eq!(client.api_url("login"), "http://localhost:8080/api/login");
        assert_eq!(client.api_url("/login"), "http://localhost:8080/api/login");
    }

    /// Tests trailing slashes on the base URL are not doubled
    #[test]
    fn test_api_url_trims_trailing_slash() {
        let client = AuthClient::new("/api/");
        assert_eq!(client.api_url("login"), "/api/login");
    }

    /// Tests the login request wire format
    #[test]
    fn test_login_request_serializes_as_json_object() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "hunter2000".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "admin", "password": "hunter2000"})
        );
    }

    /// Tests the session payload wire format
    #[test]
    fn test_login_response_deserializes_from_json() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"tok-123","username":"admin"}"#).unwrap();
        assert_eq!(response.token, "tok-123");
        assert_eq!(response.username, "admin");
    }

    /// Tests classification of an explicit credential rejection
    #[test]
    fn test_unauthorized_maps_to_wrong_credentials() {
        let err = ApiError::Http {
            status: 401,
            status_text: "Unauthorized".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.message_key(), "login.validation.wrong_credentials");
    }

    /// Tests classification of other server failures
    #[test]
    fn test_server_error_maps_to_unknown() {
        let err = ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.message_key(), "login.validation.unknown");
    }

    /// Tests classification of a failure with no response at all
    #[test]
    fn test_network_error_maps_to_unknown() {
        let err = ApiError::Network;
        assert!(!err.is_unauthorized());
        assert_eq!(err.message_key(), "login.validation.unknown");
    }

    /// Tests the console-facing rendering of failures
    #[test]
    fn test_error_display() {
        let err = ApiError::Http {
            status: 401,
            status_text: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401 Unauthorized");
        assert_eq!(ApiError::Network.to_string(), "network error");
    }

    /// Tests that status text comparison is exact
    #[test]
    fn test_unauthorized_status_text_comparison_is_exact() {
        let err = ApiError::Http {
            status: 401,
            status_text: "unauthorized".to_string(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.message_key(), "login.validation.unknown");
    }
}
