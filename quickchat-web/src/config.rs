//! Frontend configuration module
//!
//! This module provides configuration for frontend-specific URLs and settings.

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the Quickchat API
    pub api_base_url: String,
    /// URL of the account registration page
    pub signup_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("QUICKCHAT_API_URL").unwrap_or("/api").to_string(),
            signup_url: option_env!("QUICKCHAT_SIGNUP_URL")
                .unwrap_or("/signup")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the signup page URL
    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.signup_url.is_empty());
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url().starts_with('/') || config.api_base_url().starts_with("http"));
        assert!(config.signup_url().starts_with('/') || config.signup_url().starts_with("http"));
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
