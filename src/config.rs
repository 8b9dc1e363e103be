//! Application configuration management.
//!
//! All configuration comes from environment variables, read once at process
//! start and passed to handlers through the application state. Every field
//! has a default so the process still boots with an incomplete environment;
//! handlers that depend on a missing value degrade to empty-string
//! substitutions instead of failing at startup.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "3000")]
    pub web_server_port: u16,

    /// 🔒 SENSITIVE: Token expected during the webhook verification handshake.
    /// Must match the value configured in the Meta app dashboard.
    #[envconfig(default = "")]
    pub verify_token: String,

    /// Instagram app ID used as the OAuth client id (SEMI-SENSITIVE)
    #[envconfig(default = "")]
    pub instagram_app_id: String,

    /// 🔒 SENSITIVE: Instagram app secret used as the OAuth client secret
    #[envconfig(default = "")]
    pub instagram_app_secret: String,

    /// Public base URL of this app (NON-SENSITIVE)
    /// Example: "https://relay.example.com"
    #[envconfig(default = "")]
    pub app_url: String,

    /// 🔒 SENSITIVE: Bearer token for outbound Graph API message sends
    #[envconfig(default = "")]
    pub access_token: String,

    /// Comma-separated pool of recipient IGSIDs for outbound messages
    /// (SEMI-SENSITIVE)
    #[envconfig(default = "")]
    pub recipient_ids: String,

    /// OAuth authorization-code exchange endpoint (NON-SENSITIVE)
    /// Overridable so tests can point at a stubbed upstream.
    #[envconfig(default = "https://api.instagram.com/oauth/access_token")]
    pub oauth_access_token_endpoint: String,

    /// Long-lived token exchange endpoint (NON-SENSITIVE)
    #[envconfig(default = "https://graph.instagram.com/access_token")]
    pub long_lived_token_endpoint: String,

    /// Graph API endpoint for sending messages (NON-SENSITIVE)
    #[envconfig(default = "https://graph.instagram.com/v20.0/me/messages")]
    pub graph_messages_endpoint: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Redirect URI registered with the Instagram app, used in the
    /// authorization-code exchange
    pub fn redirect_uri(&self) -> String {
        format!("{base}/instagram-callback", base = self.app_url)
    }

    /// Parses the configured comma-separated recipient pool
    pub fn recipient_pool(&self) -> Vec<String> {
        self.recipient_ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Builds a fully-populated config for tests
    pub fn test_config() -> AppConfig {
        AppConfig {
            env: "local".into(),
            web_server_port: 3000,
            verify_token: "secret-token".into(),
            instagram_app_id: "app-id".into(),
            instagram_app_secret: "app-secret".into(),
            app_url: "http://localhost:3000".into(),
            access_token: "bearer-token".into(),
            recipient_ids: "111,222".into(),
            oauth_access_token_endpoint: "https://api.instagram.com/oauth/access_token".into(),
            long_lived_token_endpoint: "https://graph.instagram.com/access_token".into(),
            graph_messages_endpoint: "https://graph.instagram.com/v20.0/me/messages".into(),
        }
    }

    #[test]
    fn test_recipient_pool_parsing() {
        let mut config = test_config();
        config.recipient_ids = " 111, 222 ,,333".into();
        assert_eq!(config.recipient_pool(), vec!["111", "222", "333"]);
    }

    #[test]
    fn test_recipient_pool_empty() {
        let mut config = test_config();
        config.recipient_ids = "".into();
        assert!(config.recipient_pool().is_empty());
    }

    #[test]
    fn test_redirect_uri() {
        let config = test_config();
        assert_eq!(
            config.redirect_uri(),
            "http://localhost:3000/instagram-callback"
        );
    }
}
