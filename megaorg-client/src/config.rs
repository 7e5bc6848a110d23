/// Client configuration
///
/// The console needs exactly one piece of configuration: where the API
/// lives. It is read from the environment, with a `.env` file honored for
/// development.
///
/// # Environment Variables
///
/// - `API_BASE_URL`: Base path of the backend API
///   (default: `http://localhost:3010/api`)

use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:3010/api";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3010/api");
    }
}
