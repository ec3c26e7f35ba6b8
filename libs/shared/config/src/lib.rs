use std::env;
use tracing::warn;

/// Default number of appointments fetched per page when a listing or
/// conflict check has to scan client-side.
pub const DEFAULT_PAGE_SIZE: i32 = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub console_api_url: String,
    pub console_api_page_size: i32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            console_api_url: env::var("CONSOLE_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CONSOLE_API_URL not set, using empty value");
                    String::new()
                }),
            console_api_page_size: env::var("CONSOLE_API_PAGE_SIZE")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    /// Build a config pointing at an explicit base URL. Used by tests and
    /// by embedders that resolve the endpoint themselves.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            console_api_url: base_url.into(),
            console_api_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.console_api_url.is_empty()
    }
}
