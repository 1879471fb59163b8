use gloo_storage::{LocalStorage, Storage};

const DEFAULT_API_BASE: &str = "/api";
const TOKEN_KEY: &str = "auth_token";

/// Connection settings for the order API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Settings baked in at build time through `ORDER_API_BASE`.
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("ORDER_API_BASE"))
    }

    pub fn with_base(base: Option<&str>) -> Self {
        let base = base
            .map(|b| b.trim().trim_end_matches('/'))
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        Self {
            base_url: base.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Session token left in local storage by the login screen.
    pub fn auth_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
