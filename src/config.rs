use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "config";

/// Client configuration, persisted in localStorage. The API base defaults
/// to a compile-time value so deployments can bake their own in with
/// `API_BASE_URL=... trunk build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:5000/api")
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Join a path onto the base, tolerating a trailing slash in the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

pub fn load() -> AppConfig {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str::<AppConfig>(&raw) {
                    return config;
                }
            }
        }
    }
    AppConfig::default()
}

pub fn save(config: &AppConfig) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(config) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_paths() {
        let config = AppConfig {
            api_base: "http://localhost:5000/api".to_string(),
        };
        assert_eq!(
            config.endpoint("/expenses"),
            "http://localhost:5000/api/expenses"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = AppConfig {
            api_base: "https://money.example.com/api/".to_string(),
        };
        assert_eq!(
            config.endpoint("/auth/login"),
            "https://money.example.com/api/auth/login"
        );
    }
}
