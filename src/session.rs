use serde::Deserialize;

const ACCESS_KEY: &str = "access_token";
const REFRESH_KEY: &str = "refresh_token";

/// Token pair returned by the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// The signed-in state. Tokens live in localStorage so a reload keeps the
/// user signed in; `clear` is the only way they leave. The session is
/// handed to the API gateway explicitly, never read from ambient scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    pub fn from_tokens(tokens: TokenPair) -> Self {
        Session {
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
        }
    }

    /// Restore whatever the last save left behind.
    pub fn load() -> Self {
        Session {
            access_token: read(ACCESS_KEY),
            refresh_token: read(REFRESH_KEY),
        }
    }

    pub fn save(&self) {
        if let Some(storage) = storage() {
            if let Some(token) = &self.access_token {
                let _ = storage.set_item(ACCESS_KEY, token);
            }
            if let Some(token) = &self.refresh_token {
                let _ = storage.set_item(REFRESH_KEY, token);
            }
        }
    }

    pub fn clear() {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(ACCESS_KEY);
            let _ = storage.remove_item(REFRESH_KEY);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok().flatten())
}
