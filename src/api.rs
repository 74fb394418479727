use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::models::{Expense, ExpensePatch, NewExpense};
use crate::session::{Session, TokenPair};

/// Gateway for every REST call the client makes. Holds the configured
/// base URL and the session whose bearer token it attaches; pages receive
/// it fully built instead of reaching for tokens themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        ApiClient {
            config: config.clone(),
            session,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair> {
        let url = self.config.endpoint("/auth/login");
        let payload = serde_json::json!({
            "username": username,
            "password": password,
        });
        let response = Request::post(&url)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            response.json().await.map_err(transport)
        } else {
            Err(fail(response).await)
        }
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<TokenPair> {
        let url = self.config.endpoint("/auth/register");
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let response = Request::post(&url)
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            response.json().await.map_err(transport)
        } else {
            Err(fail(response).await)
        }
    }

    /// GET /expenses. The server's ordering is kept as-is.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let url = self.config.endpoint("/expenses");
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            response.json().await.map_err(transport)
        } else {
            Err(fail(response).await)
        }
    }

    /// POST /expenses. A 2xx comes back with the created record,
    /// including its server-assigned id.
    pub async fn create_expense(&self, new: &NewExpense) -> Result<Expense> {
        let url = self.config.endpoint("/expenses");
        let response = self
            .authorize(Request::post(&url))
            .json(new)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            response.json().await.map_err(transport)
        } else {
            Err(fail(response).await)
        }
    }

    /// PATCH /expenses/{id}. Sends only the changed fields and returns
    /// the updated record, which replaces the row wholesale.
    pub async fn update_expense(&self, id: i64, patch: &ExpensePatch) -> Result<Expense> {
        let url = self.config.endpoint(&format!("/expenses/{id}"));
        let response = self
            .authorize(Request::patch(&url))
            .json(patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            response.json().await.map_err(transport)
        } else {
            Err(fail(response).await)
        }
    }

    /// DELETE /expenses/{id}. Any 2xx counts, no body required.
    pub async fn delete_expense(&self, id: i64) -> Result<()> {
        let url = self.config.endpoint(&format!("/expenses/{id}"));
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(fail(response).await)
        }
    }
}

fn transport(err: gloo_net::Error) -> Error {
    Error::Network(err.to_string())
}

async fn fail(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    gloo_console::error!(format!("request failed ({status}): {message}"));
    classify(status, message)
}

/// Best error message available: a `message` or `error` string in a JSON
/// body, else the raw body text, else the bare status.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

fn classify(status: u16, message: String) -> Error {
    if status == 401 {
        Error::Auth(message)
    } else {
        Error::Network(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(
            error_message(400, r#"{"message":"Missing required field: username"}"#),
            "Missing required field: username"
        );
        assert_eq!(
            error_message(404, r#"{"error":"Expense not found"}"#),
            "Expense not found"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message(500, "server exploded"), "server exploded");
        assert_eq!(error_message(502, "  "), "HTTP 502");
        assert_eq!(error_message(503, r#"{"detail":"nope"}"#), r#"{"detail":"nope"}"#);
    }

    #[test]
    fn only_401_classifies_as_auth() {
        assert!(matches!(
            classify(401, "expired".to_string()),
            Error::Auth(_)
        ));
        assert!(matches!(
            classify(404, "missing".to_string()),
            Error::Network(_)
        ));
        assert!(matches!(
            classify(400, "bad".to_string()),
            Error::Network(_)
        ));
    }
}
