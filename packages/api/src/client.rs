//! HTTP plumbing shared by every endpoint wrapper.

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Handle to one backend: base URL, connection pool, and the bearer token.
///
/// Cheap to clone; all clones share the token, which is written only at login
/// and logout. Every request attaches `Authorization: Bearer <token>` when a
/// token is present, mirroring the request interceptor the portals always had.
#[derive(Clone, Debug)]
pub struct Api {
    base: String,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl Api {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install or drop the bearer token. `None` at logout.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = self.token.read().unwrap().as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and decode a JSON body, mapping failures into [`ApiError`].
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), extract_detail(&body)))
        }
    }

    /// Send a request whose response body we do not care about.
    pub(crate) async fn execute_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), extract_detail(&body)))
        }
    }
}

/// Pull a human-readable detail out of an error body.
///
/// Both backends answer errors as `{"detail": "..."}` or `{"error": "..."}`;
/// anything else falls back to the raw text.
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let api = Api::new("http://localhost:8000/api/");
        assert_eq!(api.base, "http://localhost:8000/api");
    }

    #[test]
    fn test_token_shared_across_clones() {
        let api = Api::new("http://localhost:8000/api");
        let clone = api.clone();
        assert!(!clone.has_token());
        api.set_token(Some("tok".to_string()));
        assert!(clone.has_token());
        clone.set_token(None);
        assert!(!api.has_token());
    }

    #[test]
    fn test_extract_detail_prefers_json_keys() {
        assert_eq!(extract_detail(r#"{"detail":"No seats left"}"#), "No seats left");
        assert_eq!(extract_detail(r#"{"error":"Login failed"}"#), "Login failed");
        assert_eq!(extract_detail("plain text body\n"), "plain text body");
        assert_eq!(extract_detail(r#"{"other":1}"#), r#"{"other":1}"#);
    }
}
