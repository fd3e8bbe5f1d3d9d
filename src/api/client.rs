//! HTTP transport for the issue-tracker API.
//!
//! Wraps a base URL, attaches the bearer token from the shared session
//! state (read at call time, never cached at construction), and maps
//! non-2xx responses to a typed error carrying the server's message.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::session::SharedSession;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's error envelope message
    /// or `HTTP <status>` when the body was unusable.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body did not decode to the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub struct HttpClient {
    base_url: String,
    session: SharedSession,
}

impl HttpClient {
    pub fn new(base_url: &str, session: SharedSession) -> Self {
        HttpClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("GET", path, None, &[])
    }

    pub fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request("POST", path, Some(encode_body(body)?), &[])
    }

    pub fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request("PATCH", path, Some(encode_body(body)?), &[])
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request("DELETE", path, None, &[])
    }

    /// Plain-text GET, for the health endpoint.
    pub fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let resp = self.send("GET", path, None, &[])?;
        resp.into_string()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// One request, one response. `extra_headers` are applied last and
    /// win over the defaults on conflict.
    pub fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body, extra_headers)?;
        resp.into_json()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<ureq::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut req = ureq::request(method, &url).set("Content-Type", "application/json");
        if let Some(token) = self.token() {
            req = req.set("Authorization", &format!("Bearer {}", token));
        }
        for (name, value) in extra_headers {
            req = req.set(name, value);
        }

        tracing::debug!(method, path, "api request");
        let result = match body {
            Some(value) => req.send_json(value),
            None => req.call(),
        };

        match result {
            Ok(resp) => {
                tracing::debug!(method, path, status = resp.status(), "api response");
                Ok(resp)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                tracing::debug!(method, path, status, "api error response");
                Err(ApiError::Status {
                    status,
                    message: error_message(status, &body),
                })
            }
            Err(err) => Err(ApiError::Transport(err.to_string())),
        }
    }

    fn token(&self) -> Option<String> {
        self.session.read().unwrap().token.clone()
    }
}

fn encode_body(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Server errors arrive as `{"error": "message"}`, or as
/// `{"error": {field: message, ...}}` for validation failures. Anything
/// else falls back to the bare status code.
fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    match parsed.as_ref().and_then(|v| v.get("error")) {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(fields)) => {
            let mut parts: Vec<String> = fields
                .iter()
                .map(|(field, msg)| match msg {
                    Value::String(text) => format!("{}: {}", field, text),
                    other => format!("{}: {}", field, other),
                })
                .collect();
            parts.sort();
            parts.join("; ")
        }
        _ => format!("HTTP {}", status),
    }
}
