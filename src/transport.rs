//! HTTP+JSON transport to the procurement backend.
//!
//! Every resource service and the auth/dashboard clients share one
//! [`HttpTransport`]. Responses are handed back as raw JSON so callers can
//! unwrap the backend's per-endpoint envelopes (`{ "orders": [...] }`,
//! `{ "invoice": {...} }`, bare arrays).

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::actor_framework::FrameworkError;

/// Method and path (relative to the base URL) of one backend endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into() }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::POST, path: path.into() }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self { method: Method::PUT, path: path.into() }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::DELETE, path: path.into() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A successful backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

/// Acknowledgement returned by mutating endpoints. The backend usually sends
/// `{ "message": "..." }`, sometimes nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    pub fn from_body(body: &Value) -> Self {
        Self {
            message: body.get("message").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FrameworkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue one request. Non-2xx responses become [`FrameworkError::Rejected`]
    /// carrying the backend's `message` when it sent one.
    #[instrument(name = "http", skip(self, body), fields(route = %route))]
    pub async fn send<B>(&self, route: &Route, body: Option<&B>) -> Result<Reply, FrameworkError>
    where
        B: Serialize + ?Sized,
    {
        debug!("Sending request");
        let mut request = self.client.request(route.method.clone(), self.url(&route.path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Request did not complete");
            FrameworkError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = body.get("message").and_then(Value::as_str).map(str::to_owned);
            error!(status = status.as_u16(), message = ?message, "Backend rejected request");
            return Err(FrameworkError::Rejected { status: status.as_u16(), message });
        }

        debug!(status = status.as_u16(), "Response received");
        Ok(Reply { status: status.as_u16(), body })
    }

    pub async fn get_json(&self, path: &str) -> Result<Value, FrameworkError> {
        self.send::<()>(&Route::get(path), None).await.map(|reply| reply.body)
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Unwraps a list that the backend may send bare or inside `{ key: [...] }`.
/// A missing key or an empty body reads as an empty list.
pub fn unwrap_list<T: DeserializeOwned>(body: Value, key: Option<&str>) -> Result<Vec<T>, FrameworkError> {
    let list = match body {
        Value::Array(items) => Value::Array(items),
        Value::Null => return Ok(Vec::new()),
        Value::Object(mut map) => match key.and_then(|key| map.remove(key)) {
            Some(Value::Null) | None => return Ok(Vec::new()),
            Some(list) => list,
        },
        other => {
            return Err(FrameworkError::Decode(format!("expected a list, got {}", other)));
        }
    };
    serde_json::from_value(list).map_err(|e| FrameworkError::Decode(e.to_string()))
}

/// Unwraps a single record sent either bare or inside `{ key: {...} }`.
pub fn unwrap_item<T: DeserializeOwned>(body: Value, key: Option<&str>) -> Result<T, FrameworkError> {
    let item = match (body, key) {
        (Value::Object(mut map), Some(key)) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        (body, _) => body,
    };
    serde_json::from_value(item).map_err(|e| FrameworkError::Decode(e.to_string()))
}
