//! Structured API failures and their user-facing messages.
//!
//! ERROR HANDLING
//! ==============
//! Every adapter call fails with an `ApiError`. Views never inspect transport
//! details themselves; they call `error_message` (or a flow-specific variant)
//! and render the resulting string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a request was sent but no response arrived.
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Response {
        status: u16,
        status_text: String,
        /// Human-readable `detail` extracted from the JSON body, if any.
        detail: Option<String>,
    },

    /// The request never produced a response (network down, CORS, DNS).
    #[error("no response received: {0}")]
    NoResponse(String),

    /// Something failed on the client before or after the exchange.
    #[error("{0}")]
    Client(String),
}

impl ApiError {
    /// Build a `Response` error from a status line and raw body text.
    pub fn from_response(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        Self::Response { status, status_text: status_text.into(), detail: extract_detail(body) }
    }

    /// Server-provided detail, when the server supplied a non-empty one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Response { detail: Some(detail), .. } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Pull the `detail` message out of a JSON error body.
///
/// Accepts both `{"detail": "text"}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `"; "`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .filter(|msg| !msg.trim().is_empty())
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}

/// Derive the message shown to the user for a failed call.
///
/// Precedence: server detail, then HTTP status text, then the fixed
/// connectivity message, then the raw client-side message. `fallback` covers
/// the cases where the chosen source is empty.
pub fn error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Response { status_text, .. } => err
            .detail()
            .map(str::to_owned)
            .or_else(|| non_empty(status_text))
            .unwrap_or_else(|| fallback.to_owned()),
        ApiError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_owned(),
        ApiError::Client(message) => non_empty(message).unwrap_or_else(|| fallback.to_owned()),
    }
}

/// Message for a failed registration submit: detail or the generic fallback.
/// Status text is not consulted.
pub fn registration_error_message(err: &ApiError) -> String {
    match err {
        ApiError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_owned(),
        _ => err.detail().map_or_else(|| "Registration failed".to_owned(), str::to_owned),
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
