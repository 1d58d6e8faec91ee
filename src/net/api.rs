//! HTTP helper for the chat endpoint.
//!
//! Client-side (csr): a real form-encoded POST via `gloo-net`.
//! Non-browser builds and tests: the request is unavailable and reports a
//! transport failure.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and unusable bodies come back as `ChatError`; the chat
//! session turns either into an apology message. The HTTP status is not
//! inspected: only the body shape decides success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatReply};

/// Parse a reply body. Anything but a JSON object with a non-empty
/// `response` string is malformed.
///
/// # Errors
///
/// Returns `ChatError::MalformedResponse` for non-JSON bodies, non-object
/// JSON (arrays, strings, numbers), a missing or non-string `response`, or
/// an empty reply.
pub fn parse_chat_reply(body: &str) -> Result<ChatReply, ChatError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ChatError::MalformedResponse(e.to_string()))?;
    let serde_json::Value::Object(fields) = value else {
        return Err(ChatError::MalformedResponse("reply is not a JSON object".to_owned()));
    };
    match fields.get("response") {
        Some(serde_json::Value::String(text)) if !text.is_empty() => {
            Ok(ChatReply { response: text.clone() })
        }
        Some(serde_json::Value::String(_)) => {
            Err(ChatError::MalformedResponse("empty response".to_owned()))
        }
        Some(_) => Err(ChatError::MalformedResponse("response is not a string".to_owned())),
        None => Err(ChatError::MalformedResponse("missing response field".to_owned())),
    }
}

/// POST `message=<text>` to `endpoint` and parse the JSON reply.
///
/// # Errors
///
/// Returns `ChatError::Transport` if the request cannot be built or sent,
/// and `ChatError::MalformedResponse` if the body is unusable.
pub async fn send_chat_message(endpoint: &str, message: &str) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "csr")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|e| ChatError::Transport(format!("{e:?}")))?;
        params.append("message", message);

        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(params)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        log::debug!("chat reply status={}", resp.status());

        let body = resp
            .text()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;
        parse_chat_reply(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, message);
        Err(ChatError::Transport("not available on server".to_owned()))
    }
}
