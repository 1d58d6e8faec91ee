use super::*;

#[test]
fn chat_reply_deserializes_response_field() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"hi","extra":1}"#).unwrap();
    assert_eq!(reply.response, "hi");
}

#[test]
fn fallback_text_differs_by_failure_kind() {
    let transport = ChatError::Transport("offline".to_owned());
    let malformed = ChatError::MalformedResponse("missing field".to_owned());
    assert_eq!(transport.fallback_text(), CONNECTION_FAILURE_TEXT);
    assert_eq!(malformed.fallback_text(), MALFORMED_REPLY_TEXT);
}

#[test]
fn chat_error_display_includes_detail() {
    let err = ChatError::Transport("offline".to_owned());
    assert_eq!(err.to_string(), "chat transport failed: offline");
}
