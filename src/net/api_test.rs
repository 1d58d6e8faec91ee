use super::*;

// =============================================================
// parse_chat_reply
// =============================================================

#[test]
fn parse_accepts_response_object() {
    assert_eq!(
        parse_chat_reply(r#"{"response":"hi"}"#),
        Ok(ChatReply { response: "hi".to_owned() })
    );
}

#[test]
fn parse_keeps_html_reply_verbatim() {
    let reply = parse_chat_reply(r#"{"response":"<b>How You're Feeling</b><br>"}"#).unwrap();
    assert_eq!(reply.response, "<b>How You're Feeling</b><br>");
}

#[test]
fn parse_rejects_missing_response_field() {
    assert!(matches!(parse_chat_reply("{}"), Err(ChatError::MalformedResponse(_))));
}

#[test]
fn parse_rejects_empty_response() {
    assert!(matches!(
        parse_chat_reply(r#"{"response":""}"#),
        Err(ChatError::MalformedResponse(_))
    ));
}

#[test]
fn parse_rejects_non_string_response() {
    assert!(matches!(
        parse_chat_reply(r#"{"response":42}"#),
        Err(ChatError::MalformedResponse(_))
    ));
}

#[test]
fn parse_rejects_html_body() {
    assert!(matches!(
        parse_chat_reply("<!DOCTYPE html><html></html>"),
        Err(ChatError::MalformedResponse(_))
    ));
}

#[test]
fn parse_rejects_array_body() {
    assert!(matches!(parse_chat_reply(r#"["hi"]"#), Err(ChatError::MalformedResponse(_))));
}

#[test]
fn parse_rejects_bare_json_string() {
    assert!(matches!(parse_chat_reply(r#""hi""#), Err(ChatError::MalformedResponse(_))));
}

#[test]
fn parse_ignores_extra_fields() {
    assert_eq!(
        parse_chat_reply(r#"{"response":"hi","emotion":"calm"}"#),
        Ok(ChatReply { response: "hi".to_owned() })
    );
}

// =============================================================
// send_chat_message outside a browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn send_without_browser_reports_transport_failure() {
    let result = futures::executor::block_on(send_chat_message("/chat", "hello"));
    assert!(matches!(result, Err(ChatError::Transport(_))));
}
