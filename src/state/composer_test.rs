use super::*;

// =============================================================
// send_enabled
// =============================================================

#[test]
fn send_enabled_requires_non_blank_draft() {
    assert!(!send_enabled("", false));
    assert!(!send_enabled("   \n\t", false));
    assert!(send_enabled(" hi ", false));
}

#[test]
fn send_enabled_is_false_while_busy() {
    assert!(!send_enabled("hello", true));
}

#[test]
fn composer_state_default_cannot_send() {
    let state = ComposerState::default();
    assert!(state.draft.is_empty());
    assert!(!state.busy);
    assert!(!state.send_enabled());
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn quick_reply_sets_draft_verbatim_without_sending() {
    let mut state = ComposerState::default();
    state.set_draft("old text".to_owned());
    let reply = QuickReply { label: "Calm", message: "Help me calm down." };
    state.apply_quick_reply(&reply);
    assert_eq!(state.draft, "Help me calm down.");
    assert!(state.send_enabled());
    assert!(!state.busy);
}

#[test]
fn take_message_trims_and_clears() {
    let mut state = ComposerState::default();
    state.set_draft("  hello there \n".to_owned());
    assert_eq!(state.take_message().as_deref(), Some("hello there"));
    assert!(state.draft.is_empty());
}

#[test]
fn take_message_ignores_blank_draft() {
    let mut state = ComposerState::default();
    state.set_draft("   ".to_owned());
    assert_eq!(state.take_message(), None);
    assert_eq!(state.draft, "   ");
}

// =============================================================
// Keyboard + sizing
// =============================================================

#[test]
fn enter_without_shift_submits() {
    assert!(is_submit_key("Enter", false));
    assert!(!is_submit_key("Enter", true));
    assert!(!is_submit_key("a", false));
}

#[test]
fn composer_height_is_capped() {
    assert_eq!(composer_height(40, 120), 40);
    assert_eq!(composer_height(120, 120), 120);
    assert_eq!(composer_height(300, 120), 120);
}
