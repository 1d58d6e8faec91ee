use super::*;

fn filled(identifier: &str, secret: &str, consent: bool) -> AuthForm {
    let mut form = AuthForm::default();
    form.input_identifier(identifier.to_owned());
    form.input_secret(secret.to_owned());
    form.set_consent(consent);
    form
}

// =============================================================
// Defaults + mode
// =============================================================

#[test]
fn form_starts_in_signup_mode_without_feedback() {
    let form = AuthForm::default();
    assert_eq!(form.mode, AuthMode::SignUp);
    assert_eq!(form.identifier_status, FieldStatus::Neutral);
    assert_eq!(form.secret_status, FieldStatus::Neutral);
    assert!(form.strength.is_none());
    assert!(!form.loading);
}

#[test]
fn toggle_mode_changes_copy_only() {
    let mut form = filled("a", "123", false);
    let before = form.clone();
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::SignIn);
    assert_eq!(form.mode.copy().submit_label, "Sign In");
    assert_eq!(form.identifier, before.identifier);
    assert_eq!(form.submit(), SubmitDecision::Blocked);
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::SignUp);
    assert_eq!(form.mode.copy().submit_label, "Sign Up");
}

// =============================================================
// Identifier
// =============================================================

#[test]
fn identifier_length_threshold() {
    let mut form = AuthForm::default();
    form.input_identifier("a".to_owned());
    assert!(!form.blur_identifier());
    assert_eq!(form.identifier_status, FieldStatus::Error(IDENTIFIER_TOO_SHORT));

    form.input_identifier("ab".to_owned());
    assert!(form.blur_identifier());
    assert_eq!(form.identifier_status, FieldStatus::Success);
}

#[test]
fn identifier_is_trimmed_before_checking() {
    let mut form = AuthForm::default();
    form.input_identifier("  a  ".to_owned());
    assert!(!form.blur_identifier());
}

#[test]
fn typing_short_identifier_shows_no_error() {
    let mut form = AuthForm::default();
    form.input_identifier("a".to_owned());
    assert_eq!(form.identifier_status, FieldStatus::Neutral);
}

#[test]
fn typing_clears_error_from_blur() {
    let mut form = AuthForm::default();
    form.blur_identifier();
    assert_eq!(form.identifier_status, FieldStatus::Error(IDENTIFIER_REQUIRED));
    form.input_identifier("a".to_owned());
    assert_eq!(form.identifier_status, FieldStatus::Neutral);
    form.input_identifier("ab".to_owned());
    assert_eq!(form.identifier_status, FieldStatus::Success);
}

// =============================================================
// Secret + strength
// =============================================================

#[test]
fn secret_length_threshold() {
    let mut form = AuthForm::default();
    form.input_secret("12345".to_owned());
    assert!(!form.blur_secret());
    assert_eq!(form.secret_status.message(), SECRET_TOO_SHORT);

    form.input_secret("123456".to_owned());
    assert!(form.blur_secret());
    assert_eq!(form.secret_status.css_class(), "success");
}

#[test]
fn strength_recomputed_on_every_keystroke() {
    let mut form = AuthForm::default();
    form.input_secret("abc".to_owned());
    assert_eq!(form.strength, Some(Strength::Weak));
    form.input_secret("Abcdef12!x".to_owned());
    assert_eq!(form.strength, Some(Strength::Strong));
    form.input_secret(String::new());
    assert_eq!(form.strength, None);
}

#[test]
fn strength_categories() {
    assert_eq!(strength(""), None);
    assert_eq!(strength("abcdef"), Some(Strength::Weak));
    assert_eq!(strength("abcdef1!"), Some(Strength::Medium));
    assert_eq!(strength("Abcdefgh12!"), Some(Strength::Strong));
}

#[test]
fn strength_never_drops_as_characters_are_added() {
    let target = "aB3$efghijk";
    let mut previous = None;
    for end in 1..=target.len() {
        let current = strength(&target[..end]);
        assert!(current >= previous, "strength dropped at {end}");
        previous = current;
    }
}

#[test]
fn secret_visibility_toggles() {
    let mut form = AuthForm::default();
    form.toggle_secret_visibility();
    assert!(form.secret_visible);
    form.toggle_secret_visibility();
    assert!(!form.secret_visible);
}

// =============================================================
// Submit gate
// =============================================================

#[test]
fn valid_submit_enters_loading_state() {
    let mut form = filled("ab", "123456", true);
    assert!(form.submit_enabled());
    assert_eq!(form.submit(), SubmitDecision::Proceed);
    assert!(form.loading);
    assert!(!form.submit_enabled());
}

#[test]
fn submit_without_consent_is_always_blocked() {
    let mut form = filled("valid name", "Str0ng!Secret", false);
    assert_eq!(form.submit(), SubmitDecision::Blocked);
    assert_eq!(form.consent_error, Some(CONSENT_REQUIRED));
    assert!(!form.loading);
}

#[test]
fn submit_with_invalid_fields_surfaces_each_error() {
    let mut form = filled("", "12345", true);
    assert_eq!(form.submit(), SubmitDecision::Blocked);
    assert_eq!(form.identifier_status, FieldStatus::Error(IDENTIFIER_REQUIRED));
    assert_eq!(form.secret_status, FieldStatus::Error(SECRET_TOO_SHORT));
    assert_eq!(form.consent_error, None);
    assert!(!form.loading);
}

#[test]
fn checking_consent_clears_its_error() {
    let mut form = filled("ab", "123456", false);
    form.submit();
    form.set_consent(true);
    assert_eq!(form.consent_error, None);
    assert_eq!(form.submit(), SubmitDecision::Proceed);
}

#[test]
fn resubmit_while_loading_is_blocked() {
    let mut form = filled("ab", "123456", true);
    assert_eq!(form.submit(), SubmitDecision::Proceed);
    assert_eq!(form.submit(), SubmitDecision::Blocked);
    assert!(form.loading);
}
