//! Sign-up / sign-in form state with inline validation.
//!
//! DESIGN
//! ======
//! One owned `AuthForm` carries the field values, mode, and every piece of
//! feedback the view shows. Handlers mutate it through methods and the view
//! renders from it; nothing lives in ambient variables.
//!
//! Errors are shown only on blur or submit. While typing, a field's stale
//! error is cleared and success styling appears once it becomes valid.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

pub const MIN_IDENTIFIER_LEN: usize = 2;
pub const MIN_SECRET_LEN: usize = 6;

pub const IDENTIFIER_REQUIRED: &str = "Please enter your name";
pub const IDENTIFIER_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const SECRET_REQUIRED: &str = "Please enter a password";
pub const SECRET_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONSENT_REQUIRED: &str = "Please accept the terms of service";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignUp,
    SignIn,
}

/// Mode-dependent headings and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_action: &'static str,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignUp => Self::SignIn,
            Self::SignIn => Self::SignUp,
        }
    }

    pub fn copy(self) -> ModeCopy {
        match self {
            Self::SignUp => ModeCopy {
                title: "Create Account",
                subtitle: "Start your journey to better mental wellness",
                submit_label: "Sign Up",
                toggle_prompt: "Already have an account?",
                toggle_action: "Sign In",
            },
            Self::SignIn => ModeCopy {
                title: "Welcome Back",
                subtitle: "Sign in to continue your conversation",
                submit_label: "Sign In",
                toggle_prompt: "Don't have an account?",
                toggle_action: "Sign Up",
            },
        }
    }
}

/// Inline feedback for one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error(&'static str),
}

impl FieldStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Error(msg) => *msg,
            Self::Neutral | Self::Success => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium strength",
            Self::Strong => "Strong password",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }
}

/// Score the secret: one point each for length >= 6, length >= 10, mixed
/// case, a digit, and a symbol. Adding characters never lowers the score.
/// Returns `None` for an empty secret.
pub fn strength(secret: &str) -> Option<Strength> {
    let secret = secret.trim();
    if secret.is_empty() {
        return None;
    }
    let len = secret.chars().count();
    let has_lower = secret.chars().any(char::is_lowercase);
    let has_upper = secret.chars().any(char::is_uppercase);
    let has_digit = secret.chars().any(|c| c.is_ascii_digit());
    let has_symbol = secret.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let score = [len >= MIN_SECRET_LEN, len >= 10, has_lower && has_upper, has_digit, has_symbol]
        .into_iter()
        .filter(|hit| *hit)
        .count();
    Some(match score {
        0..=2 => Strength::Weak,
        3 => Strength::Medium,
        _ => Strength::Strong,
    })
}

fn check_identifier(value: &str) -> Result<(), &'static str> {
    match value.trim().chars().count() {
        0 => Err(IDENTIFIER_REQUIRED),
        n if n < MIN_IDENTIFIER_LEN => Err(IDENTIFIER_TOO_SHORT),
        _ => Ok(()),
    }
}

fn check_secret(value: &str) -> Result<(), &'static str> {
    match value.trim().chars().count() {
        0 => Err(SECRET_REQUIRED),
        n if n < MIN_SECRET_LEN => Err(SECRET_TOO_SHORT),
        _ => Ok(()),
    }
}

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser post the form to the server.
    Proceed,
    /// Cancel the default submit; errors are now visible.
    Blocked,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub identifier: String,
    pub secret: String,
    pub consent: bool,
    pub mode: AuthMode,
    pub identifier_status: FieldStatus,
    pub secret_status: FieldStatus,
    pub consent_error: Option<&'static str>,
    pub strength: Option<Strength>,
    pub secret_visible: bool,
    /// Set once a valid submit is handed to the server; page navigation
    /// clears it.
    pub loading: bool,
}

impl AuthForm {
    pub fn input_identifier(&mut self, value: String) {
        self.identifier = value;
        self.identifier_status = if check_identifier(&self.identifier).is_ok() {
            FieldStatus::Success
        } else {
            FieldStatus::Neutral
        };
    }

    pub fn input_secret(&mut self, value: String) {
        self.secret = value;
        self.strength = strength(&self.secret);
        self.secret_status = if check_secret(&self.secret).is_ok() {
            FieldStatus::Success
        } else {
            FieldStatus::Neutral
        };
    }

    /// Validate the identifier and surface any error. Returns validity.
    pub fn blur_identifier(&mut self) -> bool {
        match check_identifier(&self.identifier) {
            Ok(()) => {
                self.identifier_status = FieldStatus::Success;
                true
            }
            Err(msg) => {
                self.identifier_status = FieldStatus::Error(msg);
                false
            }
        }
    }

    /// Validate the secret and surface any error. Returns validity.
    pub fn blur_secret(&mut self) -> bool {
        match check_secret(&self.secret) {
            Ok(()) => {
                self.secret_status = FieldStatus::Success;
                true
            }
            Err(msg) => {
                self.secret_status = FieldStatus::Error(msg);
                false
            }
        }
    }

    pub fn set_consent(&mut self, given: bool) {
        self.consent = given;
        if given {
            self.consent_error = None;
        }
    }

    /// Switch between sign-up and sign-in. Only the copy changes.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_secret_visibility(&mut self) {
        self.secret_visible = !self.secret_visible;
    }

    pub fn submit_enabled(&self) -> bool {
        self.consent && !self.loading
    }

    /// Re-validate everything. On success enter the loading state and let
    /// the submit proceed; otherwise surface every failing field.
    pub fn submit(&mut self) -> SubmitDecision {
        if self.loading {
            return SubmitDecision::Blocked;
        }
        let identifier_ok = self.blur_identifier();
        let secret_ok = self.blur_secret();
        self.consent_error = if self.consent { None } else { Some(CONSENT_REQUIRED) };

        if identifier_ok && secret_ok && self.consent {
            self.loading = true;
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Blocked
        }
    }
}
