//! Login form state and display-name derivation.
//!
//! # Invariants
//! - Submission never fails; any input yields a non-empty display name.
//! - The name field is consulted only in sign-up mode.

use serde::{Deserialize, Serialize};

/// Fallback display name when neither name nor e-mail yields one.
pub const FALLBACK_DISPLAY_NAME: &str = "Student";

/// Which variant of the form is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
        }
    }
}

/// Field values of the login form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    /// Collected for parity with the form; never checked.
    pub password: String,
    /// Full name, only shown in sign-up mode.
    pub name: String,
}

impl LoginForm {
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode: LoginMode::SignIn,
            email: email.into(),
            password: password.into(),
            name: String::new(),
        }
    }

    pub fn sign_up(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            mode: LoginMode::SignUp,
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Flips between sign-in and sign-up. Entered values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
    }

    /// Display name this submission produces.
    pub fn display_name(&self) -> String {
        let name = match self.mode {
            LoginMode::SignUp => Some(self.name.as_str()),
            LoginMode::SignIn => None,
        };
        derive_display_name(name, &self.email)
    }
}

/// Derives a display name from an optional explicit name and an e-mail.
///
/// Rules, first non-empty wins:
/// - explicit name;
/// - e-mail text before the first `@` (whole e-mail if there is none);
/// - `"Student"`.
///
/// The first character is upper-cased, the rest kept as typed.
pub fn derive_display_name(name: Option<&str>, email: &str) -> String {
    let local_part = email.split('@').next().unwrap_or_default();
    let base = name
        .filter(|value| !value.is_empty())
        .or_else(|| Some(local_part).filter(|value| !value.is_empty()))
        .unwrap_or(FALLBACK_DISPLAY_NAME);
    capitalize_first(base)
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_display_name, LoginForm, LoginMode};

    #[test]
    fn email_local_part_is_capitalized() {
        assert_eq!(derive_display_name(None, "jane@x.edu"), "Jane");
        assert_eq!(derive_display_name(Some(""), "jane@x.edu"), "Jane");
    }

    #[test]
    fn explicit_name_wins_over_email() {
        assert_eq!(derive_display_name(Some("bob"), "jane@x.edu"), "Bob");
        assert_eq!(derive_display_name(Some("bob smith"), ""), "Bob smith");
    }

    #[test]
    fn falls_back_to_student() {
        assert_eq!(derive_display_name(None, ""), "Student");
        assert_eq!(derive_display_name(None, "@x.edu"), "Student");
    }

    #[test]
    fn email_without_at_sign_is_used_whole() {
        assert_eq!(derive_display_name(None, "jane"), "Jane");
    }

    #[test]
    fn name_field_is_ignored_in_sign_in_mode() {
        let mut form = LoginForm::sign_up("bob", "jane@x.edu", "secret");
        assert_eq!(form.display_name(), "Bob");

        form.toggle_mode();
        assert_eq!(form.mode, LoginMode::SignIn);
        assert_eq!(form.display_name(), "Jane");
    }
}
