//! Administrator credential check.
//!
//! One configured account; no sessions. A successful check does not unlock
//! anything by itself.

use serde::Serialize;

use crate::config::AdminCredentials;

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    Success,
    InvalidEmail,
    InvalidPassword,
}

impl LoginOutcome {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "Login successful",
            Self::InvalidEmail => "Invalid email address",
            Self::InvalidPassword => "Invalid password",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Check an email and password against the configured account.
///
/// A wrong email is reported before a wrong password.
#[must_use]
pub fn check_credentials(credentials: &AdminCredentials, email: &str, password: &str) -> LoginOutcome {
    if email != credentials.email {
        tracing::info!("Login rejected: unknown email");
        LoginOutcome::InvalidEmail
    } else if !credentials.password_matches(password) {
        tracing::info!("Login rejected: wrong password");
        LoginOutcome::InvalidPassword
    } else {
        tracing::info!("Login accepted");
        LoginOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> AdminCredentials {
        AdminCredentials::new("admin@example.com", "hunter2")
    }

    #[test]
    fn test_success() {
        let outcome = check_credentials(&credentials(), "admin@example.com", "hunter2");
        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(outcome.message(), "Login successful");
    }

    #[test]
    fn test_wrong_email_reported_first() {
        let outcome = check_credentials(&credentials(), "someone@example.com", "wrong");
        assert_eq!(outcome, LoginOutcome::InvalidEmail);
        assert_eq!(outcome.message(), "Invalid email address");
    }

    #[test]
    fn test_wrong_password() {
        let outcome = check_credentials(&credentials(), "admin@example.com", "hunter3");
        assert_eq!(outcome, LoginOutcome::InvalidPassword);
        assert_eq!(outcome.message(), "Invalid password");
    }

    #[test]
    fn test_email_is_exact_match() {
        let outcome = check_credentials(&credentials(), "Admin@example.com", "hunter2");
        assert_eq!(outcome, LoginOutcome::InvalidEmail);
    }
}
