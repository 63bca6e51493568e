//! Local credential validation
//!
//! The checks that must pass before any network call is made. Anything
//! the backend also enforces (duplicate usernames, reserved names) is
//! deliberately not re-checked here; the backend owns those rules.

use crate::error::{AuthError, Result};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 4;

/// Fields collected by the patient self-registration form
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Desired login name
    pub username: String,
    /// Desired password
    pub password: String,
}

impl RegistrationInput {
    /// Trim whitespace from the user-entered fields
    ///
    /// The password is kept verbatim; leading or trailing spaces in a
    /// password are legal.
    pub fn trimmed(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.username = self.username.trim().to_string();
        self
    }

    /// Validate the local invariants, in the order the form reports them
    pub fn validate(&self) -> Result<()> {
        validate_password(&self.password)?;
        if self.full_name.trim().is_empty() {
            return Err(AuthError::MissingField("full name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if self.username.trim().is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        Ok(())
    }
}

/// Check a password against the minimum length
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::password_too_short(MIN_PASSWORD_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegistrationInput {
        RegistrationInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            username: "jane".to_string(),
            password: "abcd".to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_short_password() {
        let mut i = input();
        i.password = "ab".to_string();
        assert_eq!(
            i.validate(),
            Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        );
    }

    #[test]
    fn test_minimum_length_password_accepted() {
        let mut i = input();
        i.password = "abcd".to_string();
        assert!(i.validate().is_ok());
    }

    #[test]
    fn test_blank_full_name() {
        let mut i = input();
        i.full_name = "   ".to_string();
        assert_eq!(i.validate(), Err(AuthError::MissingField("full name")));
    }

    #[test]
    fn test_blank_email() {
        let mut i = input();
        i.email = String::new();
        assert_eq!(i.validate(), Err(AuthError::MissingField("email")));
    }

    #[test]
    fn test_password_checked_before_name() {
        // Both invalid: the password error wins, matching the form order.
        let mut i = input();
        i.password = "x".to_string();
        i.full_name = String::new();
        assert_eq!(
            i.validate(),
            Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        );
    }

    #[test]
    fn test_trimmed_normalizes_fields() {
        let i = RegistrationInput {
            full_name: "  Jane Doe ".to_string(),
            email: " jane@x.com ".to_string(),
            username: " jane ".to_string(),
            password: " abcd ".to_string(),
        }
        .trimmed();
        assert_eq!(i.full_name, "Jane Doe");
        assert_eq!(i.email, "jane@x.com");
        assert_eq!(i.username, "jane");
        assert_eq!(i.password, " abcd ");
    }
}
