//! Individual checks.

use unicode_segmentation::UnicodeSegmentation;

use super::error::ValidationError;
use super::rules::Rules;

/// A name and password that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Result of running every check against the current field values.
pub type ValidationOutcome = Result<Credentials, ValidationError>;

/// Length as a reader sees it: user-perceived characters, not code points.
fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Succeeds iff `name` has at least `min_length` characters.
pub fn check_name_length(name: &str, min_length: usize) -> Result<&str, ValidationError> {
    if grapheme_count(name) >= min_length {
        Ok(name)
    } else {
        Err(ValidationError::NameTooShort {
            name: name.to_string(),
            min_length,
        })
    }
}

/// Succeeds iff `password` has at least `min_length` characters.
pub fn check_password_length(password: &str, min_length: usize) -> Result<&str, ValidationError> {
    if grapheme_count(password) >= min_length {
        Ok(password)
    } else {
        Err(ValidationError::PasswordTooShort {
            password: password.to_string(),
            min_length,
        })
    }
}

/// Fails iff `password` is exactly (case-sensitively) one of `blacklist`.
pub fn check_password_not_blacklisted<'a, S>(
    password: &'a str,
    blacklist: &[S],
) -> Result<&'a str, ValidationError>
where
    S: AsRef<str>,
{
    if blacklist.iter().any(|entry| entry.as_ref() == password) {
        Err(ValidationError::PasswordBlacklisted {
            password: password.to_string(),
            blacklist: blacklist.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    } else {
        Ok(password)
    }
}

/// Fails iff the two passwords differ.
pub fn check_passwords_match<'a>(
    password: &'a str,
    password_again: &str,
) -> Result<&'a str, ValidationError> {
    if password == password_again {
        Ok(password)
    } else {
        Err(ValidationError::PasswordMismatch {
            password: password.to_string(),
            password_again: password_again.to_string(),
        })
    }
}

/// Validate with the default [`Rules`].
pub fn validate(name: &str, password: &str, password_again: &str) -> ValidationOutcome {
    Rules::default().validate(name, password, password_again)
}
