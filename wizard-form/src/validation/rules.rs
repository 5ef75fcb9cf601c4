//! Validation limits.

use serde::{Deserialize, Serialize};

use super::validator::{
    Credentials, ValidationOutcome, check_name_length, check_password_length,
    check_password_not_blacklisted, check_passwords_match,
};

/// Minimum number of characters in a name.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 5;

/// Minimum number of characters in a password.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Passwords rejected regardless of length.
pub const DEFAULT_PASSWORD_BLACKLIST: &[&str] = &["qwerty"];

/// The limits a registration is validated against.
///
/// Missing keys fall back to the defaults when deserialized, so an embedding
/// application only has to spell out what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub name_min_length: usize,
    pub password_min_length: usize,
    pub password_blacklist: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_blacklist: DEFAULT_PASSWORD_BLACKLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Rules {
    pub fn with_name_min_length(mut self, min_length: usize) -> Self {
        self.name_min_length = min_length;
        self
    }

    pub fn with_password_min_length(mut self, min_length: usize) -> Self {
        self.password_min_length = min_length;
        self
    }

    pub fn with_password_blacklist<I, S>(mut self, blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.password_blacklist = blacklist.into_iter().map(Into::into).collect();
        self
    }

    /// Validate a registration against these rules.
    ///
    /// The name and the password chain are evaluated independently, then
    /// combined name first: a short name masks every password failure.
    pub fn validate(&self, name: &str, password: &str, password_again: &str) -> ValidationOutcome {
        let valid_password = check_password_length(password, self.password_min_length)
            .and_then(|password| {
                check_password_not_blacklisted(password, self.password_blacklist.as_slice())
            })
            .and_then(|password| check_passwords_match(password, password_again));
        let valid_name = check_name_length(name, self.name_min_length);

        valid_name.and_then(|name| {
            valid_password.map(|password| Credentials {
                name: name.to_string(),
                password: password.to_string(),
            })
        })
    }
}
