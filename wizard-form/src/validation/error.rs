//! Validation error types

/// The form field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Password,
    PasswordAgain,
}

/// A single violated constraint, carrying the values needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The confirmation does not equal the password.
    #[error("Password <{password}> does not match password again <{password_again}>.")]
    PasswordMismatch {
        password: String,
        password_again: String,
    },

    /// The password is one of the disallowed passwords.
    #[error("Password <{password}> is in blacklist <{blacklist:?}>.")]
    PasswordBlacklisted {
        password: String,
        blacklist: Vec<String>,
    },

    /// The password is shorter than the minimum length.
    #[error("Password <{password}> does not reach length <{min_length}>.")]
    PasswordTooShort { password: String, min_length: usize },

    /// The name is shorter than the minimum length.
    #[error("Name <{name}> does not reach length <{min_length}>.")]
    NameTooShort { name: String, min_length: usize },
}

impl ValidationError {
    /// Returns the field a renderer should highlight for this error.
    pub fn field(&self) -> Field {
        match self {
            Self::PasswordMismatch { .. } => Field::PasswordAgain,
            Self::PasswordBlacklisted { .. } | Self::PasswordTooShort { .. } => Field::Password,
            Self::NameTooShort { .. } => Field::Name,
        }
    }
}
