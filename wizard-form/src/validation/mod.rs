//! Registration form validation.
//!
//! Each check is a pure function returning `Result`, so checks compose with
//! `and_then` and the first failure short-circuits the chain.
//!
//! # Example
//!
//! ```
//! use wizard_form::validation::{validate, ValidationError};
//!
//! let outcome = validate("Wizard1", "qwerty", "qwerty");
//! assert!(matches!(outcome, Err(ValidationError::PasswordTooShort { .. })));
//!
//! let outcome = validate("Wizard1", "Secretz9", "Secretz9");
//! assert!(outcome.is_ok());
//! ```

mod error;
mod rules;
mod validator;

pub use error::{Field, ValidationError};
pub use rules::{
    DEFAULT_NAME_MIN_LENGTH, DEFAULT_PASSWORD_BLACKLIST, DEFAULT_PASSWORD_MIN_LENGTH, Rules,
};
pub use validator::{
    Credentials, ValidationOutcome, check_name_length, check_password_length,
    check_password_not_blacklisted, check_passwords_match, validate,
};
