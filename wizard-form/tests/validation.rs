//! Tests for the validator.

use wizard_form::validation::{
    Credentials, Field, ValidationError, check_name_length, check_password_length,
    check_password_not_blacklisted, check_passwords_match, validate,
};

fn name_too_short(name: &str) -> ValidationError {
    ValidationError::NameTooShort {
        name: name.to_string(),
        min_length: 5,
    }
}

#[test]
fn test_short_name_wins_regardless_of_password() {
    for name in ["", "W", "Wiza"] {
        assert_eq!(validate(name, "Secretz9", "Secretz9"), Err(name_too_short(name)));
        assert_eq!(validate(name, "x", "y"), Err(name_too_short(name)));
        assert_eq!(validate(name, "qwerty", "qwerty"), Err(name_too_short(name)));
    }
}

#[test]
fn test_empty_form_reports_name() {
    assert_eq!(validate("", "", ""), Err(name_too_short("")));
}

#[test]
fn test_short_password() {
    for password in ["", "a", "Secret7"] {
        assert_eq!(
            validate("Wizard1", password, password),
            Err(ValidationError::PasswordTooShort {
                password: password.to_string(),
                min_length: 8,
            })
        );
    }
}

#[test]
fn test_short_password_checked_before_match() {
    assert!(matches!(
        validate("Wizard1", "short", "different"),
        Err(ValidationError::PasswordTooShort { .. })
    ));
}

#[test]
fn test_blacklisted_password() {
    let outcome = check_password_not_blacklisted("qwertyqwerty", &["qwertyqwerty", "password"]);
    assert_eq!(
        outcome,
        Err(ValidationError::PasswordBlacklisted {
            password: "qwertyqwerty".to_string(),
            blacklist: vec!["qwertyqwerty".to_string(), "password".to_string()],
        })
    );
}

// With the default rules "qwerty" (6 characters) never reaches the blacklist
// check because it is shorter than 8; tests/rules.rs lowers the minimum.
#[test]
fn test_default_blacklist_entry_is_caught_by_length_first() {
    assert!(matches!(
        validate("Wizard1", "qwerty", "qwerty"),
        Err(ValidationError::PasswordTooShort { .. })
    ));
}

#[test]
fn test_password_mismatch() {
    assert_eq!(
        validate("Wizard1", "Secretz9", "Secretz8"),
        Err(ValidationError::PasswordMismatch {
            password: "Secretz9".to_string(),
            password_again: "Secretz8".to_string(),
        })
    );
}

#[test]
fn test_valid_registration() {
    assert_eq!(
        validate("Wizard1", "Secretz9", "Secretz9"),
        Ok(Credentials {
            name: "Wizard1".to_string(),
            password: "Secretz9".to_string(),
        })
    );
}

#[test]
fn test_validate_is_idempotent() {
    for (name, password, again) in [
        ("Wizard1", "Secretz9", "Secretz9"),
        ("", "", ""),
        ("Wizard1", "Secretz9", "nope"),
    ] {
        assert_eq!(validate(name, password, again), validate(name, password, again));
    }
}

#[test]
fn test_individual_checks() {
    assert_eq!(check_name_length("Wizard", 5), Ok("Wizard"));
    assert_eq!(check_name_length("Wiz", 5), Err(name_too_short("Wiz")));
    assert!(check_password_length("1234567", 8).is_err());
    assert!(check_passwords_match("a", "a").is_ok());
    assert!(check_passwords_match("a", "A").is_err());
}

#[test]
fn test_error_descriptions() {
    assert_eq!(name_too_short("Wiz").to_string(), "Name <Wiz> does not reach length <5>.");
    assert_eq!(
        ValidationError::PasswordTooShort {
            password: "abc".to_string(),
            min_length: 8,
        }
        .to_string(),
        "Password <abc> does not reach length <8>."
    );
    assert_eq!(
        ValidationError::PasswordBlacklisted {
            password: "qwerty".to_string(),
            blacklist: vec!["qwerty".to_string()],
        }
        .to_string(),
        "Password <qwerty> is in blacklist <[\"qwerty\"]>."
    );
    assert_eq!(
        ValidationError::PasswordMismatch {
            password: "a".to_string(),
            password_again: "b".to_string(),
        }
        .to_string(),
        "Password <a> does not match password again <b>."
    );
}

#[test]
fn test_error_field() {
    assert_eq!(name_too_short("").field(), Field::Name);
    assert_eq!(
        validate("Wizard1", "Secretz9", "x").unwrap_err().field(),
        Field::PasswordAgain
    );
    assert_eq!(validate("Wizard1", "x", "x").unwrap_err().field(), Field::Password);
}

#[test]
fn test_combining_marks_count_as_one_character() {
    // "e" + U+0301 is one user-perceived character: 4 in total, not 5.
    let name = "Zoe\u{301}y";
    assert_eq!(
        validate(name, "Secretz9", "Secretz9"),
        Err(name_too_short(name))
    );
    assert!(validate("Zoe\u{301}ys", "Secretz9", "Secretz9").is_ok());
}

#[test]
fn test_password_length_counts_graphemes() {
    // Seven base letters, one carrying a combining mark: 7 graphemes, 8 chars.
    let password = "Secre\u{301}tz";
    assert!(matches!(
        validate("Wizard1", password, password),
        Err(ValidationError::PasswordTooShort { .. })
    ));
}
