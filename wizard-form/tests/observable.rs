//! Tests for the pull-based form.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wizard_form::model::ObservableForm;
use wizard_form::validation::{Rules, ValidationError};

fn fill(form: &ObservableForm, name: &str, password: &str, again: &str) {
    form.set_name(name);
    form.set_password(password);
    form.set_password_again(again);
}

#[test]
fn test_new_form_is_empty_and_invalid() {
    let form = ObservableForm::new();
    assert_eq!(form.name(), "");
    assert_eq!(form.password(), "");
    assert_eq!(form.password_again(), "");
    assert_eq!(
        form.current_error(),
        Some(ValidationError::NameTooShort {
            name: String::new(),
            min_length: 5,
        })
    );
    assert!(!form.can_accept_data());
}

#[test]
fn test_valid_form_accepts_data() {
    let form = ObservableForm::new();
    fill(&form, "Wizard1", "Secretz9", "Secretz9");
    assert_eq!(form.current_error(), None);
    assert!(form.can_accept_data());
    assert_eq!(form.validated().unwrap().name, "Wizard1");
}

#[test]
fn test_one_notification_per_write() {
    let form = ObservableForm::new();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    form.on_change(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    fill(&form, "Wizard1", "Secretz9", "Secretz9");
    assert_eq!(count.load(Ordering::SeqCst), 3);

    form.set_name("Wizard1");
    assert_eq!(count.load(Ordering::SeqCst), 4);
}

#[test]
fn test_observer_sees_new_value() {
    let form = ObservableForm::new();
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let observer_form = form.clone();
    let observer_seen = Arc::clone(&seen);
    form.on_change(move || {
        observer_seen
            .lock()
            .unwrap()
            .push(observer_form.can_accept_data());
    });

    fill(&form, "Wizard1", "Secretz9", "Secretz9");
    assert_eq!(*seen.lock().unwrap(), vec![false, false, true]);
}

#[test]
fn test_revalidates_on_every_read() {
    let form = ObservableForm::new();
    fill(&form, "Wizard1", "Secretz9", "Secretz9");
    assert!(form.can_accept_data());

    form.set_password_again("Secretz8");
    assert!(matches!(
        form.current_error(),
        Some(ValidationError::PasswordMismatch { .. })
    ));
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let form = ObservableForm::new();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let id = form.on_change(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    form.set_name("a");
    assert!(form.unsubscribe(id));
    form.set_name("b");
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!form.unsubscribe(id));
}

#[test]
fn test_custom_rules() {
    let form = ObservableForm::with_rules(Rules::default().with_name_min_length(1));
    fill(&form, "W", "Secretz9", "Secretz9");
    assert!(form.can_accept_data());
    assert_eq!(form.rules().name_min_length, 1);
}

#[test]
fn test_unsubscribe_releases_observer_captures() {
    let form = ObservableForm::new();
    let observer = form.clone();
    let captured = Arc::new(());
    let held = Arc::clone(&captured);
    let id = form.on_change(move || {
        let _ = (&held, observer.can_accept_data());
    });
    assert_eq!(Arc::strong_count(&captured), 2);

    form.unsubscribe(id);
    assert_eq!(Arc::strong_count(&captured), 1);
}
