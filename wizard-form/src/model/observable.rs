//! Pull-based form model: validation is re-run on every read.

use crate::publisher::{Publisher, SubscriptionId};
use crate::state::State;
use crate::validation::{Rules, ValidationError, ValidationOutcome};

/// Registration form that fires a payload-less change event on every write.
///
/// Nothing is cached. Observers call [`ObservableForm::current_error`] or
/// [`ObservableForm::can_accept_data`] after each notification, and each of
/// those calls validates the fields again.
///
/// # Example
///
/// ```
/// use wizard_form::model::ObservableForm;
///
/// let form = ObservableForm::new();
/// form.on_change(|| println!("form changed"));
/// form.set_name("Wizard1");
/// form.set_password("Secretz9");
/// form.set_password_again("Secretz9");
/// assert!(form.can_accept_data());
/// ```
#[derive(Debug, Clone)]
pub struct ObservableForm {
    name: State<String>,
    password: State<String>,
    password_again: State<String>,
    did_change: Publisher<()>,
    rules: Rules,
}

impl ObservableForm {
    /// Create an empty form with the default rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Create an empty form validated against `rules`.
    pub fn with_rules(rules: Rules) -> Self {
        let form = Self {
            name: State::default(),
            password: State::default(),
            password_again: State::default(),
            did_change: Publisher::new(),
            rules,
        };
        for field in [&form.name, &form.password, &form.password_again] {
            let did_change = form.did_change.clone();
            field.subscribe(move |_| did_change.send(&()));
        }
        form
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    pub fn password(&self) -> String {
        self.password.get()
    }

    pub fn password_again(&self) -> String {
        self.password_again.get()
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.name.set(value.into());
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.password.set(value.into());
    }

    pub fn set_password_again(&self, value: impl Into<String>) {
        self.password_again.set(value.into());
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Register an observer for field writes.
    pub fn on_change<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.did_change.subscribe(move |_| f())
    }

    /// Remove an observer registered with [`ObservableForm::on_change`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.did_change.unsubscribe(id)
    }

    /// Validate the current field values.
    pub fn validated(&self) -> ValidationOutcome {
        self.name.with(|name| {
            self.password.with(|password| {
                self.password_again
                    .with(|password_again| self.rules.validate(name, password, password_again))
            })
        })
    }

    /// The first violated constraint, if any.
    pub fn current_error(&self) -> Option<ValidationError> {
        match self.validated() {
            Err(error) => {
                log::info!("Form is invalid: {}", error);
                Some(error)
            }
            Ok(credentials) => {
                log::debug!("Name <{}> and password are ok", credentials.name);
                None
            }
        }
    }

    /// Whether the accept button should be enabled.
    pub fn can_accept_data(&self) -> bool {
        self.current_error().is_none()
    }
}

impl Default for ObservableForm {
    fn default() -> Self {
        Self::new()
    }
}
