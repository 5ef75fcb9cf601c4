//! Push-based form model: validation runs once per distinct combination of
//! field values and the outcome is published.

use crate::combine::{CombineLatest3, combine_latest3};
use crate::signal::Signal;
use crate::state::State;
use crate::validation::{Rules, ValidationError, ValidationOutcome};

/// Registration form that publishes a [`ValidationOutcome`] stream.
///
/// The stream is the three fields joined with combine-latest and mapped
/// through the validator. It is built in the constructor, so it already holds
/// the outcome for three empty fields before anyone subscribes.
///
/// # Example
///
/// ```
/// use wizard_form::model::ReactiveForm;
///
/// let form = ReactiveForm::new();
/// form.outcome().watch(|outcome| match outcome {
///     Ok(credentials) => println!("ok: {}", credentials.name),
///     Err(error) => println!("invalid: {error}"),
/// });
/// form.batch(|form| {
///     form.set_name("Wizard1");
///     form.set_password("Secretz9");
///     form.set_password_again("Secretz9");
/// });
/// assert!(form.can_accept_data());
/// ```
#[derive(Clone)]
pub struct ReactiveForm {
    name: State<String>,
    password: State<String>,
    password_again: State<String>,
    fields: CombineLatest3<String, String, String>,
    outcome: Signal<ValidationOutcome>,
    rules: Rules,
}

impl ReactiveForm {
    /// Create an empty form with the default rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Create an empty form validated against `rules`.
    pub fn with_rules(rules: Rules) -> Self {
        let name = State::<String>::default();
        let password = State::<String>::default();
        let password_again = State::<String>::default();

        let fields = combine_latest3(&name, &password, &password_again);
        let validator = rules.clone();
        let outcome = fields
            .signal()
            .map(move |(name, password, password_again)| {
                validator.validate(name, password, password_again)
            });
        outcome.subscribe(|outcome| match outcome {
            Ok(credentials) => log::debug!("Form emitted valid name <{}>", credentials.name),
            Err(error) => log::debug!("Form emitted error: {}", error),
        });

        Self {
            name,
            password,
            password_again,
            fields,
            outcome,
            rules,
        }
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

    /// The validation outcome stream.
    pub fn outcome(&self) -> Signal<ValidationOutcome> {
        self.outcome.clone()
    }

    /// Apply several field writes, emitting at most once when `f` returns.
    pub fn batch<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        let _hold = self.fields.hold();
        f(self)
    }

    /// The most recently published outcome.
    pub fn current_outcome(&self) -> ValidationOutcome {
        self.outcome.get()
    }

    /// The error carried by the most recently published outcome, if any.
    pub fn current_error(&self) -> Option<ValidationError> {
        self.outcome.with(|outcome| outcome.as_ref().err().cloned())
    }

    /// Whether the accept button should be enabled.
    pub fn can_accept_data(&self) -> bool {
        self.outcome.with(|outcome| outcome.is_ok())
    }
}

impl Default for ReactiveForm {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReactiveForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveForm")
            .field("name", &self.name)
            .field("password", &self.password)
            .field("password_again", &self.password_again)
            .field("outcome", &self.outcome)
            .finish()
    }
}
