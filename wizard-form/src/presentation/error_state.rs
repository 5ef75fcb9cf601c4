use crate::model::ReactiveForm;
use crate::publisher::SubscriptionId;
use crate::state::State;
use crate::validation::ValidationError;

use super::{ErrorView, FormView};

/// View-side state fed by a [`ReactiveForm`]'s outcome stream.
///
/// Subscribes once on attach and keeps the latest error; the view never
/// polls the form for validation.
#[derive(Debug)]
pub struct ErrorState {
    form: ReactiveForm,
    error: State<Option<ValidationError>>,
    subscription: SubscriptionId,
}

impl ErrorState {
    /// Subscribe to `form` and start tracking its error.
    pub fn attach(form: &ReactiveForm) -> Self {
        let error = State::new(None);
        let sink = error.clone();
        let subscription = form.outcome().watch(move |outcome| match outcome {
            Ok(_) => sink.set(None),
            Err(e) => sink.set(Some(e.clone())),
        });
        Self {
            form: form.clone(),
            error,
            subscription,
        }
    }

    /// The last error received.
    pub fn error(&self) -> Option<ValidationError> {
        self.error.get()
    }

    pub fn can_accept_data(&self) -> bool {
        self.error.with(Option::is_none)
    }

    /// Describe the last error received.
    pub fn description(&self) -> String {
        self.error.with(|error| ErrorView::new(error.as_ref()).description())
    }

    /// Snapshot the form with this state's error.
    pub fn view(&self) -> FormView {
        let error = self.error();
        FormView::from_parts(
            self.form.name(),
            self.form.password(),
            self.form.password_again(),
            error.as_ref(),
        )
    }
}

impl Drop for ErrorState {
    fn drop(&mut self) {
        self.form.outcome().unsubscribe(self.subscription);
    }
}
