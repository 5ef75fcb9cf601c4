use std::fmt;

use crate::model::{ObservableForm, ReactiveForm};
use crate::validation::ValidationError;

use super::{Color, ErrorView};

/// Everything a renderer needs to draw the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub password: String,
    pub password_again: String,
    /// Whether the "Create account" button is enabled.
    pub accept_enabled: bool,
    pub error_text: String,
    pub error_color: Color,
}

impl FormView {
    fn build(
        name: String,
        password: String,
        password_again: String,
        error: Option<&ValidationError>,
    ) -> Self {
        let view = ErrorView::new(error);
        Self {
            name,
            password,
            password_again,
            accept_enabled: !view.exists(),
            error_text: view.description(),
            error_color: view.color(),
        }
    }

    /// Snapshot a pull-based form. Validates once.
    pub fn from_observable(form: &ObservableForm) -> Self {
        let error = form.current_error();
        Self::build(
            form.name(),
            form.password(),
            form.password_again(),
            error.as_ref(),
        )
    }

    /// Snapshot a push-based form from its latest published outcome.
    pub fn from_reactive(form: &ReactiveForm) -> Self {
        let error = form.current_error();
        Self::build(
            form.name(),
            form.password(),
            form.password_again(),
            error.as_ref(),
        )
    }

    /// Snapshot arbitrary field values with an already-known error.
    pub fn from_parts(
        name: impl Into<String>,
        password: impl Into<String>,
        password_again: impl Into<String>,
        error: Option<&ValidationError>,
    ) -> Self {
        Self::build(name.into(), password.into(), password_again.into(), error)
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wizard name:    {}", self.name)?;
        writeln!(f, "Password:       {}", self.password)?;
        writeln!(f, "Password again: {}", self.password_again)?;
        let button = if self.accept_enabled {
            "[ Create account ]"
        } else {
            "( Create account )"
        };
        writeln!(f, "{}", button)?;
        write!(f, "{}", self.error_color.paint(&self.error_text))
    }
}
