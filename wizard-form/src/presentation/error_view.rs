use crate::validation::ValidationError;

use super::Color;

/// Text shown when the form is valid.
pub const NO_ERROR: &str = "No error";

/// Renders an optional validation error.
#[derive(Debug, Clone, Copy)]
pub struct ErrorView<'a> {
    error: Option<&'a ValidationError>,
}

impl<'a> ErrorView<'a> {
    pub fn new(error: Option<&'a ValidationError>) -> Self {
        Self { error }
    }

    /// Whether there is an error to show.
    pub fn exists(&self) -> bool {
        self.error.is_some()
    }

    /// The error's description, or [`NO_ERROR`].
    pub fn description(&self) -> String {
        self.error
            .map(ToString::to_string)
            .unwrap_or_else(|| NO_ERROR.to_string())
    }

    /// Red while an error exists, green otherwise.
    pub fn color(&self) -> Color {
        if self.exists() { Color::Red } else { Color::Green }
    }
}
