//! Registration form validation with two state-management styles.
//!
//! - [`validation`]: pure checks over name, password and confirmation.
//! - [`model::ObservableForm`]: re-validates whenever it is read.
//! - [`model::ReactiveForm`]: pushes an outcome per distinct field combination.
//! - [`presentation`]: error text, color and the accept-button state.

pub mod combine;
pub mod model;
pub mod presentation;
pub mod publisher;
pub mod signal;
pub mod state;
pub mod validation;

pub mod prelude {
    pub use crate::model::{ObservableForm, ReactiveForm};
    pub use crate::presentation::{Color, ErrorState, ErrorView, FormView, NO_ERROR};
    pub use crate::publisher::{Publisher, SubscriptionId};
    pub use crate::signal::Signal;
    pub use crate::state::State;
    pub use crate::validation::{
        Credentials, Field, Rules, ValidationError, ValidationOutcome, validate,
    };
}
