//! Text and color derived from form state.
//!
//! This is the boundary with whatever draws the form. Everything here is plain
//! data: a renderer reads a [`FormView`] and decides how to show it.

mod color;
mod error_state;
mod error_view;
mod form_view;

pub use color::Color;
pub use error_state::ErrorState;
pub use error_view::{ErrorView, NO_ERROR};
pub use form_view::FormView;
