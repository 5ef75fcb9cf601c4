//! Form state controllers.
//!
//! Both controllers own the same three fields and validate them with the same
//! [`Rules`](crate::validation::Rules). They differ in how results reach the
//! view: [`ObservableForm`] is pulled, [`ReactiveForm`] pushes.

mod observable;
mod reactive;

pub use observable::ObservableForm;
pub use reactive::ReactiveForm;
