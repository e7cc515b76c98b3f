//! Port trait definitions for the domain layer.
//!
//! The login handler never touches a terminal, a network socket or a page
//! directly. It talks to these traits, and the infrastructure layer plugs in
//! concrete implementations.
//!
//! # Available Ports
//!
//! - [`FormSource`] - Current values of the login form fields
//! - [`LoginTransport`] - Delivery of the login request
//! - [`Notifier`] - Blocking acknowledgements
//! - [`Navigator`] - Page navigation
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! Integration tests in `tests/` use small recording fakes instead.

pub mod form_source;
pub mod navigator;
pub mod notifier;
pub mod transport;

pub use form_source::{FormSource, PASSWORD_FIELD, USERNAME_FIELD};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use transport::LoginTransport;

#[cfg(test)]
pub use form_source::MockFormSource;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use transport::MockLoginTransport;
