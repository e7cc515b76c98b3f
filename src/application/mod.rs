//! Application layer services implementing the login flow.
//!
//! Services consume the domain ports and never reach for a concrete terminal
//! or HTTP client, which keeps them testable with mocks.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Form to request to landing page

pub mod services;
