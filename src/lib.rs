//! # Caseworker Login
//!
//! Login client for the caseworker portal. It reads a username and password,
//! posts them as JSON to the portal's login endpoint and follows the verdict:
//! a greeting and the dashboard on success, the portal's message on rejection.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as the portal backend:
//!
//! - **Domain Layer** ([`domain`]) - Login entities and the port traits the handler needs
//! - **Application Layer** ([`application`]) - The login handler itself
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport and terminal adapters
//!
//! ## Quick Start
//!
//! ```bash
//! export PORTAL_BASE_URL="http://127.0.0.1:8080"
//! cargo run -- login --username caseworker
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use error::LoginError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginRoutes, LoginService, LoginSettlement};
    pub use crate::domain::entities::{LoginOutcome, LoginRequest, LoginResponse, UserId};
    pub use crate::domain::ports::{FormSource, LoginTransport, Navigator, Notifier};
    pub use crate::error::LoginError;
    pub use crate::infrastructure::http::HttpLoginTransport;
}
