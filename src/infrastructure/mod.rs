//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest transport for the login endpoint
//! - [`terminal`] - Prompted form, console notifier and navigator

pub mod http;
pub mod terminal;
