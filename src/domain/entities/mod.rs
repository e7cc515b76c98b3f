//! Core domain entities of the login flow.
//!
//! # Entity Types
//!
//! - [`LoginRequest`] - Credentials read from the form at call time
//! - [`LoginResponse`] - Raw body returned by the portal
//! - [`LoginOutcome`] - The portal's verdict, decided from the response
//!
//! Entities are plain data. The only logic here is turning a response into
//! an outcome, which is covered by unit tests next to it.

pub mod login;

pub use login::{LoginOutcome, LoginRequest, LoginResponse, ResponseStatus, UserId, is_truthy};
