//! Domain layer: login entities and the ports the handler depends on.
//!
//! # Architecture
//!
//! - [`entities`] - Request, response and outcome types
//! - [`ports`] - Traits for the form, transport, notifier and navigator
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Port traits define contracts implemented by the infrastructure layer
//! - The login flow itself lives in [`crate::application::services`]

pub mod entities;
pub mod ports;
