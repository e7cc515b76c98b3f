//! Business logic services for the application layer.

pub mod login_service;

pub use login_service::{
    ADMIN_ROLE, DEFAULT_REJECTION_MESSAGE, LoginRoutes, LoginService, LoginSettlement,
};
