//! Port for reading login form fields.

use crate::error::LoginError;

/// Identifier of the username field.
pub const USERNAME_FIELD: &str = "username";
/// Identifier of the password field.
pub const PASSWORD_FIELD: &str = "password";

/// Source of the values currently entered in the login form.
///
/// Values are read on every invocation, never cached, so each request reflects
/// the form state at call time.
///
/// # Implementations
///
/// - [`crate::infrastructure::terminal::PromptForm`] - Terminal prompts with optional presets
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait FormSource: Send + Sync {
    /// Returns the current value of the field named `field_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Form`] if the field cannot be read.
    fn field_value(&self, field_id: &'static str) -> Result<String, LoginError>;
}
