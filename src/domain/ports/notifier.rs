//! Port for blocking acknowledgements.

/// Shows a message the user has to acknowledge before the flow continues.
///
/// # Implementations
///
/// - [`crate::infrastructure::terminal::ConsoleNotifier`] - Colored terminal message
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Displays `message` and returns once it has been acknowledged.
    fn alert(&self, message: &str);
}
