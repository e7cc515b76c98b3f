//! Port for moving the user to another page.

/// Sends the user to a page of the portal.
///
/// # Implementations
///
/// - [`crate::infrastructure::terminal::ConsoleNavigator`] - Resolves and reports the target URL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigates to `path`, relative to the portal root.
    fn navigate(&self, path: &str);
}
