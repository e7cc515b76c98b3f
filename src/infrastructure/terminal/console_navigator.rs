//! Navigation reported on the terminal.

use crate::domain::ports::Navigator;
use colored::*;
use tracing::{info, warn};
use url::Url;

/// Resolves navigation targets against the portal and tells the user where to go.
#[derive(Debug, Clone)]
pub struct ConsoleNavigator {
    base_url: Url,
}

impl ConsoleNavigator {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Full URL for a root-relative `path`.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        match self.resolve(path) {
            Ok(url) => {
                info!(target_url = %url, "Navigating");
                println!("  {} {}", "→ Continue at".bright_blue(), url.as_str().cyan());
            }
            Err(e) => warn!("Cannot navigate to {}: {}", path, e),
        }
    }
}
