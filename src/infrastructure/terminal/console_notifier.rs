//! Blocking acknowledgements on the terminal.

use super::run_blocking;
use crate::domain::ports::Notifier;
use colored::*;
use dialoguer::Input;
use tracing::warn;

/// Prints a message and, unless disabled, waits for Enter before returning.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    wait_for_ack: bool,
}

impl ConsoleNotifier {
    /// Creates a notifier. With `wait_for_ack = false` messages are only printed,
    /// which keeps non-interactive runs from hanging.
    pub fn new(wait_for_ack: bool) -> Self {
        Self { wait_for_ack }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!();
        println!("  {} {}", "🔔".bright_yellow(), message.bright_white().bold());
        println!();

        if !self.wait_for_ack {
            return;
        }

        let ack = run_blocking(|| {
            Input::<String>::new()
                .with_prompt("Press Enter to continue")
                .allow_empty(true)
                .interact_text()
        });
        if let Err(e) = ack {
            warn!("Could not wait for acknowledgement: {}", e);
        }
    }
}
