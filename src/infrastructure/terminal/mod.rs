//! Terminal adapters for the login ports.
//!
//! - [`PromptForm`] - Reads fields from flags or dialoguer prompts
//! - [`ConsoleNotifier`] - Colored message, waits for Enter
//! - [`ConsoleNavigator`] - Prints the resolved landing page

mod console_navigator;
mod console_notifier;
mod prompt_form;

pub use console_navigator::ConsoleNavigator;
pub use console_notifier::ConsoleNotifier;
pub use prompt_form::PromptForm;

use tokio::runtime::{Handle, RuntimeFlavor};

/// Runs a blocking terminal read without stalling the tokio worker it is called from.
///
/// On a multi-thread runtime the worker hands its queued tasks to another thread first.
/// A current-thread runtime cannot do that, so the read runs inline there, as it does
/// outside any runtime.
pub(crate) fn run_blocking<R>(read: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(read)
        }
        _ => read(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_blocking_outside_runtime() {
        assert_eq!(run_blocking(|| 7), 7);
    }

    #[tokio::test]
    async fn test_run_blocking_on_current_thread_runtime() {
        assert_eq!(run_blocking(|| "inline"), "inline");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_blocking_inside_spawned_task() {
        let handle = tokio::spawn(async {
            run_blocking(|| {
                std::thread::sleep(std::time::Duration::from_millis(20));
                "acknowledged"
            })
        });

        // The other worker keeps running tasks while the read blocks.
        let side = tokio::spawn(async { 1 + 1 });
        assert_eq!(side.await.unwrap(), 2);
        assert_eq!(handle.await.unwrap(), "acknowledged");
    }
}
