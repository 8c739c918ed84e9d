//! Command implementations behind the `scriptoids` binary.
//!
//! Batch commands report each failure and move on to the next package; the
//! caller gets the tally back in a [`BatchOutcome`].

pub mod config;
mod init;
mod link;
mod list;
mod paths;
mod unlink;

pub use config::Config;
pub use init::{InitOptions, init};
pub use link::link;
pub use list::list;
pub use unlink::unlink;

use crate::environment::{EnvironmentError, ErrorKind};

/// How many requested items a command handled, and how many it had to skip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

fn packages_noun(count: usize) -> &'static str {
    if count == 1 { "package" } else { "packages" }
}

/// User-facing line for a package that could not be `action`ed.
///
/// Anything but a missing package is shown with its full chain of causes.
fn failure_message(action: &str, name: &str, error: EnvironmentError) -> String {
    match error.kind() {
        ErrorKind::NotFound => format!("No such package {}, skipping...", name),
        _ => format!(
            "Failed to {} package {}: {:#}",
            action,
            name,
            anyhow::Error::new(error)
        ),
    }
}
