//! Global subscriber setup for the `siddur` binaries.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Crates whose events the default filter lets through.
const SIDDUR_TARGETS: [&str; 4] = ["siddur_core", "siddur_store", "siddur_engine", "siddur_cli"];

/// Output shape of the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Plain text on stderr, debug level
    Human,
    /// One JSON object per event on stderr, info level
    Json,
    /// A registry with no output layer; tests attach their own
    Silent,
}

impl Profile {
    /// Profile selected by the CLI's `--json-logs` flag
    pub fn for_json_flag(json: bool) -> Self {
        if json {
            Profile::Json
        } else {
            Profile::Human
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_directives(&self) -> String {
        let level = match self {
            Profile::Human => "debug",
            Profile::Json => "info",
            Profile::Silent => "off",
        };
        SIDDUR_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber for `profile`.
///
/// Only the first call in a process has any effect.
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| match profile {
        Profile::Human => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(profile.filter())
            .init(),
        Profile::Json => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(profile.filter())
            .init(),
        Profile::Silent => tracing_subscriber::registry().init(),
    });
}
