//! Core app state for UniConnect.
//! This crate is the single source of truth for navigation and screen data.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod screens;
pub mod seed;
pub mod session;
pub mod store;
pub mod text;

pub use app::{CampusApp, MountedScreen};
pub use config::{init_logging_from_config, ConfigError, CoreConfig, DEFAULT_SPLASH_DELAY_MS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Record, RecordId};
pub use session::{derive_display_name, LoginForm, LoginMode, Screen, Session, SessionId};
pub use store::{ListStore, PendingSelection, RecordFilter};
pub use text::SearchQuery;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
