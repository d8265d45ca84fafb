//! Top-level screens of the app.

use serde::{Deserialize, Serialize};

/// One full-page view in the single-page navigation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Login,
    Dashboard,
    Events,
    Notes,
    Assignments,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Splash,
        Screen::Login,
        Screen::Dashboard,
        Screen::Events,
        Screen::Notes,
        Screen::Assignments,
        Screen::Profile,
    ];

    /// Stable lowercase id, also used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Events => "events",
            Self::Notes => "notes",
            Self::Assignments => "assignments",
            Self::Profile => "profile",
        }
    }

    /// Whether the screen is only reachable with an authenticated session.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Splash | Self::Login)
    }
}
