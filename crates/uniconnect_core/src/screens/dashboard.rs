//! Dashboard: greeting, highlights and quick-access shortcuts.

use crate::session::Screen;

/// Kind of highlighted item on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Event,
    Assignment,
    Club,
}

/// Upcoming item pinned to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub id: u32,
    pub title: &'static str,
    pub time: &'static str,
    pub kind: HighlightKind,
    pub urgent: bool,
}

/// Shortcut tile leading to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAccessTile {
    pub label: &'static str,
    pub target: Screen,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        id: 1,
        title: "AI Workshop & Hackathon",
        time: "Today 6:00 PM",
        kind: HighlightKind::Event,
        urgent: true,
    },
    Highlight {
        id: 2,
        title: "Data Structures Assignment",
        time: "Due Tomorrow",
        kind: HighlightKind::Assignment,
        urgent: true,
    },
    Highlight {
        id: 3,
        title: "Photography Club Meet",
        time: "Dec 2, 4:00 PM",
        kind: HighlightKind::Club,
        urgent: false,
    },
];

// Jobs and Clubs have no screen of their own yet.
const QUICK_ACCESS: [QuickAccessTile; 4] = [
    QuickAccessTile {
        label: "Notes",
        target: Screen::Notes,
    },
    QuickAccessTile {
        label: "Events",
        target: Screen::Events,
    },
    QuickAccessTile {
        label: "Jobs",
        target: Screen::Assignments,
    },
    QuickAccessTile {
        label: "Clubs",
        target: Screen::Events,
    },
];

/// Mounted dashboard for one signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardScreen {
    user_name: String,
}

impl DashboardScreen {
    pub fn mount(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {}", self.user_name)
    }

    pub fn highlights(&self) -> &'static [Highlight] {
        &HIGHLIGHTS
    }

    pub fn urgent_count(&self) -> usize {
        HIGHLIGHTS.iter().filter(|highlight| highlight.urgent).count()
    }

    pub fn quick_access(&self) -> &'static [QuickAccessTile] {
        &QUICK_ACCESS
    }

    /// Target screen of the tile labelled `label`.
    pub fn quick_access_target(&self, label: &str) -> Option<Screen> {
        QUICK_ACCESS
            .iter()
            .find(|tile| tile.label == label)
            .map(|tile| tile.target)
    }
}
