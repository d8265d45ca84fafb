//! Bottom navigation bar.

use crate::session::Screen;

/// One bottom-bar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    /// Whether this item is the visible screen.
    pub active: bool,
}

const NAV_DESTINATIONS: [(Screen, &str); 4] = [
    (Screen::Dashboard, "Home"),
    (Screen::Notes, "Notes"),
    (Screen::Events, "Events"),
    (Screen::Profile, "Profile"),
];

/// Bottom bar items with the active flag set for `current`.
pub fn bottom_nav(current: Screen) -> Vec<NavItem> {
    NAV_DESTINATIONS
        .into_iter()
        .map(|(screen, label)| NavItem {
            screen,
            label,
            active: screen == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::bottom_nav;
    use crate::session::Screen;

    #[test]
    fn marks_only_current_screen_active() {
        let items = bottom_nav(Screen::Notes);
        let labels: Vec<&str> = items.iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Home", "Notes", "Events", "Profile"]);
        let active: Vec<Screen> = items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.screen)
            .collect();
        assert_eq!(active, vec![Screen::Notes]);
    }

    #[test]
    fn assignments_has_no_bottom_bar_entry() {
        assert!(bottom_nav(Screen::Assignments)
            .iter()
            .all(|item| !item.active));
    }
}
