//! App state: session, splash timer and the one mounted screen.
//!
//! # Responsibility
//! - Route host input (clock ticks, login, navigation, logout) to the
//!   session state machine.
//! - Mount the page state of the visible screen and drop it on leave.
//!
//! # Invariants
//! - A screen is mounted iff the session is authenticated, and it always
//!   matches `session.screen()`.
//! - Leaving a screen discards its record mutations; coming back mounts
//!   fresh seed data.
//! - The splash timer fires at most once and only while on `Splash`.

use crate::config::CoreConfig;
use crate::screens::{
    bottom_nav, AssignmentsScreen, DashboardScreen, EventsScreen, NavItem, NotesScreen,
    ProfileScreen,
};
use crate::session::{LoginForm, Screen, Session, SplashTimer};
use log::{debug, info};
use std::time::Duration;

/// Page state of the visible authenticated screen.
#[derive(Debug, Clone, PartialEq)]
pub enum MountedScreen {
    Dashboard(DashboardScreen),
    Events(EventsScreen),
    Notes(NotesScreen),
    Assignments(AssignmentsScreen),
    Profile(ProfileScreen),
}

impl MountedScreen {
    fn mount(screen: Screen, user_name: &str) -> Option<Self> {
        match screen {
            Screen::Splash | Screen::Login => None,
            Screen::Dashboard => Some(Self::Dashboard(DashboardScreen::mount(user_name))),
            Screen::Events => Some(Self::Events(EventsScreen::mount())),
            Screen::Notes => Some(Self::Notes(NotesScreen::mount())),
            Screen::Assignments => Some(Self::Assignments(AssignmentsScreen::mount())),
            Screen::Profile => Some(Self::Profile(ProfileScreen::mount(user_name))),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Self::Dashboard(_) => Screen::Dashboard,
            Self::Events(_) => Screen::Events,
            Self::Notes(_) => Screen::Notes,
            Self::Assignments(_) => Screen::Assignments,
            Self::Profile(_) => Screen::Profile,
        }
    }
}

/// Whole-app state driven by the host shell.
#[derive(Debug, Clone)]
pub struct CampusApp {
    session: Session,
    splash: SplashTimer,
    mounted: Option<MountedScreen>,
}

impl Default for CampusApp {
    fn default() -> Self {
        Self::new(&CoreConfig::default())
    }
}

impl CampusApp {
    /// Starts on the splash screen with the configured hold time.
    pub fn new(config: &CoreConfig) -> Self {
        debug!(
            "event=app_new module=app splash_delay_ms={}",
            config.splash_delay_ms
        );
        Self {
            session: Session::new(),
            splash: SplashTimer::new(config.splash_delay()),
            mounted: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn splash(&self) -> &SplashTimer {
        &self.splash
    }

    /// Feeds host clock time to the splash timer.
    ///
    /// Returns `true` on the tick that moves splash → login.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.session.screen() != Screen::Splash {
            self.splash.cancel();
            return false;
        }
        self.splash.advance(elapsed) && self.session.finish_splash()
    }

    /// Submits the login form. Returns `false` when not on the login screen.
    pub fn submit_login(&mut self, form: &LoginForm) -> bool {
        if self.session.login(form).is_none() {
            return false;
        }
        self.remount();
        true
    }

    /// Jumps to an authenticated screen, remounting it from seed.
    ///
    /// Selecting the visible screen keeps its current state.
    pub fn navigate(&mut self, target: Screen) -> bool {
        if self.session.screen() == target && self.mounted.is_some() {
            return true;
        }
        if !self.session.navigate(target) {
            return false;
        }
        self.remount();
        true
    }

    /// Signs out and drops all page state of the session.
    pub fn logout(&mut self) -> bool {
        if !self.session.logout() {
            return false;
        }
        self.mounted = None;
        true
    }

    /// Bottom bar items; empty while signed out.
    pub fn bottom_nav(&self) -> Vec<NavItem> {
        if self.session.is_authenticated() {
            bottom_nav(self.session.screen())
        } else {
            Vec::new()
        }
    }

    pub fn mounted(&self) -> Option<&MountedScreen> {
        self.mounted.as_ref()
    }

    pub fn dashboard(&self) -> Option<&DashboardScreen> {
        match self.mounted.as_ref()? {
            MountedScreen::Dashboard(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&ProfileScreen> {
        match self.mounted.as_ref()? {
            MountedScreen::Profile(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn notes(&self) -> Option<&NotesScreen> {
        match self.mounted.as_ref()? {
            MountedScreen::Notes(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn notes_mut(&mut self) -> Option<&mut NotesScreen> {
        match self.mounted.as_mut()? {
            MountedScreen::Notes(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn events(&self) -> Option<&EventsScreen> {
        match self.mounted.as_ref()? {
            MountedScreen::Events(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn events_mut(&mut self) -> Option<&mut EventsScreen> {
        match self.mounted.as_mut()? {
            MountedScreen::Events(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn assignments(&self) -> Option<&AssignmentsScreen> {
        match self.mounted.as_ref()? {
            MountedScreen::Assignments(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn assignments_mut(&mut self) -> Option<&mut AssignmentsScreen> {
        match self.mounted.as_mut()? {
            MountedScreen::Assignments(screen) => Some(screen),
            _ => None,
        }
    }

    fn remount(&mut self) {
        let screen = self.session.screen();
        self.mounted = MountedScreen::mount(screen, self.session.user_name());
        info!("event=screen_mount module=app screen={}", screen.as_str());
    }
}
