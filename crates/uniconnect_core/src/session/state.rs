//! Session and navigation state machine.
//!
//! # Responsibility
//! - Track the visible screen and the signed-in user.
//! - Own every screen transition: splash, login, jumps, logout.
//!
//! # Invariants
//! - Without a user, the screen is `Splash` or `Login`.
//! - `user_name()` is empty iff no user is signed in.
//! - No transition returns an error; rejected requests report `false`.

use crate::session::login::LoginForm;
use crate::session::screen::Screen;
use log::{debug, info};
use uuid::Uuid;

/// Correlation id minted for each successful login.
pub type SessionId = Uuid;

/// Signed-in user of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub session_id: SessionId,
    pub display_name: String,
}

/// Visible screen plus authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    user: Option<SessionUser>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session on the splash screen, signed out.
    pub fn new() -> Self {
        Self {
            screen: Screen::Splash,
            user: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Display name of the signed-in user, empty when signed out.
    pub fn user_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.display_name.as_str())
            .unwrap_or_default()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.user.as_ref().map(|user| user.session_id)
    }

    /// Splash → login. Only valid while the splash screen is showing.
    pub fn finish_splash(&mut self) -> bool {
        if self.screen != Screen::Splash {
            return false;
        }
        self.screen = Screen::Login;
        info!("event=splash_done module=session status=ok to=login");
        true
    }

    /// Login → dashboard. Accepts any input while on the login screen.
    ///
    /// Returns the derived display name, or `None` when not on the login
    /// screen.
    pub fn login(&mut self, form: &LoginForm) -> Option<&str> {
        if self.screen != Screen::Login {
            debug!(
                "event=login module=session status=ignored screen={}",
                self.screen.as_str()
            );
            return None;
        }

        let user = SessionUser {
            session_id: Uuid::new_v4(),
            display_name: form.display_name(),
        };
        info!(
            "event=login module=session status=ok session_id={} mode={} name_chars={}",
            user.session_id,
            form.mode.as_str(),
            user.display_name.chars().count()
        );
        self.screen = Screen::Dashboard;
        self.user = Some(user);
        Some(self.user_name())
    }

    /// Jumps to an authenticated screen.
    ///
    /// Splash/login targets and jumps while signed out are ignored. Jumping
    /// to the current screen is accepted and reports `true`.
    pub fn navigate(&mut self, target: Screen) -> bool {
        if !self.is_authenticated() || !target.requires_auth() {
            debug!(
                "event=navigate module=session status=ignored from={} to={}",
                self.screen.as_str(),
                target.as_str()
            );
            return false;
        }
        debug!(
            "event=navigate module=session status=ok from={} to={}",
            self.screen.as_str(),
            target.as_str()
        );
        self.screen = target;
        true
    }

    /// Signs out from any screen and returns to the login form.
    pub fn logout(&mut self) -> bool {
        let Some(user) = self.user.take() else {
            return false;
        };
        info!(
            "event=logout module=session status=ok session_id={} from={}",
            user.session_id,
            self.screen.as_str()
        );
        self.screen = Screen::Login;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::session::login::LoginForm;
    use crate::session::screen::Screen;

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.finish_splash();
        session.login(&LoginForm::sign_in("jane@x.edu", "pw"));
        session
    }

    #[test]
    fn starts_signed_out_on_splash() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Splash);
        assert!(!session.is_authenticated());
        assert_eq!(session.user_name(), "");
    }

    #[test]
    fn finish_splash_only_applies_once() {
        let mut session = Session::new();
        assert!(session.finish_splash());
        assert!(!session.finish_splash());
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn login_is_ignored_outside_login_screen() {
        let mut session = Session::new();
        assert!(session.login(&LoginForm::sign_in("a@b", "")).is_none());
        assert_eq!(session.screen(), Screen::Splash);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_lands_on_dashboard_with_derived_name() {
        let session = signed_in();
        assert_eq!(session.screen(), Screen::Dashboard);
        assert_eq!(session.user_name(), "Jane");
        assert!(session.session_id().is_some());
    }

    #[test]
    fn navigate_requires_authentication_and_app_screen() {
        let mut session = Session::new();
        assert!(!session.navigate(Screen::Notes));
        assert_eq!(session.screen(), Screen::Splash);

        let mut session = signed_in();
        assert!(session.navigate(Screen::Notes));
        assert_eq!(session.screen(), Screen::Notes);
        assert!(!session.navigate(Screen::Login));
        assert!(!session.navigate(Screen::Splash));
        assert_eq!(session.screen(), Screen::Notes);
    }

    #[test]
    fn logout_clears_user_from_any_screen() {
        let mut session = signed_in();
        session.navigate(Screen::Assignments);
        assert!(session.logout());
        assert_eq!(session.screen(), Screen::Login);
        assert!(!session.is_authenticated());
        assert_eq!(session.user_name(), "");
        assert!(!session.logout());
    }

    #[test]
    fn each_login_mints_a_new_session_id() {
        let mut session = signed_in();
        let first = session.session_id().unwrap();
        session.logout();
        session.login(&LoginForm::sign_in("jane@x.edu", "pw"));
        assert_ne!(session.session_id().unwrap(), first);
    }
}
