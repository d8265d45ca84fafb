use std::time::Duration;
use uniconnect_core::{derive_display_name, CampusApp, CoreConfig, LoginForm, Screen};

fn app_on_login() -> CampusApp {
    let mut app = CampusApp::new(&CoreConfig::default());
    assert!(app.advance(Duration::from_millis(2_500)));
    app
}

#[test]
fn splash_moves_to_login_once_after_two_and_a_half_seconds() {
    let mut app = CampusApp::new(&CoreConfig::default());
    assert_eq!(app.screen(), Screen::Splash);

    let mut transitions = 0;
    for _ in 0..4 {
        if app.advance(Duration::from_millis(500)) {
            transitions += 1;
        }
    }
    assert_eq!(app.screen(), Screen::Splash);

    for _ in 0..10 {
        if app.advance(Duration::from_millis(500)) {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.splash().has_fired());
}

#[test]
fn configured_splash_delay_is_honored() {
    let config = CoreConfig::from_json_str(r#"{ "splash_delay_ms": 100 }"#).unwrap();
    let mut app = CampusApp::new(&config);
    assert!(!app.advance(Duration::from_millis(99)));
    assert!(app.advance(Duration::from_millis(1)));
    assert_eq!(app.screen(), Screen::Login);
}

#[test]
fn splash_timer_cancels_once_splash_is_gone() {
    let mut app = app_on_login();
    app.submit_login(&LoginForm::sign_in("jane@x.edu", "pw"));
    app.logout();
    assert!(!app.advance(Duration::from_secs(5)));
    assert_eq!(app.screen(), Screen::Login);
}

#[test]
fn login_from_email_capitalizes_local_part() {
    let mut app = app_on_login();
    assert!(app.submit_login(&LoginForm::sign_in("jane@x.edu", "")));
    assert_eq!(app.session().user_name(), "Jane");
    assert_eq!(app.screen(), Screen::Dashboard);
}

#[test]
fn sign_up_name_wins_regardless_of_email() {
    let mut app = app_on_login();
    assert!(app.submit_login(&LoginForm::sign_up("bob", "jane@x.edu", "")));
    assert_eq!(app.session().user_name(), "Bob");
    assert_eq!(derive_display_name(Some("bob"), "someone@else.org"), "Bob");
}

#[test]
fn empty_form_falls_back_to_student() {
    let mut app = app_on_login();
    assert!(app.submit_login(&LoginForm::default()));
    assert_eq!(app.session().user_name(), "Student");
}

#[test]
fn signed_out_session_stays_on_public_screens() {
    let mut app = CampusApp::new(&CoreConfig::default());
    for target in Screen::ALL {
        assert!(!app.navigate(target));
        assert_eq!(app.screen(), Screen::Splash);
    }
    assert!(!app.submit_login(&LoginForm::sign_in("jane@x.edu", "")));
    assert!(!app.session().is_authenticated());
}

#[test]
fn user_name_is_empty_exactly_when_signed_out() {
    let mut app = app_on_login();
    assert_eq!(app.session().user_name(), "");
    app.submit_login(&LoginForm::sign_in("jane@x.edu", ""));
    assert!(!app.session().user_name().is_empty());
    app.logout();
    assert_eq!(app.session().user_name(), "");
    assert!(!app.session().is_authenticated());
}

#[test]
fn navigation_is_a_direct_jump_between_app_screens() {
    let mut app = app_on_login();
    app.submit_login(&LoginForm::sign_in("jane@x.edu", ""));

    for target in [
        Screen::Events,
        Screen::Notes,
        Screen::Assignments,
        Screen::Profile,
        Screen::Dashboard,
    ] {
        assert!(app.navigate(target));
        assert_eq!(app.screen(), target);
        assert_eq!(app.mounted().unwrap().screen(), target);
    }

    let tile_target = app.dashboard().unwrap().quick_access_target("Jobs").unwrap();
    assert!(app.navigate(tile_target));
    assert_eq!(app.screen(), Screen::Assignments);
}

#[test]
fn logout_then_login_resets_session_mutations() {
    let mut app = app_on_login();
    app.submit_login(&LoginForm::sign_in("jane@x.edu", ""));
    app.navigate(Screen::Notes);
    let notes = app.notes_mut().unwrap();
    notes.download(1);
    notes.download(1);
    assert_eq!(app.notes().unwrap().notes().get(1).unwrap().downloads, 236);

    app.navigate(Screen::Profile);
    assert!(app.logout());
    assert_eq!(app.screen(), Screen::Login);

    app.submit_login(&LoginForm::sign_in("jane@x.edu", ""));
    app.navigate(Screen::Notes);
    assert_eq!(app.notes().unwrap().notes().get(1).unwrap().downloads, 234);
}
