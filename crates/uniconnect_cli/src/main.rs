//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `uniconnect_core` linkage with a scripted session walk.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `uniconnect [config.json]`

use std::process::ExitCode;
use std::time::Duration;
use uniconnect_core::{
    core_version, init_logging_from_config, CampusApp, CoreConfig, LoginForm, Screen,
};

const TICK: Duration = Duration::from_millis(500);

fn load_config() -> Result<CoreConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(CoreConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|err| format!("failed to read config `{path}`: {err}"))?;
    CoreConfig::from_json_str(&raw).map_err(|err| err.to_string())
}

fn run(config: &CoreConfig) {
    let mut app = CampusApp::new(config);
    let mut ticks = 0u32;
    while app.screen() == Screen::Splash {
        app.advance(TICK);
        ticks += 1;
    }
    println!("splash done after {ticks} ticks screen={}", app.screen().as_str());

    app.submit_login(&LoginForm::sign_in("jane@university.edu", "demo"));
    if let Some(dashboard) = app.dashboard() {
        println!(
            "{} urgent={}",
            dashboard.greeting(),
            dashboard.urgent_count()
        );
    }

    app.navigate(Screen::Notes);
    if let Some(notes) = app.notes_mut() {
        notes.download(1);
        let stats = notes.stats();
        println!(
            "notes count={} downloads={}",
            stats.note_count, stats.total_downloads
        );
    }

    app.navigate(Screen::Assignments);
    if let Some(assignments) = app.assignments() {
        let stats = assignments.stats();
        println!(
            "assignments active={} completed={} urgent={}",
            stats.active, stats.completed, stats.urgent
        );
    }

    let nav: Vec<&str> = app.bottom_nav().iter().map(|item| item.label).collect();
    println!("nav={}", nav.join(","));

    app.navigate(Screen::Profile);
    if let Some(profile) = app.profile() {
        println!("profile email={}", profile.email());
    }
    app.logout();
    println!("logged out screen={}", app.screen().as_str());
}

fn main() -> ExitCode {
    println!("uniconnect_core version={}", core_version());

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    log::info!("event=cli_run module=cli status=start");

    run(&config);
    ExitCode::SUCCESS
}
