//! Session and navigation model.
//!
//! # Responsibility
//! - Define the screen enum and the login/splash inputs that drive it.
//! - Keep authentication and the visible screen consistent.
//!
//! # Invariants
//! - Signed-out sessions only ever show `Splash` or `Login`.

pub mod login;
pub mod screen;
pub mod splash;
pub mod state;

pub use login::{derive_display_name, LoginForm, LoginMode};
pub use screen::Screen;
pub use splash::SplashTimer;
pub use state::{Session, SessionId, SessionUser};
