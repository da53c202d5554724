//! Branded, timed splash screen for Dioxus desktop applications.
//!
//! [`SplashScreen`] shows a full-screen panel, fades it out after its display
//! time and then calls its completion handler exactly once. The timing logic
//! lives in [`backend::splash`] and can also run headless on tokio through
//! [`SplashTimer`].

pub mod backend;
pub mod frontend;
pub mod utils;

pub use backend::splash::{SplashPhase, SplashTimer, SplashTiming};
pub use frontend::components::splash::SplashScreen;
