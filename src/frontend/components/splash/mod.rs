//! Splash screen overlay.

pub mod splash_screen;

pub use splash_screen::SplashScreen;
