//! Routed pages.

pub mod home;
pub mod splash;

pub use home::Home;
pub use splash::Splash;
