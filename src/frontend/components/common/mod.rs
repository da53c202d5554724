//! Common reusable components.

pub mod loader;
pub mod standalone_logo;

pub use loader::LoadingIndicator;
pub use standalone_logo::StandaloneLogo;
