//! Splash display cycle: phases, timings and the timer that drives them.

pub mod phase;
pub mod timer;
pub mod timing;

pub use phase::SplashPhase;
pub use timer::{SplashTimer, drive};
pub use timing::SplashTiming;
