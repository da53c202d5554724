//! Splash timings.

use super::SplashPhase;
use std::time::Duration;

/// How long the splash stays up before fading.
pub const DISPLAY_MS: u64 = 2000;
/// Length of the fade-out transition.
pub const FADE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTiming {
    pub display: Duration,
    pub fade: Duration,
}

impl SplashTiming {
    pub const fn from_millis(display_ms: u64, fade_ms: u64) -> Self {
        Self {
            display: Duration::from_millis(display_ms),
            fade: Duration::from_millis(fade_ms),
        }
    }

    /// Wait that precedes entering `phase`.
    pub const fn delay_before(&self, phase: SplashPhase) -> Duration {
        match phase {
            SplashPhase::Showing => Duration::ZERO,
            SplashPhase::FadingOut => self.display,
            SplashPhase::Done => self.fade,
        }
    }

    pub fn total(&self) -> Duration {
        self.display + self.fade
    }
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self::from_millis(DISPLAY_MS, FADE_MS)
    }
}
