//! Splash phases.

/// Where a splash is in its display cycle.
///
/// Phases only ever move forward: `Showing -> FadingOut -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Showing,
    FadingOut,
    Done,
}

impl SplashPhase {
    /// The phase that follows this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Showing => Some(Self::FadingOut),
            Self::FadingOut => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Only `Showing` counts as visible; the fade already runs on a hidden panel.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Showing)
    }

    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Showing => "splash-visible",
            Self::FadingOut => "splash-fading",
            Self::Done => "splash-hidden",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Showing => "showing",
            Self::FadingOut => "fading-out",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for SplashPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
