//! Timer that walks a splash through its phases.

use super::{SplashPhase, SplashTiming};
use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Runs one display cycle, reporting every phase entered after `Showing`.
///
/// Dropping the future at either wait stops the cycle; nothing is reported
/// after that.
pub async fn drive<F>(timing: SplashTiming, mut on_phase: F)
where
    F: FnMut(SplashPhase),
{
    let mut phase = SplashPhase::Showing;
    while let Some(next) = phase.next() {
        tokio::time::sleep(timing.delay_before(next)).await;
        phase = next;
        debug!("Splash entered phase {phase}");
        on_phase(phase);
    }
}

/// A splash cycle running on the tokio runtime.
///
/// Both waits belong to one task, so cancelling (or dropping) the timer at any
/// point before `Done` means the completion callback never runs.
pub struct SplashTimer {
    task: JoinHandle<()>,
    phase: watch::Receiver<SplashPhase>,
}

impl SplashTimer {
    pub fn start<F>(timing: SplashTiming, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, phase) = watch::channel(SplashPhase::Showing);
        let task = tokio::spawn(async move {
            drive(timing, |phase| {
                sender.send_replace(phase);
            })
            .await;
            on_complete();
        });

        Self { task, phase }
    }

    pub fn phase(&self) -> SplashPhase {
        *self.phase.borrow()
    }

    pub fn is_visible(&self) -> bool {
        self.phase().is_visible()
    }

    /// Receiver that sees every phase change.
    pub fn subscribe(&self) -> watch::Receiver<SplashPhase> {
        self.phase.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("Cancelling splash timer in phase {}", self.phase());
            self.task.abort();
        }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
