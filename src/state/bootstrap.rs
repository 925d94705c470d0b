//! One-shot startup gate.
//!
//! DESIGN
//! ======
//! `Init -> Ready` happens at most once per app lifetime. The delay is any
//! future (a browser timeout in production), wrapped in an abortable task so
//! tearing the app down before it fires leaves the phase untouched.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{AbortHandle, LocalBoxFuture, abortable};

/// Default preloader duration.
pub const DEFAULT_BOOTSTRAP_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Only the preloader renders.
    #[default]
    Init,
    /// Terminal: the full app renders.
    Ready,
}

impl BootstrapPhase {
    #[must_use]
    pub const fn is_preloading(self) -> bool {
        matches!(self, Self::Init)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("bootstrap timer already armed")]
    AlreadyArmed,
}

/// Owns the app-wide `preloading` flag.
#[derive(Clone, Debug, Default)]
pub struct BootstrapController {
    phase: Rc<Cell<BootstrapPhase>>,
    armed: Rc<Cell<bool>>,
}

impl BootstrapController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> BootstrapPhase {
        self.phase.get()
    }

    /// Arm the startup timer. `on_ready` receives the new phase once, when
    /// `delay` completes.
    ///
    /// The returned task must be spawned on the event loop; the timer handle
    /// cancels it when dropped.
    ///
    /// # Errors
    ///
    /// `AlreadyArmed` on any call after the first; the timer is not re-armable.
    pub fn arm<D, F>(&self, delay: D, on_ready: F) -> Result<(LocalBoxFuture<'static, ()>, BootstrapTimer), BootstrapError>
    where
        D: Future<Output = ()> + 'static,
        F: FnOnce(BootstrapPhase) + 'static,
    {
        if self.armed.replace(true) {
            return Err(BootstrapError::AlreadyArmed);
        }
        let controller = self.clone();
        let (task, handle) = abortable(async move {
            delay.await;
            if controller.complete() {
                log::debug!("bootstrap ready");
                on_ready(controller.phase());
            }
        });
        let task = async move {
            if task.await.is_err() {
                log::debug!("bootstrap timer cancelled before firing");
            }
        }
        .boxed_local();
        Ok((task, BootstrapTimer { handle }))
    }

    fn complete(&self) -> bool {
        if self.phase.get() == BootstrapPhase::Ready {
            return false;
        }
        self.phase.set(BootstrapPhase::Ready);
        true
    }
}

/// Cancels the pending bootstrap transition when dropped.
#[derive(Debug)]
pub struct BootstrapTimer {
    handle: AbortHandle,
}

impl BootstrapTimer {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for BootstrapTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
