//! Thread-shareable slider handle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::SliderCommand;
use crate::controller::SliderController;
use crate::error::Result;
use crate::host::HostSurface;

/// A cloneable handle to a [`SliderController`] behind a mutex.
///
/// Commands from any clone are serialized: each [`dispatch`](Self::dispatch)
/// runs to completion before the next one starts.
///
/// The lock is not reentrant. Signal slots and host methods run while it is
/// held, so they must not call back into the same handle.
pub struct SharedSliderController<H: HostSurface> {
    inner: Arc<Mutex<SliderController<H>>>,
}

impl<H: HostSurface> Clone for SharedSliderController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: HostSurface> SharedSliderController<H> {
    /// Wrap a controller.
    pub fn new(controller: SliderController<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Process one input command.
    pub fn dispatch(&self, command: SliderCommand) -> Result<()> {
        self.inner.lock().dispatch(command)
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut SliderController<H>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// The committed slide index.
    pub fn index(&self) -> usize {
        self.inner.lock().index()
    }

    /// Number of live handles to this controller.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<H: HostSurface> std::fmt::Debug for SharedSliderController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSliderController")
            .field("handles", &self.handle_count())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    SharedSliderController<crate::HeadlessSurface>: Send,
    Sync,
    Clone
);
