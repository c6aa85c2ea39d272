use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use portal::time::Timer;

/// [`Timer`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

/// Shared between an effect's spawned task and its teardown, so a task that
/// finishes after unmount can tell it must not navigate.
#[derive(Debug, Clone, Default)]
pub struct MountFlag {
    unmounted: Rc<Cell<bool>>,
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmount(&self) {
        self.unmounted.set(true);
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted.get()
    }
}
