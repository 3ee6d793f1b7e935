//! Handle to the background expiry sweep

use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the sweeper task; stopping or dropping the handle aborts it
#[derive(Debug)]
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    pub(super) fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    pub fn stop(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        debug!("Stopping token sweeper");
        self.handle.abort();
    }
}
