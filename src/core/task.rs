// src/core/task.rs

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A unit of work that starts after a fixed delay on the tokio timer.
///
/// Dropping the handle leaves the task running; call [`DelayedTask::cancel`]
/// to stop it. Tests drive the delay with tokio's paused clock.
#[derive(Debug)]
pub struct DelayedTask {
    handle: JoinHandle<()>,
}

impl DelayedTask {
    pub fn spawn<F>(delay: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
            work.await;
        });
        Self { handle }
    }

    /// Aborts the task. Has no effect once the work has finished.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling delayed task.");
            self.handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
