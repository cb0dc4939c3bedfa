//! Background polling refresh
//!
//! Coarse fixed-interval refresh of session data. No push channel:
//! every fetch result is treated as authoritative and handed to the
//! subscriber as-is.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a running refresh loop
pub struct Poller {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a refresh loop firing `tick` at the given interval.
    ///
    /// The first tick fires immediately so a view never waits a full
    /// interval for its initial data.
    pub fn spawn<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => tick().await,
                }
            }
            tracing::debug!("poller stopped");
        });
        Self { cancel, handle }
    }

    /// Stop the loop and wait for the task to finish. Called on
    /// sign-out and when leaving a polled view.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn ticks_immediately_and_then_at_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let poller = Poller::spawn(Duration::from_secs(60), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(130)).await;
        let ticks = count.load(Ordering::SeqCst);
        assert!(ticks >= 3, "expected immediate tick plus two intervals, got {ticks}");

        poller.shutdown().await;
        let after_shutdown = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_shutdown);
    }
}
