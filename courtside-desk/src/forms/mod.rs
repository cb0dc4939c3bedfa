//! CRUD form drafts
//!
//! One draft struct per entity, validated with `validator` before the
//! mutation goes out. The flow per form: load the existing record when
//! editing, validate, submit under the [`SubmitGuard`], and on success
//! clear the draft and refetch. A failed mutation leaves the draft
//! intact for correction.

mod bet;
mod court;
mod game;
mod profile;
mod session;
mod shuttle;

pub use bet::{BetDraft, BettorPairDraft};
pub use court::CourtDraft;
pub use game::{GameDraft, ShuttleQty};
pub use profile::ProfileDraft;
pub use session::SessionDraft;
pub use shuttle::ShuttleDraft;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{DeskError, DeskResult};

/// Guards a form against double submission: while one submit is in
/// flight, further attempts fail with [`DeskError::SubmitInFlight`]
/// instead of firing a second mutation.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

struct InFlightReset<'a>(&'a AtomicBool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a submission future exclusively. Rejects when another
    /// submission through this guard has not resolved yet.
    pub async fn run<T, Fut>(&self, fut: Fut) -> DeskResult<T>
    where
        Fut: Future<Output = DeskResult<T>>,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DeskError::SubmitInFlight);
        }
        let _reset = InFlightReset(&self.in_flight);
        fut.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn second_submit_is_rejected_while_first_is_pending() {
        let guard = SubmitGuard::new();
        let (release, gate) = oneshot::channel::<()>();

        let first = {
            let guard = guard.clone();
            tokio::spawn(async move {
                guard
                    .run(async move {
                        let _ = gate.await;
                        Ok::<_, DeskError>(1)
                    })
                    .await
            })
        };

        // Let the first submission claim the guard.
        tokio::task::yield_now().await;

        let second = guard.run(async { Ok::<_, DeskError>(2) }).await;
        assert!(matches!(second, Err(DeskError::SubmitInFlight)));

        release.send(()).unwrap();
        assert_eq!(first.await.unwrap().unwrap(), 1);

        // Resolved: the guard is free again.
        let third = guard.run(async { Ok::<_, DeskError>(3) }).await.unwrap();
        assert_eq!(third, 3);
    }

    #[tokio::test]
    async fn guard_is_released_after_a_failed_submit() {
        let guard = SubmitGuard::new();
        let failed: DeskResult<()> = guard
            .run(async { Err(DeskError::NotSignedIn) })
            .await;
        assert!(failed.is_err());

        let ok = guard.run(async { Ok::<_, DeskError>(()) }).await;
        assert!(ok.is_ok());
    }
}
