//! Timer-armed cancellation for upstream calls
//!
//! A spawned timer task cancels a token once the deadline passes. The guard
//! aborts the timer when dropped, so every exit path clears it.

use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::UpstreamError;

/// Timer task that cancels a token after a delay
#[derive(Debug)]
pub struct AbortTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl AbortTimer {
    /// Spawn a timer that cancels the returned token after `after`
    #[must_use]
    pub fn arm(after: Duration) -> Self {
        let token = CancellationToken::new();
        let fire = token.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            fire.cancel();
        });
        Self { token, handle }
    }

    /// Token cancelled when the timer fires
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Whether the deadline has passed
    #[must_use]
    pub fn fired(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for AbortTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Race `call` against a timer; the loser is dropped
///
/// When the timer wins the call future is dropped, which aborts any
/// in-flight request, and `UpstreamError::Timeout` is returned.
pub async fn with_abort_timer<T, F>(after: Duration, call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    let timer = AbortTimer::arm(after);
    let token = timer.token();

    tokio::select! {
        biased;
        () = token.cancelled() => Err(UpstreamError::Timeout),
        result = call => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fires_after_delay() {
        let timer = AbortTimer::arm(Duration::from_millis(20));
        timer.token().cancelled().await;
        assert!(timer.fired());
    }

    #[tokio::test]
    async fn dropped_timer_never_fires() {
        let timer = AbortTimer::arm(Duration::from_millis(30));
        let token = timer.token();
        drop(timer);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn fast_call_wins() {
        let result = with_abort_timer(Duration::from_secs(5), async { Ok::<_, UpstreamError>(7) })
            .await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn call_errors_pass_through() {
        let result = with_abort_timer(Duration::from_secs(5), async {
            Err::<(), _>(UpstreamError::Status(503))
        })
        .await;
        assert_eq!(result, Err(UpstreamError::Status(503)));
    }

    #[tokio::test]
    async fn slow_call_is_aborted() {
        struct DropFlag(std::sync::Arc<std::sync::atomic::AtomicBool>);
        impl Drop for DropFlag {
            fn drop(&mut self) {
                self.0.store(true, std::sync::atomic::Ordering::SeqCst);
            }
        }

        let dropped = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = DropFlag(std::sync::Arc::clone(&dropped));

        let started = tokio::time::Instant::now();
        let result = with_abort_timer(Duration::from_millis(50), async move {
            let _flag = flag;
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, UpstreamError>(())
        })
        .await;

        assert_eq!(result, Err(UpstreamError::Timeout));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(dropped.load(std::sync::atomic::Ordering::SeqCst));
    }
}
