//! Bounded graceful shutdown
//!
//! Once the shutdown token fires, open connections get at most
//! `server.shutdown_timeout_secs` to finish before the server returns.

use std::{future::IntoFuture, io, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection finished
    Drained,
    /// The deadline passed with connections still open
    DeadlineElapsed,
}

/// Drive `serve` until it ends, bounding the drain after `signal` fires
///
/// `serve` is expected to stop accepting on the same token (for example
/// `with_graceful_shutdown(token.clone().cancelled_owned())`). With no
/// deadline the drain is unbounded.
pub async fn serve_with_deadline<S>(
    serve: S,
    signal: CancellationToken,
    deadline: Option<Duration>,
) -> io::Result<ShutdownOutcome>
where
    S: IntoFuture<Output = io::Result<()>>,
{
    let serve = serve.into_future();
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => return result.map(|()| ShutdownOutcome::Drained),
        () = signal.cancelled() => {}
    }

    let Some(deadline) = deadline else {
        return serve.await.map(|()| ShutdownOutcome::Drained);
    };

    info!("⏳ Waiting up to {:?} for connections to close...", deadline);

    if let Ok(result) = tokio::time::timeout(deadline, serve).await {
        result.map(|()| ShutdownOutcome::Drained)
    } else {
        warn!(?deadline, "Shutdown deadline elapsed with connections still open");
        Ok(ShutdownOutcome::DeadlineElapsed)
    }
}
