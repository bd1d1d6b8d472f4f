use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    Fired,
    Cancelled,
}

/// Handle to an armed single-shot timer. Cancelling or dropping the handle
/// makes the timer future resolve to [`TimerOutcome::Cancelled`].
#[derive(Debug)]
pub struct ReplyTimer {
    cancel: oneshot::Sender<()>,
}

impl ReplyTimer {
    pub fn arm(delay: Duration) -> (ReplyTimer, impl Future<Output = TimerOutcome>) {
        let (tx, rx) = oneshot::channel::<()>();
        let fired = async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => TimerOutcome::Fired,
                _ = rx => TimerOutcome::Cancelled,
            }
        };
        (ReplyTimer { cancel: tx }, fired)
    }

    pub fn cancel(self) {
        _ = self.cancel.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (handle, fired) = ReplyTimer::arm(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        assert_eq!(fired.await, TimerOutcome::Fired);
        assert!(started.elapsed() >= Duration::from_millis(800));
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (handle, fired) = ReplyTimer::arm(Duration::from_secs(60));
        handle.cancel();
        assert_eq!(fired.await, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_cancels() {
        let (handle, fired) = ReplyTimer::arm(Duration::from_secs(60));
        drop(handle);
        assert_eq!(fired.await, TimerOutcome::Cancelled);
    }
}
