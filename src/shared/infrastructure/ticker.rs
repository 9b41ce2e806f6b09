use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Recurring fixed-cadence callback running on its own task.
///
/// The first call happens one `period` after spawning. The loop stops when the callback
/// returns `ControlFlow::Break`, when `cancel` is called, or when the ticker is dropped.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<F, Fut>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if on_tick().await.is_break() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod ticker_tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(limit: usize) -> (Arc<AtomicUsize>, impl FnMut() -> std::future::Ready<ControlFlow<()>>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let on_tick = move || {
            let ticks = seen.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(if ticks >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            })
        };
        (count, on_tick)
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_tick_once_per_period() {
        let (count, on_tick) = counting(usize::MAX);
        let _ticker = Ticker::spawn(Duration::from_secs(1), on_tick);

        time::sleep(Duration::from_millis(3_500)).await;

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_stop_when_the_callback_breaks() {
        let (count, on_tick) = counting(2);
        let ticker = Ticker::spawn(Duration::from_secs(1), on_tick);

        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(ticker.is_finished());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_not_tick_after_cancel() {
        let (count, on_tick) = counting(usize::MAX);
        let ticker = Ticker::spawn(Duration::from_secs(1), on_tick);

        time::sleep(Duration::from_millis(1_500)).await;
        ticker.cancel();
        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_not_tick_after_drop() {
        let (count, on_tick) = counting(usize::MAX);
        drop(Ticker::spawn(Duration::from_secs(1), on_tick));

        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
