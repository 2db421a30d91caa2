//! Coalescing bursts of input events.

use std::time::Duration;
use tokio::sync::mpsc;

/// A stream of input events that only yields once the input has been quiet
/// for `delay`, and then only the most recent event.
pub struct Debounced<T> {
    /// Where the raw events come from.
    input: mpsc::Receiver<T>,
    /// The quiet period that must pass before an event is yielded.
    delay: Duration,
}

impl<T> Debounced<T> {
    /// Debounce the events received on `input`.
    pub fn new(input: mpsc::Receiver<T>, delay: Duration) -> Self {
        Self { input, delay }
    }

    /// The quiet period this stream waits for.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the next settled event.
    ///
    /// Every event that arrives before the delay runs out replaces the pending
    /// one and restarts the delay. If the input closes while an event is
    /// pending, that event is returned right away. Returns `None` once the
    /// input is closed and nothing is pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut pending = self.input.recv().await?;
        loop {
            tokio::select! {
                biased;
                event = self.input.recv() => match event {
                    Some(event) => pending = event,
                    None => return Some(pending),
                },
                () = tokio::time::sleep(self.delay) => return Some(pending),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debounced;
    use std::time::Duration;
    use tokio::{sync::mpsc, time::Instant};

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_yields_only_last_event() {
        let (tx, rx) = mpsc::channel(8);
        let mut debounced = Debounced::new(rx, DELAY);
        let start = Instant::now();

        tokio::spawn(async move {
            for text in ["p", "pe", "per", "peru"] {
                tx.send(text).await.expect("receiver alive");
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            // Keep the input open past the quiet period.
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        assert_eq!(debounced.next().await, Some("peru"));
        // The last event arrived at 150ms, and the delay restarts with it.
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(450) && elapsed < Duration::from_millis(500),
            "settled after {:?}",
            elapsed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_yield_separately() {
        let (tx, rx) = mpsc::channel(8);
        let mut debounced = Debounced::new(rx, DELAY);

        tokio::spawn(async move {
            tx.send("a").await.expect("receiver alive");
            tokio::time::sleep(Duration::from_millis(100)).await;
            tx.send("ab").await.expect("receiver alive");
            tokio::time::sleep(Duration::from_millis(500)).await;
            tx.send("abc").await.expect("receiver alive");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        assert_eq!(debounced.next().await, Some("ab"));
        assert_eq!(debounced.next().await, Some("abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_flushes_pending_event() {
        let (tx, rx) = mpsc::channel(8);
        let mut debounced = Debounced::new(rx, DELAY);
        let start = Instant::now();

        tx.send("chile").await.expect("receiver alive");
        drop(tx);

        assert_eq!(debounced.next().await, Some("chile"));
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(debounced.next().await, None);
    }
}
