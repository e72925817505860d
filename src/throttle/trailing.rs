//! Leading and trailing edge throttle
//!
//! `Throttle::fire` invokes the callback immediately when idle, then starts a
//! cooldown. Calls made during the cooldown only record their arguments; when
//! the cooldown expires the callback is invoked once more with the most recent
//! arguments and a new cooldown starts. With nothing pending the throttle goes
//! back to idle.
//!
//! ```text
//!   fire(1) fire(2) fire(3)                 fire(4)
//!     │                                       │
//!     ▼                                       ▼
//!   cb(1) ───── interval ───── cb(3) ───── interval ───── cb(4) ─ ...
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// State shared between the throttle handle and its cooldown task
struct Shared<A> {
    interval: Duration,
    callback: Callback<A>,
    state: Mutex<ThrottleState<A>>,
}

struct ThrottleState<A> {
    /// Latest arguments received during the cooldown
    pending: Option<A>,
    /// Running cooldown task; `None` while idle
    cooldown: Option<JoinHandle<()>>,
    /// Bumped whenever a cooldown starts or is cancelled
    generation: u64,
}

impl<A> Shared<A> {
    fn lock_state(&self) -> MutexGuard<'_, ThrottleState<A>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Discard pending arguments and detach the cooldown task
    ///
    /// The caller aborts the returned handle once the lock is released.
    fn reset(&self) -> Option<JoinHandle<()>> {
        let mut state = self.lock_state();
        state.pending = None;
        state.generation += 1;
        state.cooldown.take()
    }
}

/// Rate limiter invoking a callback at most once per interval
///
/// Must be used from within a Tokio runtime. Dropping the throttle stops the
/// cooldown and discards any pending call.
pub struct Throttle<A: Send + 'static> {
    shared: Arc<Shared<A>>,
}

impl<A: Send + 'static> Throttle<A> {
    /// Create a throttle around `callback`
    pub fn new<F>(interval: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                interval,
                callback: Box::new(callback),
                state: Mutex::new(ThrottleState {
                    pending: None,
                    cooldown: None,
                    generation: 0,
                }),
            }),
        }
    }

    /// Request a callback invocation with `args`
    ///
    /// Invokes the callback right away when idle. During a cooldown the
    /// arguments replace any earlier pending ones and are delivered when the
    /// cooldown expires.
    pub fn fire(&self, args: A) {
        {
            let mut state = self.shared.lock_state();

            if state.cooldown.is_some() {
                state.pending = Some(args);
                return;
            }

            // The window opens with the leading call, not when the task is polled
            let deadline = Instant::now() + self.shared.interval;
            state.generation += 1;
            let guard = CooldownGuard {
                shared: Arc::clone(&self.shared),
                generation: state.generation,
            };
            state.cooldown = Some(tokio::spawn(cool_down(guard, deadline)));
        }

        tracing::trace!(interval = ?self.shared.interval, "Throttle leading call");

        // The callback runs without the lock so it may call `fire` itself.
        (self.shared.callback)(args);
    }

    /// Discard any pending call and return to idle
    ///
    /// A trailing call whose callback is already running when `cancel` is
    /// called runs to completion. No call is made after it.
    pub fn cancel(&self) {
        if let Some(handle) = self.shared.reset() {
            handle.abort();
            tracing::debug!("Throttle cooldown cancelled");
        }
    }

    /// Check if a cooldown is running
    pub fn is_cooling(&self) -> bool {
        self.shared.lock_state().cooldown.is_some()
    }

    /// Get the throttle interval
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }
}

impl<A: Send + 'static> Drop for Throttle<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.reset() {
            handle.abort();
        }
    }
}

impl<A: Send + 'static> std::fmt::Debug for Throttle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.shared.interval)
            .field("cooling", &self.is_cooling())
            .finish()
    }
}

/// Returns the throttle to idle when its cooldown task ends
///
/// Covers a callback panicking on the trailing edge. A stale guard, from a
/// cooldown that was cancelled or already replaced, leaves the state alone.
struct CooldownGuard<A> {
    shared: Arc<Shared<A>>,
    generation: u64,
}

impl<A> Drop for CooldownGuard<A> {
    fn drop(&mut self) {
        let mut state = self.shared.lock_state();
        if state.generation == self.generation {
            state.pending = None;
            state.cooldown = None;
        }
    }
}

/// Cooldown loop: one trailing call per interval while calls keep arriving
async fn cool_down<A>(guard: CooldownGuard<A>, mut deadline: Instant) {
    let shared = &guard.shared;

    loop {
        tokio::time::sleep_until(deadline).await;

        let args = {
            let mut state = shared.lock_state();
            // Cancelled (and possibly restarted) while this task was waking up
            if state.generation != guard.generation {
                return;
            }
            match state.pending.take() {
                Some(args) => args,
                None => {
                    state.cooldown = None;
                    return;
                }
            }
        };

        deadline = Instant::now() + shared.interval;
        tracing::trace!("Throttle trailing call");
        (shared.callback)(args);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::sync::{OnceLock, Weak};

    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    use super::*;
    use crate::log::{LogBufferConfig, RecentLogLayer};

    fn recording_throttle(interval_ms: u64) -> (Throttle<u32>, Arc<Mutex<Vec<u32>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = Arc::clone(&calls);
        let throttle = Throttle::new(Duration::from_millis(interval_ms), move |n| {
            calls_clone.lock().unwrap().push(n);
        });
        (throttle, calls)
    }

    fn recorded(calls: &Arc<Mutex<Vec<u32>>>) -> Vec<u32> {
        calls.lock().unwrap().clone()
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_leading_and_trailing_edge() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);
        throttle.fire(3);
        assert_eq!(recorded(&calls), vec![1]);
        assert!(throttle.is_cooling());

        sleep_ms(101).await;
        assert_eq!(recorded(&calls), vec![1, 3]);

        // No further calls: the next expiry goes idle without invoking
        sleep_ms(200).await;
        assert_eq!(recorded(&calls), vec![1, 3]);
        assert!(!throttle.is_cooling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_fire_has_no_trailing_call() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(7);
        sleep_ms(150).await;

        assert_eq!(recorded(&calls), vec![7]);
        assert!(!throttle.is_cooling());

        // Idle again: next fire is immediate
        throttle.fire(8);
        assert_eq!(recorded(&calls), vec![7, 8]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fire_after_trailing_call_waits_for_next_window() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);
        sleep_ms(101).await; // trailing call with 2 at t=100
        assert_eq!(recorded(&calls), vec![1, 2]);

        sleep_ms(49).await; // t=150, still cooling after the trailing call
        throttle.fire(3);
        assert_eq!(recorded(&calls), vec![1, 2]);

        sleep_ms(51).await; // t=201
        assert_eq!(recorded(&calls), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_at_most_once_per_interval_under_steady_load() {
        let (throttle, calls) = recording_throttle(100);

        // Fire every 10ms for 500ms
        for n in 0..50 {
            throttle.fire(n);
            sleep_ms(10).await;
        }

        // Leading call plus one trailing call per elapsed interval
        let calls = recorded(&calls);
        assert_eq!(calls[0], 0);
        assert!(calls.len() <= 6, "too many calls: {calls:?}");
        assert!(calls.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);
        throttle.cancel();
        assert!(!throttle.is_cooling());

        sleep_ms(150).await;
        assert_eq!(recorded(&calls), vec![1]);

        throttle.fire(3);
        assert_eq!(recorded(&calls), vec![1, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);
        drop(throttle);

        sleep_ms(150).await;
        assert_eq!(recorded(&calls), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_starts_at_leading_call() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);

        // The clock moves on before the cooldown task is first polled
        tokio::time::advance(Duration::from_millis(100)).await;
        sleep_ms(1).await;

        assert_eq!(recorded(&calls), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_blocking_caller_does_not_delay_trailing_call() {
        let (throttle, calls) = recording_throttle(100);

        throttle.fire(1);
        throttle.fire(2);
        std::thread::sleep(Duration::from_millis(100));
        sleep_ms(20).await;

        assert_eq!(recorded(&calls), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_trailing_call_returns_to_idle() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = Arc::clone(&calls);
        let throttle = Throttle::new(Duration::from_millis(100), move |n: u32| {
            if n == 99 {
                panic!("callback failed for {n}");
            }
            calls_clone.lock().unwrap().push(n);
        });

        throttle.fire(1);
        throttle.fire(99);
        sleep_ms(150).await;
        assert!(!throttle.is_cooling());

        throttle.fire(5);
        assert_eq!(recorded(&calls), vec![1, 5]);

        sleep_ms(1000).await;
        assert_eq!(recorded(&calls), vec![1, 5]);
        assert!(!throttle.is_cooling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_may_fire_reentrantly() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let handle: Arc<OnceLock<Weak<Throttle<u32>>>> = Arc::new(OnceLock::new());

        let throttle = {
            let calls = Arc::clone(&calls);
            let handle = Arc::clone(&handle);
            Arc::new(Throttle::new(Duration::from_millis(100), move |n: u32| {
                calls.lock().unwrap().push(n);
                // 1 (leading) queues 11, 11 (trailing) queues 21
                if n < 20 {
                    if let Some(throttle) = handle.get().and_then(Weak::upgrade) {
                        throttle.fire(n + 10);
                    }
                }
            }))
        };
        assert!(handle.set(Arc::downgrade(&throttle)).is_ok());

        throttle.fire(1);
        assert_eq!(recorded(&calls), vec![1]);
        assert!(throttle.is_cooling());

        sleep_ms(101).await;
        assert_eq!(recorded(&calls), vec![1, 11]);

        sleep_ms(100).await;
        assert_eq!(recorded(&calls), vec![1, 11, 21]);

        sleep_ms(100).await;
        assert_eq!(recorded(&calls), vec![1, 11, 21]);
        assert!(!throttle.is_cooling());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancel_during_trailing_call() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let started_tx = Mutex::new(started_tx);
        let release_rx = Mutex::new(release_rx);

        let throttle = {
            let calls = Arc::clone(&calls);
            Throttle::new(Duration::from_millis(20), move |n: u32| {
                calls.lock().unwrap().push(n);
                if n == 2 {
                    started_tx.lock().unwrap().send(()).unwrap();
                    release_rx
                        .lock()
                        .unwrap()
                        .recv_timeout(Duration::from_secs(5))
                        .unwrap();
                }
            })
        };

        throttle.fire(1);
        throttle.fire(2);
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();

        // The trailing call for 2 is in progress; 3 waits behind it
        throttle.fire(3);
        throttle.cancel();
        assert!(!throttle.is_cooling());

        release_tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        // The in-flight call completed, nothing ran after it
        assert_eq!(recorded(&calls), vec![1, 2]);
        assert!(!throttle.is_cooling());
    }

    #[tokio::test]
    async fn test_leading_call_logs_interval() {
        let recent =
            RecentLogLayer::new(&LogBufferConfig::default().min_level(Level::TRACE)).unwrap();
        let _guard = tracing_subscriber::registry()
            .with(recent.clone())
            .set_default();

        let (throttle, _calls) = recording_throttle(1500);
        throttle.fire(1);

        let record = recent
            .snapshot()
            .into_iter()
            .find(|r| r.message == "Throttle leading call")
            .unwrap();
        assert_eq!(record.field("interval"), Some("1.5s"));
    }

    #[tokio::test]
    async fn test_interval_and_debug() {
        let (throttle, _calls) = recording_throttle(250);

        assert_eq!(throttle.interval(), Duration::from_millis(250));
        let debug = format!("{throttle:?}");
        assert!(debug.contains("Throttle"));
        assert!(debug.contains("cooling: false"));
    }
}
