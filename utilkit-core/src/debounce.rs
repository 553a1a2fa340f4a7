use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Target<A> = Box<dyn Fn(A) + Send + Sync>;

/// Internal shared state for the debouncer
struct DebouncerInner<A> {
    target: Target<A>,
    delay: Duration,
    runtime: Handle,
    /// The single scheduled invocation, if any
    pending: Mutex<Option<JoinHandle<()>>>,
    /// Bumped on every call and cancel; a scheduled task only fires if its
    /// generation is still current
    generation: AtomicU64,
}

impl<A> DebouncerInner<A> {
    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Collapses bursts of calls into a single delayed call
///
/// Every [`call`](Debouncer::call) cancels the previously scheduled
/// invocation (if it has not fired yet) and schedules a new one `delay` after
/// the latest call, carrying the latest arguments. The target never runs
/// inside `call` itself.
///
/// Dropping the debouncer does not cancel a scheduled invocation; use
/// [`cancel`](Debouncer::cancel) for that.
///
/// # Example
///
/// ```rust,no_run
/// use utilkit_core::Debouncer;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let save = Debouncer::new(|text: String| println!("saving {text}"), Duration::from_millis(300));
///
///     save.call("h".to_string());
///     save.call("he".to_string());
///     save.call("hello".to_string()); // only this one is saved
///
///     tokio::time::sleep(Duration::from_millis(400)).await;
/// }
/// ```
pub struct Debouncer<A> {
    inner: Arc<DebouncerInner<A>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Send + 'static> Debouncer<A> {
    /// Wraps `target` so it only runs once calls stop for `delay`
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context. Scheduled calls
    /// are spawned onto the runtime that was current at construction.
    pub fn new<F>(target: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => panic!(
                "utilkit_core::Debouncer requires a Tokio runtime. \
                 Create it from within a #[tokio::main] or #[tokio::test] context, \
                 or use Debouncer::with_handle."
            ),
        };
        Self::with_handle(runtime, target, delay)
    }

    /// Wraps `target`, scheduling invocations on the given runtime
    pub fn with_handle<F>(runtime: Handle, target: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(DebouncerInner {
                target: Box::new(target),
                delay,
                runtime,
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Schedules the target with `args`, replacing any pending invocation
    pub fn call(&self, args: A) {
        let mut pending = self.inner.lock_pending();
        if let Some(handle) = pending.take() {
            handle.abort();
            tracing::debug!("debounced call replaced");
        }

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);

        *pending = Some(self.inner.runtime.spawn(async move {
            tokio::time::sleep(inner.delay).await;

            {
                let mut pending = inner.lock_pending();
                if inner.generation.load(Ordering::SeqCst) != generation {
                    return;
                }
                pending.take();
            }

            tracing::debug!(delay_ms = inner.delay.as_millis() as u64, "debounced call firing");
            (inner.target)(args);
        }));
    }
}

impl<A> Debouncer<A> {
    /// Drops the pending invocation, if any
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel(&self) -> bool {
        let mut pending = self.inner.lock_pending();
        self.inner.generation.fetch_add(1, Ordering::SeqCst);

        match pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::debug!("debounced call cancelled");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while an invocation is scheduled but has not fired
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner
            .lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Returns the configured delay
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}
