use crate::DeferredFuture;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use tokio::sync::oneshot;

type Continuation<T, E> = Box<dyn FnOnce(Result<T, E>) + Send>;

enum DeferredState<T, E> {
    Pending(Vec<Continuation<T, E>>),
    Settled(Result<T, E>),
}

/// A value that may not be available yet.
///
/// A [`Deferred`] starts out pending and is settled exactly once, either with
/// a success value (via [`Deferred::callback()`]) or with an error (via
/// [`Deferred::errback()`]). Continuations registered with
/// [`Deferred::add_callbacks()`] fire in registration order once the value is
/// settled (or immediately, if it already is).
///
/// Cloning a [`Deferred`] produces another handle to the same pending value.
pub struct Deferred<T, E> {
    state: Arc<Mutex<DeferredState<T, E>>>,
}

impl<T, E> Deferred<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DeferredState::Pending(vec![]))),
        }
    }

    /// A [`Deferred`] that is already settled with `value`.
    pub fn succeed(value: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(DeferredState::Settled(Ok(value)))),
        }
    }

    /// A [`Deferred`] that is already settled with `error`.
    pub fn fail(error: E) -> Self {
        Self {
            state: Arc::new(Mutex::new(DeferredState::Settled(Err(error)))),
        }
    }

    /// Settle this [`Deferred`] with a success value.
    ///
    /// Panics if this [`Deferred`] has already been settled.
    pub fn callback(&self, value: T) {
        self.settle(Ok(value))
    }

    /// Settle this [`Deferred`] with an error.
    ///
    /// Panics if this [`Deferred`] has already been settled.
    pub fn errback(&self, error: E) {
        self.settle(Err(error))
    }

    /// Register a pair of continuations: `on_success` runs with the success
    /// value, `on_failure` runs with the error. Exactly one of them runs,
    /// exactly once.
    ///
    /// Returns a new [`Deferred`] that settles with whatever the continuation
    /// that ran returned.
    pub fn add_callbacks<U, F, S, R>(
        &self,
        on_success: S,
        on_failure: R,
    ) -> Deferred<U, F>
    where
        U: Clone + Send + 'static,
        F: Clone + Send + 'static,
        S: FnOnce(T) -> Result<U, F> + Send + 'static,
        R: FnOnce(E) -> Result<U, F> + Send + 'static,
    {
        let chained = Deferred::new();
        let chained_handle = chained.clone();
        self.subscribe(Box::new(move |outcome| {
            let next_outcome = match outcome {
                Ok(value) => on_success(value),
                Err(error) => on_failure(error),
            };
            chained_handle.settle(next_outcome);
        }));
        chained
    }

    /// Like [`Deferred::add_callbacks()`], but errors pass through to the
    /// returned [`Deferred`] untouched.
    pub fn add_callback<U, S>(&self, on_success: S) -> Deferred<U, E>
    where
        U: Clone + Send + 'static,
        S: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        self.add_callbacks(on_success, Err)
    }

    /// Like [`Deferred::add_callbacks()`], but success values pass through to
    /// the returned [`Deferred`] untouched.
    pub fn add_errback<F, R>(&self, on_failure: R) -> Deferred<T, F>
    where
        F: Clone + Send + 'static,
        R: FnOnce(E) -> Result<T, F> + Send + 'static,
    {
        self.add_callbacks(Ok, on_failure)
    }

    /// Convert this [`Deferred`] into a native [`Future`](std::future::Future)
    /// that resolves once this [`Deferred`] is settled.
    pub fn into_future(self) -> DeferredFuture<T, E> {
        let (sender, receiver) = oneshot::channel();
        self.subscribe(Box::new(move |outcome| {
            // The receiving half may have been dropped by an uninterested
            // caller.
            let _ = sender.send(outcome);
        }));
        DeferredFuture::new(receiver)
    }

    pub fn is_settled(&self) -> bool {
        matches!(&*self.lock_state(), DeferredState::Settled(_))
    }

    /// A copy of the settled outcome, or `None` while still pending.
    pub fn result(&self) -> Option<Result<T, E>> {
        match &*self.lock_state() {
            DeferredState::Pending(_) => None,
            DeferredState::Settled(outcome) => Some(outcome.clone()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DeferredState<T, E>> {
        // Continuations never run while the lock is held, so a poisoned lock
        // still guards a consistent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, outcome: Result<T, E>) {
        let continuations = {
            let mut state = self.lock_state();
            match &mut *state {
                DeferredState::Pending(continuations) => {
                    let continuations = std::mem::take(continuations);
                    *state = DeferredState::Settled(outcome.clone());
                    Some(continuations)
                },
                DeferredState::Settled(_) => None,
            }
        };

        let Some(continuations) = continuations else {
            panic!("Deferred was settled more than once.");
        };

        log::trace!(
            "Deferred settled as a {} with {} pending continuation(s).",
            if outcome.is_ok() { "success" } else { "failure" },
            continuations.len(),
        );
        for continuation in continuations {
            continuation(outcome.clone());
        }
    }

    fn subscribe(&self, continuation: Continuation<T, E>) {
        let settled_outcome = {
            let mut state = self.lock_state();
            match &mut *state {
                DeferredState::Pending(continuations) => {
                    continuations.push(continuation);
                    return;
                },
                DeferredState::Settled(outcome) => outcome.clone(),
            }
        };
        continuation(settled_outcome);
    }
}

impl<T, E> Clone for Deferred<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T, E> Default for Deferred<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state_name = match &*state {
            DeferredState::Pending(_) => "Pending",
            DeferredState::Settled(Ok(_)) => "Succeeded",
            DeferredState::Settled(Err(_)) => "Failed",
        };
        f.debug_struct("Deferred")
            .field("state", &state_name)
            .finish()
    }
}
