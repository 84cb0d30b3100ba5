use crate::Deferred;
use crate::DeferredFuture;
use crate::MaybeDeferred;
use crate::ResolverReturn;
use inherent::inherent;
use tokio::runtime::Handle;

/// The two hooks an execution engine calls at its boundaries: once around
/// every resolver invocation, and once around an entire execution.
pub trait ExecutionMiddleware {
    /// Invoke `resolver` and normalize its return value into a
    /// [`MaybeDeferred`].
    fn run_resolve_fn<T, E, R>(&self, resolver: R) -> MaybeDeferred<T, E>
    where
        T: Clone + Send + 'static,
        E: Clone + Send + 'static,
        R: FnOnce() -> ResolverReturn<T, E>;

    /// Invoke `executor` (which must produce a [`Deferred`]) and expose its
    /// eventual outcome as a native future. Never blocks.
    fn execution_result<T, E, X>(&self, executor: X) -> DeferredFuture<T, E>
    where
        T: Clone + Send + 'static,
        E: Clone + Send + 'static,
        X: FnOnce() -> MaybeDeferred<T, E>;
}

/// An [`ExecutionMiddleware`] that schedules asynchronous resolvers on a
/// tokio runtime.
///
/// By default, futures are spawned onto the runtime of the calling context
/// (see [`Handle::current()`]). Use [`TokioExecutionMiddleware::with_handle()`]
/// to pin them to a specific runtime instead.
#[derive(Clone, Debug, Default)]
pub struct TokioExecutionMiddleware {
    handle: Option<Handle>,
}

impl TokioExecutionMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn runtime_handle(&self) -> Handle {
        if let Some(handle) = &self.handle {
            return handle.clone();
        }
        Handle::try_current().unwrap_or_else(|err| panic!(
            "A resolver returned a future outside of a tokio runtime: {err}",
        ))
    }
}

#[inherent]
impl ExecutionMiddleware for TokioExecutionMiddleware {
    pub fn run_resolve_fn<T, E, R>(&self, resolver: R) -> MaybeDeferred<T, E>
    where
        T: Clone + Send + 'static,
        E: Clone + Send + 'static,
        R: FnOnce() -> ResolverReturn<T, E>,
    {
        match resolver() {
            ResolverReturn::Ready(value) => MaybeDeferred::Ready(value),

            ResolverReturn::Deferred(deferred) => MaybeDeferred::Deferred(deferred),

            ResolverReturn::Future(future) => {
                let deferred = Deferred::new();
                let completion = deferred.clone();
                log::trace!("Scheduling an asynchronous resolver result.");
                let runtime = self.runtime_handle();
                let task = runtime.spawn(future);
                runtime.spawn(async move {
                    match task.await {
                        Ok(Ok(value)) => completion.callback(value),
                        Ok(Err(error)) => completion.errback(error),
                        // There is no `E` to settle with, so the Deferred
                        // stays pending.
                        Err(join_error) => log::warn!(
                            "An asynchronous resolver did not complete: {join_error}",
                        ),
                    }
                });
                MaybeDeferred::Deferred(deferred)
            },
        }
    }

    pub fn execution_result<T, E, X>(&self, executor: X) -> DeferredFuture<T, E>
    where
        T: Clone + Send + 'static,
        E: Clone + Send + 'static,
        X: FnOnce() -> MaybeDeferred<T, E>,
    {
        let MaybeDeferred::Deferred(deferred) = executor() else {
            panic!(
                "Another middleware has converted the execution result away \
                from a Deferred.",
            );
        };
        deferred.into_future()
    }
}
