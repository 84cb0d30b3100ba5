use crate::Deferred;
use std::future::Future;
use std::pin::Pin;

/// A boxed, sendable native future as returned by asynchronous resolvers.
pub type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'static>>;

/// The shapes a resolver may hand back to the engine.
///
/// Synchronous resolvers return [`ResolverReturn::Ready`]. Resolvers that
/// already speak the engine's pending-value protocol return
/// [`ResolverReturn::Deferred`]. Asynchronous resolvers return
/// [`ResolverReturn::Future`], which is scheduled on the tokio runtime by
/// [`ExecutionMiddleware::run_resolve_fn()`](crate::ExecutionMiddleware::run_resolve_fn).
pub enum ResolverReturn<T, E> {
    Deferred(Deferred<T, E>),
    Future(BoxFuture<T, E>),
    Ready(T),
}

impl<T, E> ResolverReturn<T, E> {
    /// Box up a native future.
    pub fn future(future: impl Future<Output = Result<T, E>> + Send + 'static) -> Self {
        Self::Future(Box::pin(future))
    }
}

impl<T, E> std::convert::From<Deferred<T, E>> for ResolverReturn<T, E> {
    fn from(value: Deferred<T, E>) -> Self {
        Self::Deferred(value)
    }
}

impl<T: std::fmt::Debug, E> std::fmt::Debug for ResolverReturn<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deferred(deferred) => f.debug_tuple("Deferred").field(deferred).finish(),
            Self::Future(_) => f.write_str("Future(..)"),
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
        }
    }
}
