use crate::Deferred;

/// The result of running a resolver through
/// [`ExecutionMiddleware::run_resolve_fn()`](crate::ExecutionMiddleware::run_resolve_fn):
/// either a value that is available right now, or a [`Deferred`] that will
/// settle later.
#[derive(Clone, Debug)]
pub enum MaybeDeferred<T, E> {
    Deferred(Deferred<T, E>),
    Ready(T),
}

impl<T, E> MaybeDeferred<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Treat both shapes uniformly: a ready value fires `on_success`
    /// immediately, a pending one fires the matching continuation once it
    /// settles.
    pub fn add_callbacks<U, F, S, R>(
        self,
        on_success: S,
        on_failure: R,
    ) -> Deferred<U, F>
    where
        U: Clone + Send + 'static,
        F: Clone + Send + 'static,
        S: FnOnce(T) -> Result<U, F> + Send + 'static,
        R: FnOnce(E) -> Result<U, F> + Send + 'static,
    {
        self.into_deferred().add_callbacks(on_success, on_failure)
    }

    pub fn as_ready(&self) -> Option<&T> {
        if let Self::Ready(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn into_deferred(self) -> Deferred<T, E> {
        match self {
            Self::Deferred(deferred) => deferred,
            Self::Ready(value) => Deferred::succeed(value),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<T, E> std::convert::From<Deferred<T, E>> for MaybeDeferred<T, E> {
    fn from(value: Deferred<T, E>) -> Self {
        Self::Deferred(value)
    }
}
