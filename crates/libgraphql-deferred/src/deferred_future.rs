use std::future::Future;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;
use tokio::sync::oneshot;

/// A native [`Future`] that resolves to the outcome of a
/// [`Deferred`](crate::Deferred) once it settles.
///
/// Obtained from [`Deferred::into_future()`](crate::Deferred::into_future) or
/// from
/// [`ExecutionMiddleware::execution_result()`](crate::ExecutionMiddleware::execution_result).
#[derive(Debug)]
pub struct DeferredFuture<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> DeferredFuture<T, E> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<T, E>>) -> Self {
        Self { receiver }
    }
}

impl<T, E> Future for DeferredFuture<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => panic!(
                "Every handle to a Deferred was dropped before it was settled.",
            ),
        }
    }
}
