//! The pending-value protocol used while resolving GraphQL fields.
//!
//! Resolvers may be synchronous or asynchronous. [`Deferred`] is the engine's
//! own single-settlement pending value; [`TokioExecutionMiddleware`] adapts
//! resolver results (plain values, [`Deferred`]s, or native futures) into
//! [`MaybeDeferred`]s, and turns the engine's final [`Deferred`] back into a
//! native future.

mod deferred;
mod deferred_future;
mod execution_middleware;
mod maybe_deferred;
mod resolver_return;

pub use deferred::Deferred;
pub use deferred_future::DeferredFuture;
pub use execution_middleware::ExecutionMiddleware;
pub use execution_middleware::TokioExecutionMiddleware;
pub use maybe_deferred::MaybeDeferred;
pub use resolver_return::BoxFuture;
pub use resolver_return::ResolverReturn;

#[cfg(test)]
mod tests;
