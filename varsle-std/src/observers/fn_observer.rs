//! Closure-backed observer.

use varsle_core::{BoxError, Observer, Snapshot};

/// An observer that delegates to a stored closure.
pub struct FnObserver<F> {
    callback: F,
}

impl<F> FnObserver<F> {
    /// Create a new observer from a closure.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<S, F> Observer<S> for FnObserver<F>
where
    S: Snapshot,
    F: Fn(&S) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn notify(&self, snapshot: &S) -> Result<(), BoxError> {
        (self.callback)(snapshot)
    }
}
