//! # Observer Capability
//!
//! An Observer receives a state snapshot from a subject it has registered
//! with and reacts to it (rendering, recording, forwarding). The subject
//! never depends on observer internals, only on this capability contract.
//!
//! # Responsibilities
//!
//! 1. **Reception**: accept the full snapshot delivered on every update.
//! 2. **Reaction**: perform an arbitrary side effect; the subject ignores
//!    any output beyond success or failure.
//! 3. **Registration**: the observer side holds the `Arc` it registered
//!    under, which is also its identity for unregistration.
//!
//! Combinators like [`filter`] and [`adapt`] enable declarative observer
//! pipelines without touching the subject.
//!
//! [`filter`]: Observer::filter
//! [`adapt`]: Observer::adapt

use crate::{error::BoxError, snapshot::Snapshot};
use std::sync::Arc;

/// A capability that receives state snapshots from a subject.
///
/// The `Result` exists so a subject's delivery policy can decide what a
/// failing observer means for the rest of the pass; the subject never
/// inspects a successful observer's reaction.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Observer` of `{S}`",
    label = "missing `Observer` implementation",
    note = "Observers must implement `notify` for the snapshot type `{S}`."
)]
pub trait Observer<S: Snapshot>: Send + Sync + 'static {
    /// Called with the subject's full state snapshot on every update.
    fn notify(&self, snapshot: &S) -> Result<(), BoxError>;

    /// Only forwards snapshots matching a predicate.
    fn filter<F>(self, predicate: F) -> Filtered<Self, F>
    where
        Self: Sized,
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Filtered {
            observer: self,
            predicate,
        }
    }

    /// Observes a derived snapshot computed from the subject's snapshot.
    ///
    /// Lets an observer of `S` attach to a subject publishing `Outer` by
    /// supplying the projection `Outer -> S`.
    fn adapt<Outer, F>(self, mapper: F) -> Adapt<Self, F, S>
    where
        Self: Sized,
        Outer: Snapshot,
        F: Fn(&Outer) -> S + Send + Sync + 'static,
    {
        Adapt {
            observer: self,
            mapper,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Wraps this observer in an `Arc`, ready for registration.
    fn shared(self) -> Arc<dyn Observer<S>>
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

/// An observer that forwards only snapshots matching a predicate.
pub struct Filtered<O, F> {
    observer: O,
    predicate: F,
}

impl<O, F, S> Observer<S> for Filtered<O, F>
where
    S: Snapshot,
    O: Observer<S>,
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    fn notify(&self, snapshot: &S) -> Result<(), BoxError> {
        if (self.predicate)(snapshot) {
            self.observer.notify(snapshot)
        } else {
            Ok(())
        }
    }
}

/// An observer of a derived snapshot type.
pub struct Adapt<O, F, Inner = ()> {
    observer: O,
    mapper: F,
    _phantom: std::marker::PhantomData<Inner>,
}

impl<O, F, Outer, Inner> Observer<Outer> for Adapt<O, F, Inner>
where
    Outer: Snapshot,
    Inner: Snapshot,
    O: Observer<Inner>,
    F: Fn(&Outer) -> Inner + Send + Sync + 'static,
{
    fn notify(&self, snapshot: &Outer) -> Result<(), BoxError> {
        let derived = (self.mapper)(snapshot);
        self.observer.notify(&derived)
    }
}

// Allow Arc<dyn Observer> to be used where Observer is expected.
impl<S: Snapshot> Observer<S> for Arc<dyn Observer<S>> {
    fn notify(&self, snapshot: &S) -> Result<(), BoxError> {
        self.as_ref().notify(snapshot)
    }
}
