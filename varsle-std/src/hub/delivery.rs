//! Delivery policies for notification fan-out.
//!
//! A policy decides what an individual observer's failure means for the rest
//! of a notification pass. The hub is generic over its policy; [`Isolated`]
//! is the default.

use varsle_core::{NotifyError, Observer, Snapshot};

/// A strategy for delivering one snapshot to a sequence of observers.
pub trait DeliveryPolicy: Send + Sync + 'static {
    /// Deliver `snapshot` to `observers`, in order.
    fn deliver<'a, S, I>(&self, snapshot: &S, observers: I) -> Result<(), NotifyError>
    where
        S: Snapshot,
        I: Iterator<Item = &'a dyn Observer<S>>;
}

/// An isolating delivery policy.
///
/// Every observer is attempted regardless of earlier failures, so one
/// misbehaving observer cannot break unrelated ones. Failures are reported
/// collectively as [`NotifyError::Partial`] once the pass has completed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Isolated;

impl DeliveryPolicy for Isolated {
    fn deliver<'a, S, I>(&self, snapshot: &S, observers: I) -> Result<(), NotifyError>
    where
        S: Snapshot,
        I: Iterator<Item = &'a dyn Observer<S>>,
    {
        let mut total = 0;
        let mut failures = Vec::new();
        for (index, observer) in observers.enumerate() {
            total += 1;
            if let Err(source) = observer.notify(snapshot) {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, error = %source, "observer failed, continuing pass");
                failures.push((index, source));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::Partial {
                total,
                failed: failures.len(),
                failures,
            })
        }
    }
}

/// A fail-fast delivery policy.
///
/// The first failing observer aborts the remainder of the pass and its error
/// is returned as [`NotifyError::Observer`]. Observers already notified stay
/// notified. Not recommended as a production policy; provided because some
/// callers want a single failure to surface immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFast;

impl DeliveryPolicy for FailFast {
    fn deliver<'a, S, I>(&self, snapshot: &S, observers: I) -> Result<(), NotifyError>
    where
        S: Snapshot,
        I: Iterator<Item = &'a dyn Observer<S>>,
    {
        for (index, observer) in observers.enumerate() {
            observer
                .notify(snapshot)
                .map_err(|source| NotifyError::Observer { index, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingObserver, RecordingObserver};
    use std::sync::Arc;

    fn observers(
        recorder: &RecordingObserver<u64>,
    ) -> Vec<Arc<dyn Observer<u64>>> {
        vec![
            Arc::new(recorder.clone()),
            Arc::new(FailingObserver::new("boom")),
            Arc::new(recorder.clone()),
        ]
    }

    #[test]
    fn isolated_attempts_every_observer() {
        let recorder = RecordingObserver::new();
        let set = observers(&recorder);

        let err = Isolated
            .deliver(&7u64, set.iter().map(|o| o.as_ref()))
            .unwrap_err();

        assert_eq!(recorder.count(), 2);
        match err {
            NotifyError::Partial {
                total,
                failed,
                failures,
            } => {
                assert_eq!((total, failed), (3, 1));
                assert_eq!(failures[0].0, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fail_fast_aborts_the_pass() {
        let recorder = RecordingObserver::new();
        let set = observers(&recorder);

        let err = FailFast
            .deliver(&7u64, set.iter().map(|o| o.as_ref()))
            .unwrap_err();

        // Only the observer before the failure ran.
        assert_eq!(recorder.count(), 1);
        assert!(matches!(err, NotifyError::Observer { index: 1, .. }));
    }
}
