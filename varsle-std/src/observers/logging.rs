//! Logging observer for snapshot observation.

use varsle_core::{BoxError, Observer, Snapshot};

/// An observer that logs each snapshot for debugging/observation.
pub struct LoggingObserver;

impl<S: Snapshot + std::fmt::Debug> Observer<S> for LoggingObserver {
    fn notify(&self, snapshot: &S) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?snapshot, "Observed state change");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = snapshot; // Suppress unused warning
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::Hub;

    #[test]
    fn logging_never_fails_a_pass() {
        assert!(LoggingObserver.notify(&42u64).is_ok());
    }

    #[test]
    fn registers_like_any_other_observer() {
        let mut hub: Hub<u64> = Hub::new();
        hub.register(LoggingObserver.shared());
        hub.set_state(7).unwrap();
    }
}
