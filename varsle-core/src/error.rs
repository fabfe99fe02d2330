//! Error types for Varsle.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VarsleError`] - Top-level error type for all Varsle operations
//! - [`SlotError`] - Errors from behavior slot binding and invocation
//! - [`NotifyError`] - Errors from a notification pass

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Varsle operations.
#[derive(Error, Debug)]
pub enum VarsleError {
    /// An error occurred in a behavior slot.
    #[error("slot error: {0}")]
    Slot(#[from] SlotError),

    /// An error occurred during a notification pass.
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors from behavior slot binding and invocation.
#[derive(Error, Debug)]
pub enum SlotError {
    /// The slot has no bound behavior.
    ///
    /// The standard entity builder declares every slot together with its
    /// default binding, so this is only reachable by invoking a slot name
    /// that was never declared.
    #[error("no behavior bound for slot `{slot}`")]
    Unbound {
        /// The slot name that was invoked.
        slot: String,
    },

    /// An attempt was made to rebind a slot the entity never declared.
    #[error("slot `{slot}` was not declared at construction")]
    Undeclared {
        /// The slot name that was bound.
        slot: String,
    },

    /// The bound behavior failed while performing its effect.
    #[error("behavior failed for slot `{slot}`")]
    Behavior {
        /// The slot whose behavior failed.
        slot: String,
        /// The underlying behavior error.
        #[source]
        source: BoxError,
    },
}

/// Errors from a notification pass.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// An observer failed and the pass was aborted at that point.
    ///
    /// Produced by fail-fast delivery; observers after `index` were never
    /// reached in this pass.
    #[error("observer at position {index} failed, pass aborted")]
    Observer {
        /// Registration-order position of the failing observer.
        index: usize,
        /// The underlying observer error.
        #[source]
        source: BoxError,
    },

    /// One or more observers failed; every observer was still attempted.
    ///
    /// Produced by isolating delivery, which reports failures only after
    /// the pass has run to completion.
    #[error("{failed} of {total} observers failed during notification")]
    Partial {
        /// Number of observers in the pass.
        total: usize,
        /// Number of observers that failed.
        failed: usize,
        /// Each failure, as (registration-order position, error).
        failures: Vec<(usize, BoxError)>,
    },
}

// Convenience conversions
impl From<BoxError> for VarsleError {
    fn from(err: BoxError) -> Self {
        VarsleError::Custom(err)
    }
}
