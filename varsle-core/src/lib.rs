//! # varsle-core
//!
//! Core capability traits for the Varsle behavior composition and
//! notification library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions that don't need the standard `varsle-std` implementations.
//!
//! # Two Primitives
//!
//! Varsle is two independent, composable primitives with no data flow
//! between them:
//!
//! ## Behavior composition ([`Behavior`])
//!
//! An entity holds named slots, each bound to one interchangeable behavior
//! selected at runtime. Invocation delegates to whichever behavior is
//! currently bound, so behavior selection is a runtime composition decision
//! rather than a subtype-dispatch decision.
//!
//! - **Capability**: one operation, no arguments, producing an effect value
//! - **Shareable**: many entities may hold the same behavior instance
//! - **Entity-independent**: a behavior's effect never depends on its holder
//!
//! ## State-change notification ([`Subject`] / [`Observer`])
//!
//! A subject owns a [`Snapshot`] of state and an ordered set of observers.
//! Every state change synchronously fans the full new snapshot out to all
//! observers, in registration order, on the caller's thread.
//!
//! - **Ordered**: registration order is notification order
//! - **Wholesale**: the snapshot is overwritten and delivered in full
//! - **Fire-and-forget**: the subject never inspects an observer's reaction
//!
//! # Error Types
//!
//! - [`VarsleError`] - Top-level error type
//! - [`SlotError`] - Slot binding and invocation errors
//! - [`NotifyError`] - Notification pass errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod effect;
mod error;
mod observer;
mod snapshot;
mod subject;

// Re-exports
pub use behavior::Behavior;
pub use effect::Effect;
pub use error::{BoxError, NotifyError, SlotError, VarsleError};
pub use observer::{Adapt, Filtered, Observer};
pub use snapshot::Snapshot;
pub use subject::Subject;
