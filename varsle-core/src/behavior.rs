//! # Behavior Capability
//!
//! A Behavior is an interchangeable unit implementing one capability. It is
//! selected and bound to an entity slot at runtime and invoked polymorphically;
//! the caller never learns which concrete implementation is active.
//!
//! # Design Philosophy
//!
//! - **Composition over subtyping**: entities hold explicit references to
//!   independently-implemented behaviors. There is no base-type fallback and
//!   no conditional dispatch on the holding entity's kind.
//! - **Entity-independent**: a behavior's effect depends only on its own
//!   type and configuration, never on the entity it is bound to. One instance
//!   may therefore be shared by many entities.
//! - **Stateless or self-contained**: behaviors own whatever state they need;
//!   entities have no cleanup obligations toward them.

use crate::{effect::Effect, error::BoxError};

/// An interchangeable unit implementing one capability.
///
/// `E` is the [`Effect`] the behavior produces when invoked, observable to
/// the caller (for many demonstrations a description `String`; `()` when the
/// effect is purely a side effect).
///
/// The trait is object safe: entities store behaviors as
/// `Arc<dyn Behavior<E>>` so one instance can back many slots.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Behavior` producing `{E}`",
    label = "missing `Behavior` implementation",
    note = "Behaviors must implement `perform`, producing an effect of type `{E}`."
)]
pub trait Behavior<E: Effect>: Send + Sync + 'static {
    /// Performs this behavior's effect.
    fn perform(&self) -> Result<E, BoxError>;
}

// Blanket impl for closures
impl<F, E> Behavior<E> for F
where
    E: Effect,
    F: Fn() -> Result<E, BoxError> + Send + Sync + 'static,
{
    fn perform(&self) -> Result<E, BoxError> {
        (self)()
    }
}
