//! # Behavior Registry (Entity)
//!
//! An [`Entity`] holds named behavior slots, each bound to one concrete
//! [`Behavior`] instance. Invoking a slot delegates to whichever behavior is
//! currently bound, so callers never branch on the entity's kind.
//!
//! # Invariant
//!
//! A slot, once declared, always holds a valid behavior. This is structural
//! rather than runtime-checked: [`EntityBuilder::slot`] declares a slot and
//! supplies its default binding in one step, and [`Entity::bind`] only
//! replaces bindings of declared slots.
//!
//! # Example
//!
//! ```rust,ignore
//! struct FlyWithWings;
//!
//! impl Behavior<String> for FlyWithWings {
//!     fn perform(&self) -> Result<String, BoxError> {
//!         Ok("flying with wings".into())
//!     }
//! }
//!
//! let mut mallard = Entity::builder("mallard")
//!     .slot("fly", FlyWithWings)
//!     .slot("vocalize", LoudQuack)
//!     .build();
//!
//! assert_eq!(mallard.invoke("fly")?, "flying with wings");
//! mallard.bind("fly", Grounded)?; // last bind wins from here on
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use varsle_core::{Behavior, Effect, SlotError};

/// An entity holding named, replaceable behavior slots.
///
/// `E` is the effect type every slot on this entity produces. Behaviors are
/// stored as `Arc<dyn Behavior<E>>`, so one instance may be shared by many
/// entities (and many slots).
pub struct Entity<E: Effect> {
    id: String,
    slots: HashMap<String, Arc<dyn Behavior<E>>>,
}

impl<E: Effect> Entity<E> {
    /// Start building an entity with the given identity.
    pub fn builder(id: impl Into<String>) -> EntityBuilder<E> {
        EntityBuilder::new(id)
    }

    /// The entity's opaque identity, used only for display.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether `slot` was declared at construction.
    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Names of all declared slots, in no particular order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Replaces the behavior bound to `slot` unconditionally.
    ///
    /// Subsequent invocations of the slot use the new behavior immediately.
    /// Other slots are unaffected. Binding a slot that was never declared is
    /// rejected with [`SlotError::Undeclared`], keeping the declared slot set
    /// fixed at construction.
    pub fn bind<B: Behavior<E>>(&mut self, slot: &str, behavior: B) -> Result<(), SlotError> {
        self.bind_shared(slot, Arc::new(behavior))
    }

    /// Like [`bind`](Entity::bind), but accepts an already-shared behavior
    /// so one instance can back slots on multiple entities.
    pub fn bind_shared(
        &mut self,
        slot: &str,
        behavior: Arc<dyn Behavior<E>>,
    ) -> Result<(), SlotError> {
        match self.slots.get_mut(slot) {
            Some(bound) => {
                *bound = behavior;
                Ok(())
            }
            None => Err(SlotError::Undeclared {
                slot: slot.to_string(),
            }),
        }
    }

    /// Delegates to the behavior currently bound to `slot`.
    ///
    /// Fails with [`SlotError::Unbound`] only for a slot name that was never
    /// declared; a declared slot always has a binding. A failing behavior is
    /// surfaced as [`SlotError::Behavior`].
    pub fn invoke(&self, slot: &str) -> Result<E, SlotError> {
        let behavior = self.slots.get(slot).ok_or_else(|| SlotError::Unbound {
            slot: slot.to_string(),
        })?;
        behavior.perform().map_err(|source| SlotError::Behavior {
            slot: slot.to_string(),
            source,
        })
    }
}

impl<E: Effect> std::fmt::Debug for Entity<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.slot_names().collect();
        names.sort_unstable();
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("slots", &names)
            .finish()
    }
}

/// Builder for constructing an [`Entity`].
///
/// Each [`slot`](EntityBuilder::slot) call declares a slot together with its
/// default binding, so a built entity can never have an unbound slot.
pub struct EntityBuilder<E: Effect> {
    id: String,
    slots: HashMap<String, Arc<dyn Behavior<E>>>,
}

impl<E: Effect> EntityBuilder<E> {
    /// Create a new builder with the given entity identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slots: HashMap::new(),
        }
    }

    /// Declare a slot with its default behavior.
    ///
    /// Declaring the same name twice keeps the last default.
    pub fn slot<B: Behavior<E>>(self, name: impl Into<String>, default: B) -> Self {
        self.slot_shared(name, Arc::new(default))
    }

    /// Declare a slot whose default is an already-shared behavior.
    pub fn slot_shared(mut self, name: impl Into<String>, default: Arc<dyn Behavior<E>>) -> Self {
        self.slots.insert(name.into(), default);
        self
    }

    /// Build the entity.
    pub fn build(self) -> Entity<E> {
        Entity {
            id: self.id,
            slots: self.slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBehavior;
    use varsle_core::BoxError;

    struct Silent;

    impl Behavior<String> for Silent {
        fn perform(&self) -> Result<String, BoxError> {
            Ok(String::new())
        }
    }

    struct Says(&'static str);

    impl Behavior<String> for Says {
        fn perform(&self) -> Result<String, BoxError> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl Behavior<String> for Broken {
        fn perform(&self) -> Result<String, BoxError> {
            Err("broken behavior".into())
        }
    }

    fn duck() -> Entity<String> {
        Entity::builder("mallard")
            .slot("fly", Silent)
            .slot("vocalize", Says("quack"))
            .build()
    }

    #[test]
    fn declared_slots_are_bound_after_construction() {
        let duck = duck();
        assert!(duck.has_slot("fly"));
        assert!(duck.has_slot("vocalize"));
        assert_eq!(duck.invoke("fly").unwrap(), "");
        assert_eq!(duck.invoke("vocalize").unwrap(), "quack");
    }

    #[test]
    fn last_bind_wins() {
        let mut duck = duck();
        duck.bind("fly", Says("flapping")).unwrap();
        duck.bind("fly", Says("soaring")).unwrap();
        assert_eq!(duck.invoke("fly").unwrap(), "soaring");
    }

    #[test]
    fn rebinding_one_slot_leaves_others_alone() {
        let mut duck = duck();
        duck.bind("fly", Says("flapping")).unwrap();
        assert_eq!(duck.invoke("vocalize").unwrap(), "quack");
    }

    #[test]
    fn binding_an_undeclared_slot_is_rejected() {
        let mut duck = duck();
        let err = duck.bind("swim", Says("paddling")).unwrap_err();
        assert!(matches!(err, SlotError::Undeclared { slot } if slot == "swim"));
        assert!(!duck.has_slot("swim"));
    }

    #[test]
    fn invoking_an_undeclared_slot_is_unbound() {
        let duck = duck();
        let err = duck.invoke("swim").unwrap_err();
        assert!(matches!(err, SlotError::Unbound { slot } if slot == "swim"));
    }

    #[test]
    fn behavior_failure_is_surfaced_with_the_slot_name() {
        let mut duck = duck();
        duck.bind("fly", Broken).unwrap();
        let err = duck.invoke("fly").unwrap_err();
        assert!(matches!(err, SlotError::Behavior { slot, .. } if slot == "fly"));
    }

    #[test]
    fn one_behavior_instance_can_back_many_entities() {
        let recording = RecordingBehavior::new("quack".to_string());
        let shared: Arc<dyn Behavior<String>> = Arc::new(recording.clone());

        let a = Entity::builder("a")
            .slot_shared("vocalize", Arc::clone(&shared))
            .build();
        let b = Entity::builder("b").slot_shared("vocalize", shared).build();

        a.invoke("vocalize").unwrap();
        b.invoke("vocalize").unwrap();

        assert_eq!(recording.count(), 2);
    }

    #[test]
    fn closures_are_behaviors() {
        let mut duck = duck();
        duck.bind("vocalize", || Ok::<String, BoxError>("honk".into()))
            .unwrap();
        assert_eq!(duck.invoke("vocalize").unwrap(), "honk");
    }
}
