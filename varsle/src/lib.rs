//! # varsle - Runtime Behavior Composition & Notification
//!
//! `varsle` provides two independent, composable primitives:
//!
//! - **Behavior registry**: an [`Entity`] holds named slots, each bound to an
//!   interchangeable [`Behavior`] selected at runtime and replaceable at any
//!   time. Invocation delegates polymorphically; there is no subtype
//!   dispatch and no base-type fallback.
//! - **Notification hub**: a [`Hub`] owns a state [`Snapshot`] and an ordered
//!   set of [`Observer`]s, and synchronously fans the full new snapshot out
//!   to all of them, in registration order, on every update.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use varsle::prelude::*;
//!
//! // Behavior composition: defaults at construction, rebind at runtime.
//! let mut duck = Entity::builder("mallard")
//!     .slot("fly", NoFlight)
//!     .slot("vocalize", Quack)
//!     .build();
//! duck.bind("fly", FlyWithWings)?;
//! duck.invoke("fly")?;
//!
//! // Notification: register, then every set_state fans out.
//! let mut station: Hub<Readings> = Hub::new();
//! station.register(CurrentDisplay::new().shared());
//! station.set_state(Readings { temperature: 80.0, humidity: 65.0, pressure: 30.4 })?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use varsle_core::{
    // Behavior capability
    Behavior,
    // Error types
    BoxError,
    Effect,
    NotifyError,
    // Observer capability (with combinators)
    Observer,
    SlotError,
    // Snapshot
    Snapshot,
    // Subject capability
    Subject,
    VarsleError,
};

// Behavior registry
pub use varsle_std::entity::{Entity, EntityBuilder};

// Notification hub
pub use varsle_std::hub::{DeliveryPolicy, FailFast, Hub, Isolated};

/// Observer combinator adapters.
pub mod combinators {
    pub use varsle_core::{Adapt, Filtered};
}

/// Standard observer implementations.
pub mod observers {
    pub use varsle_std::observers::{FnObserver, LoggingObserver};
}

/// Testing utilities.
pub mod testing {
    pub use varsle_std::testing::{
        FailingBehavior, FailingObserver, RecordingBehavior, RecordingObserver,
    };
}

/// Prelude module - common imports for Varsle.
///
/// # Usage
///
/// ```rust,ignore
/// use varsle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Behavior,
        // Errors
        BoxError,
        Effect,
        // Registry
        Entity,
        EntityBuilder,
        // Hub
        FailFast,
        Hub,
        Isolated,
        NotifyError,
        Observer,
        SlotError,
        Snapshot,
        Subject,
        VarsleError,
    };
}
