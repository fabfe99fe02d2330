//! # varsle-std
//!
//! Standard implementations for the Varsle behavior composition and
//! notification library.
//!
//! This crate provides:
//! - **Behavior registry**: [`Entity`], [`EntityBuilder`]
//! - **Notification hub**: [`Hub`] with pluggable delivery policies
//! - **Standard observers**: Closure-backed, Logging
//! - **Testing utilities**: recording and failing doubles
//!
//! [`Entity`]: entity::Entity
//! [`EntityBuilder`]: entity::EntityBuilder
//! [`Hub`]: hub::Hub

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use varsle_core;

// Modules
pub mod entity;
pub mod hub;
pub mod observers;
pub mod testing;
