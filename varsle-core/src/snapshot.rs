//! Snapshot trait for subject state records.

/// A marker trait for state records delivered to observers.
///
/// A snapshot is a fixed-shape copy of a subject's state. Subjects overwrite
/// their snapshot wholesale on every update and hand each observer the full
/// new value, which is why `Clone` is part of the contract.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct Readings { temperature: f64, humidity: f64, pressure: f64 }
///
/// impl Snapshot for Readings {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Snapshot",
    label = "must be `Clone + Send + Sync + 'static`",
    note = "Subject state is copied wholesale to every observer on each update."
)]
pub trait Snapshot: Clone + Send + Sync + 'static {}

// Common Snapshot implementations
impl Snapshot for () {}
impl Snapshot for String {}
impl Snapshot for &'static str {}
impl Snapshot for u64 {}
impl Snapshot for i64 {}
impl Snapshot for f64 {}
impl<T: Snapshot> Snapshot for std::sync::Arc<T> {}
impl<T: Snapshot> Snapshot for Vec<T> {}
impl<T: Snapshot> Snapshot for Option<T> {}
