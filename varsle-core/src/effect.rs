//! Effect trait for behavior outputs.

/// A marker trait for the effect values behaviors produce.
///
/// An effect is whatever a behavior's one operation yields to its caller:
/// often a description `String` in demonstrations, `()` when the behavior
/// acts purely through side effects.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Effect",
    label = "must be `Send + 'static`",
    note = "Behavior effects are returned by value through a trait object."
)]
pub trait Effect: Send + 'static {}

// Common Effect implementations
impl Effect for () {}
impl Effect for String {}
impl Effect for &'static str {}
impl Effect for u64 {}
impl Effect for i64 {}
impl Effect for f64 {}
impl Effect for bool {}
impl<T: Effect> Effect for Box<T> {}
impl<T: Effect> Effect for Vec<T> {}
impl<T: Effect> Effect for Option<T> {}
