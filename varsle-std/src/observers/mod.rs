//! Standard observer implementations.

mod fn_observer;
mod logging;

pub use fn_observer::FnObserver;
pub use logging::LoggingObserver;
