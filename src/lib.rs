//! A `Doer` capability and a `User` that depends on it. Tests (or the `mock`
//! feature) swap the capability for the mockall-generated `MockDoer`.

pub mod doer;
pub mod user;

#[cfg(any(test, feature = "mock"))]
pub use doer::MockDoer;
pub use doer::{Doer, DoerError, RealDoer};
pub use user::User;
